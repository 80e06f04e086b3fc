//! Error types for the vetgroom library
//!
//! Errors are grouped by domain. Almost every failure in this crate degrades
//! to "not found" or an inline form message; only content loading at startup
//! is fatal.

use thiserror::Error;

/// Main error type for the vetgroom library
#[derive(Error, Debug)]
pub enum VetgroomError {
    /// Service/location data could not be loaded or is inconsistent
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// A combined slug could not be parsed or resolved
    #[error("Slug error: {0}")]
    Slug(#[from] SlugError),

    /// Lead submission failed
    #[error("Lead error: {0}")]
    Lead(#[from] LeadError),
}

/// Errors raised while loading the static content files
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Malformed content in {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("Duplicate {kind} slug: {slug}")]
    DuplicateSlug { kind: &'static str, slug: String },

    #[error("{kind} slug '{slug}' contains the reserved separator '-in-'")]
    AmbiguousSlug { kind: &'static str, slug: String },

    #[error("No {kind} records")]
    Empty { kind: &'static str },
}

/// Combined slug failures. Every variant is rendered as a not-found page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    #[error("Missing '-in-' separator: {slug}")]
    MissingSeparator { slug: String },

    #[error("Separator '-in-' appears more than once: {slug}")]
    AmbiguousSeparator { slug: String },

    #[error("Empty {part} in combined slug: {slug}")]
    EmptyPart { slug: String, part: &'static str },

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Unknown location: {0}")]
    UnknownLocation(String),
}

/// Lead submission failures
#[derive(Error, Debug)]
pub enum LeadError {
    /// The endpoint answered with a non-2xx status
    #[error("Lead rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never completed or the response body was unreadable
    #[error("Lead transport failure: {0}")]
    Transport(String),

    /// The client could not be built
    #[error("Lead client configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for vetgroom operations
pub type Result<T> = std::result::Result<T, VetgroomError>;

impl From<reqwest::Error> for LeadError {
    fn from(error: reqwest::Error) -> Self {
        LeadError::Transport(error.to_string())
    }
}

impl LeadError {
    /// Message shown inline on the contact form
    pub fn user_message(&self) -> String {
        match self {
            LeadError::Rejected { message, .. } => message.clone(),
            LeadError::Transport(_) | LeadError::Config(_) => {
                crate::leads::NETWORK_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl SlugError {
    /// Whether the slug was well formed but named an unknown record
    pub fn is_unknown_record(&self) -> bool {
        matches!(
            self,
            SlugError::UnknownService(_) | SlugError::UnknownLocation(_)
        )
    }
}
