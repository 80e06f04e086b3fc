//! Server configuration management

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use vetgroom::LeadConfig;
use vetgroom::leads::{DEFAULT_BUSINESS_ID, DEFAULT_ENDPOINT, DEFAULT_SOURCE};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Directory holding `services.json` and `locations.json`; built-in data when unset
    pub content_dir: Option<PathBuf>,

    /// Directory of blog post files
    pub blog_dir: PathBuf,

    /// External lead-capture endpoint
    pub lead_endpoint: String,

    pub lead_business_id: String,

    /// Source tag attached to every submitted lead
    pub lead_source: String,

    /// Timeout for lead submissions in seconds
    pub lead_timeout_seconds: u64,

    /// CORS allowed origins
    pub cors_origins: Vec<String>,

    /// Whether to enable debug logging
    pub debug: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ApiError::Config("Invalid PORT value".to_string()))?,
            content_dir: std::env::var("CONTENT_DIR").ok().map(PathBuf::from),
            blog_dir: std::env::var("BLOG_DIR")
                .unwrap_or_else(|_| "content/blog".to_string())
                .into(),
            lead_endpoint: std::env::var("LEAD_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            lead_business_id: std::env::var("LEAD_BUSINESS_ID")
                .unwrap_or_else(|_| DEFAULT_BUSINESS_ID.to_string()),
            lead_source: std::env::var("LEAD_SOURCE")
                .unwrap_or_else(|_| DEFAULT_SOURCE.to_string()),
            lead_timeout_seconds: std::env::var("LEAD_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| ApiError::Config("Invalid LEAD_TIMEOUT_SECONDS value".to_string()))?,
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            debug: std::env::var("DEBUG")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        })
    }

    /// Settings for the lead client
    pub fn lead_config(&self) -> LeadConfig {
        LeadConfig {
            endpoint: self.lead_endpoint.clone(),
            business_id: self.lead_business_id.clone(),
            source: self.lead_source.clone(),
            timeout: Some(Duration::from_secs(self.lead_timeout_seconds)),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            content_dir: None,
            blog_dir: PathBuf::from("content/blog"),
            lead_endpoint: DEFAULT_ENDPOINT.to_string(),
            lead_business_id: DEFAULT_BUSINESS_ID.to_string(),
            lead_source: DEFAULT_SOURCE.to_string(),
            lead_timeout_seconds: 10,
            cors_origins: vec!["*".to_string()],
            debug: false,
        }
    }
}
