//! Vetgroom holds the content and logic behind the Vet Groomers Brisbane
//! site: service and location tables, combined `<service>-in-<location>`
//! landing page slugs, the blog, and lead capture.

pub mod catalog;
pub mod error;
pub mod images;
pub mod leads;
pub mod markdown;
pub mod slug;

#[cfg(feature = "fs")]
pub mod blog;
#[cfg(feature = "fs")]
pub mod pages;

// Re-export core types
pub use catalog::{Catalog, Location, Service, SlugTable, Slugged};
pub use error::{ContentError, LeadError, Result, SlugError, VetgroomError};
pub use images::{HeroImages, ImageLibrary, ImageRotation};
pub use leads::{FormStatus, LeadClient, LeadConfig, LeadFields, LeadForm};
pub use markdown::markdown_to_html;
pub use slug::CombinedSlug;

#[cfg(feature = "fs")]
pub use blog::{BlogPost, BlogStore};
#[cfg(feature = "fs")]
pub use pages::{PageMeta, Site};

/// Get the library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
