//! Page view models
//!
//! Each route of the site is answered by one of the structs in this module.
//! They carry exactly what the presentation layer interpolates: metadata,
//! headings, images, links and rendered post HTML. Page builders take an
//! [`ImageRotation`] by `&mut` so image choice is scoped to one page.

pub mod blog;
pub mod location;
pub mod service;
pub mod static_pages;

use serde::Serialize;

use crate::blog::BlogStore;
use crate::catalog::{Catalog, Location, Service};
use crate::images::{ImageLibrary, ImageRotation};
use crate::slug::CombinedSlug;

pub use blog::{BlogCard, BlogIndexPage, BlogPostPage};
pub use location::{LocationPage, LocationsIndexPage};
pub use service::{ServiceContent, ServiceLocationPage, ServicePage, ServicesIndexPage};
pub use static_pages::{AboutPage, ContactPage, HomePage};

pub const SITE_NAME: &str = "Vet Groomers Brisbane";
pub const PHONE_DISPLAY: &str = "1300 VET GROOM";
pub const PHONE_HREF: &str = "tel:1300VETGROOM";
/// Path the contact form posts to
pub const LEAD_SUBMIT_PATH: &str = "/api/leads";

const DEFAULT_TITLE: &str = "Vet Groomers Brisbane | Professional Pet Grooming Services";
const DEFAULT_DESCRIPTION: &str = "Professional pet grooming services in Brisbane. Expert dog and cat grooming, mobile services, and specialized care. Book your appointment today!";
const DEFAULT_KEYWORDS: &str = "pet grooming Brisbane, dog grooming Brisbane, cat grooming Brisbane, mobile pet grooming, professional pet groomers";

/// `<head>` metadata of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl PageMeta {
    /// Metadata of the home page, untouched by the title template
    pub fn site_default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            keywords: Some(DEFAULT_KEYWORDS.to_string()),
        }
    }

    /// Metadata for an inner page; the title goes through `%s | Vet Groomers Brisbane`
    pub fn page(title: impl AsRef<str>, description: impl Into<String>) -> Self {
        Self {
            title: format!("{} | {}", title.as_ref(), SITE_NAME),
            description: description.into(),
            keywords: None,
        }
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }
}

/// A plain link with its visible label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Service tile used on listing pages
#[derive(Debug, Clone, Serialize)]
pub struct ServiceCard {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: String,
    pub href: String,
}

impl ServiceCard {
    pub fn new(service: &Service, images: &mut ImageRotation<'_>) -> Self {
        Self {
            name: service.name.clone(),
            slug: service.slug.clone(),
            description: service.description.clone(),
            image: images.service_image(&service.slug).to_string(),
            href: service_path(&service.slug),
        }
    }
}

/// Location tile used on listing pages
#[derive(Debug, Clone, Serialize)]
pub struct LocationCard {
    pub name: String,
    pub slug: String,
    pub href: String,
}

impl From<&Location> for LocationCard {
    fn from(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            slug: location.slug.clone(),
            href: location_path(&location.slug),
        }
    }
}

pub fn service_path(slug: &str) -> String {
    format!("/services/{}", slug)
}

pub fn location_path(slug: &str) -> String {
    format!("/locations/{}", slug)
}

pub fn blog_path(slug: &str) -> String {
    format!("/blog/{}", slug)
}

/// Link to the landing page of a service in a location
pub fn combined_link(service: &Service, location: &Location) -> Link {
    Link::new(
        format!("{} in {}", service.name, location.name),
        CombinedSlug::new(&service.slug, &location.slug).path(),
    )
}

/// Everything the page builders read from
#[derive(Debug, Clone)]
pub struct Site {
    pub catalog: Catalog,
    pub images: ImageLibrary,
    pub blog: BlogStore,
}

impl Site {
    pub fn new(catalog: Catalog, images: ImageLibrary, blog: BlogStore) -> Self {
        Self {
            catalog,
            images,
            blog,
        }
    }
}
