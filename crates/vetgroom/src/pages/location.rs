//! Location pages

use serde::Serialize;

use super::{Link, LocationCard, PageMeta, ServiceCard, Site, combined_link};
use crate::catalog::Location;
use crate::images::ImageRotation;

/// Services featured at the top of a location page
const FEATURED_SERVICES: usize = 6;

/// `/locations`
#[derive(Debug, Clone, Serialize)]
pub struct LocationsIndexPage {
    pub meta: PageMeta,
    pub locations: Vec<LocationCard>,
}

impl LocationsIndexPage {
    pub fn build(site: &Site) -> Self {
        Self {
            meta: PageMeta::page(
                "Service Areas - Pet Grooming Across Brisbane",
                "Vet Groomers serves 50+ locations across Brisbane. Find professional pet grooming services in your suburb. Mobile grooming available.",
            ),
            locations: site
                .catalog
                .locations
                .all()
                .iter()
                .map(LocationCard::from)
                .collect(),
        }
    }
}

/// `/locations/{location}`
#[derive(Debug, Clone, Serialize)]
pub struct LocationPage {
    pub meta: PageMeta,
    pub location: Location,
    pub heading: String,
    pub featured_services: Vec<ServiceCard>,
    /// Landing page of every service in this location
    pub services: Vec<Link>,
}

impl LocationPage {
    /// `None` when the location does not exist
    pub fn build(site: &Site, slug: &str, images: &mut ImageRotation<'_>) -> Option<Self> {
        let location = site.catalog.location(slug)?;
        let name = &location.name;
        let services = site.catalog.services.all();

        Some(Self {
            meta: PageMeta::page(
                format!("Pet Grooming {name} | Vet Groomers Brisbane"),
                format!(
                    "Professional pet grooming services in {name}. Expert dog and cat grooming, mobile services, and specialized care. Fast response times. Call 1300 VET GROOM."
                ),
            )
            .with_keywords(format!(
                "pet grooming {name}, dog grooming {name}, cat grooming {name}, mobile grooming {name}"
            )),
            heading: format!("Pet Grooming in {name}"),
            featured_services: services
                .iter()
                .take(FEATURED_SERVICES)
                .map(|service| ServiceCard::new(service, images))
                .collect(),
            services: services
                .iter()
                .map(|service| combined_link(service, location))
                .collect(),
            location: location.clone(),
        })
    }
}
