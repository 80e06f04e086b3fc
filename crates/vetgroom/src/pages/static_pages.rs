//! Home, about and contact pages

use serde::Serialize;

use super::{
    LEAD_SUBMIT_PATH, Link, LocationCard, PHONE_DISPLAY, PHONE_HREF, PageMeta, ServiceCard, Site,
};
use crate::images::ImageRotation;
use crate::leads::LeadConfig;

const HOME_SERVICES: usize = 6;
const HOME_LOCATIONS: usize = 15;

/// A titled block of copy
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

impl Feature {
    fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// `/`
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub meta: PageMeta,
    pub hero_image: String,
    pub heading: String,
    pub phone: Link,
    pub services: Vec<ServiceCard>,
    pub locations: Vec<LocationCard>,
    pub location_count: usize,
    pub features: Vec<Feature>,
}

impl HomePage {
    pub fn build(site: &Site, images: &mut ImageRotation<'_>) -> Self {
        Self {
            meta: PageMeta::site_default(),
            hero_image: site.images.hero.homepage.clone(),
            heading: "Brisbane's Premier Pet Grooming Experts".to_string(),
            phone: Link::new(PHONE_DISPLAY, PHONE_HREF),
            services: site
                .catalog
                .services
                .all()
                .iter()
                .take(HOME_SERVICES)
                .map(|service| ServiceCard::new(service, images))
                .collect(),
            locations: site
                .catalog
                .locations
                .all()
                .iter()
                .take(HOME_LOCATIONS)
                .map(LocationCard::from)
                .collect(),
            location_count: site.catalog.locations.len(),
            features: vec![
                Feature::new(
                    "Certified Professionals",
                    "All our groomers are certified and experienced with all breeds and temperaments.",
                ),
                Feature::new(
                    "Fast Service",
                    "Same-day appointments available. We respect your time and your pet's comfort.",
                ),
                Feature::new(
                    "Satisfaction Guaranteed",
                    "We stand behind our work with a 100% satisfaction guarantee.",
                ),
            ],
        }
    }
}

/// `/about`
#[derive(Debug, Clone, Serialize)]
pub struct AboutPage {
    pub meta: PageMeta,
    pub hero_image: String,
    pub heading: String,
    pub tagline: String,
    pub story: Vec<String>,
    pub values: Vec<Feature>,
}

impl AboutPage {
    pub fn build(site: &Site) -> Self {
        Self {
            meta: PageMeta::page(
                "About Us - Brisbane Pet Grooming Experts",
                "Learn about Vet Groomers Brisbane. Over 15 years of professional pet grooming experience. Certified groomers, modern facilities, and compassionate care.",
            ),
            hero_image: site.images.hero.about.clone(),
            heading: "About Vet Groomers".to_string(),
            tagline: "Brisbane's Most Trusted Pet Grooming Service Since 2010".to_string(),
            story: vec![
                "Vet Groomers was founded in 2010 with a simple mission: to provide the highest quality pet grooming services in Brisbane. What started as a small grooming salon has grown into one of Brisbane's most trusted pet care providers, serving over 50 suburbs across the greater Brisbane area.".to_string(),
                "Our team of certified professional groomers has over 15 years of combined experience working with all breeds, sizes, and temperaments. We understand that every pet is unique and deserves individualized care and attention.".to_string(),
                "Today, we're proud to have groomed over 10,000 happy pets and built lasting relationships with pet owners throughout Brisbane. Our commitment to excellence, safety, and compassionate care has made us the go-to choice for pet grooming in the area.".to_string(),
            ],
            values: vec![
                Feature::new(
                    "Compassionate Care",
                    "We treat every pet as if they were our own, with patience, kindness, and understanding. Your pet's comfort and wellbeing is our top priority.",
                ),
                Feature::new(
                    "Professional Excellence",
                    "Our groomers are certified professionals who stay updated on the latest grooming techniques, breed standards, and pet care best practices.",
                ),
                Feature::new(
                    "Safety First",
                    "We maintain the highest safety standards with sanitized equipment, secure facilities, and careful handling procedures for every pet.",
                ),
            ],
        }
    }
}

/// What the contact form needs to post a lead
#[derive(Debug, Clone, Serialize)]
pub struct ContactForm {
    pub action: String,
    pub business_id: String,
    pub source: String,
}

/// `/contact`
#[derive(Debug, Clone, Serialize)]
pub struct ContactPage {
    pub meta: PageMeta,
    pub hero_image: String,
    pub heading: String,
    pub phone: Link,
    pub email: Link,
    pub service_area: String,
    pub hours: Vec<String>,
    pub form: ContactForm,
}

impl ContactPage {
    pub fn build(site: &Site, leads: &LeadConfig) -> Self {
        Self {
            meta: PageMeta::page(
                "Contact Us - Get Your Free Pet Grooming Quote",
                "Contact Vet Groomers Brisbane for professional pet grooming services. Call 1300 VET GROOM or request a free quote online. Serving 50+ locations across Brisbane.",
            ),
            hero_image: site.images.hero.contact.clone(),
            heading: "Contact Us".to_string(),
            phone: Link::new(PHONE_DISPLAY, PHONE_HREF),
            email: Link::new("info@vetgroomers.com.au", "mailto:info@vetgroomers.com.au"),
            service_area: "Serving Brisbane CBD and 50+ surrounding suburbs".to_string(),
            hours: vec![
                "Monday - Friday: 7am - 7pm".to_string(),
                "Saturday: 8am - 6pm".to_string(),
            ],
            form: ContactForm {
                action: LEAD_SUBMIT_PATH.to_string(),
                business_id: leads.business_id.clone(),
                source: leads.source.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::BlogStore;
    use crate::catalog::Catalog;
    use crate::images::ImageLibrary;

    fn site() -> Site {
        Site::new(
            Catalog::builtin().unwrap(),
            ImageLibrary::builtin(),
            BlogStore::new("/nonexistent"),
        )
    }

    #[test]
    fn test_home_page_limits() {
        let site = site();
        let mut images = site.images.rotation();
        let page = HomePage::build(&site, &mut images);

        assert_eq!(page.services.len(), 6);
        assert_eq!(page.locations.len(), 15);
        assert_eq!(page.location_count, 20);
        assert_eq!(page.meta, PageMeta::site_default());
        assert_eq!(page.services[0].href, "/services/dog-grooming");
    }

    #[test]
    fn test_contact_page_form() {
        let page = ContactPage::build(&site(), &LeadConfig::default());
        assert_eq!(page.form.action, "/api/leads");
        assert_eq!(page.form.business_id, "vet-groomers-001");
        assert_eq!(page.phone.href, "tel:1300VETGROOM");
    }
}
