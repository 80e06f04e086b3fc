//! Service pages and the service-in-location landing pages

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    Link, PHONE_DISPLAY, PHONE_HREF, PageMeta, ServiceCard, Site, combined_link, location_path,
    service_path,
};
use crate::catalog::{Location, Service};
use crate::error::SlugError;
use crate::images::ImageRotation;
use crate::slug::CombinedSlug;

/// Locations linked from a service page
const SERVICE_PAGE_LOCATIONS: usize = 15;

static SPECIALISED_CONTENT: Lazy<HashMap<String, ServiceContent>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../data/service_content.json")).unwrap_or_else(|e| {
        warn!("Built-in service content is malformed, using generic copy: {}", e);
        HashMap::new()
    })
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Long-form copy of a service page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceContent {
    pub intro: String,
    pub included: Vec<String>,
    pub process: String,
    pub benefits: Vec<Benefit>,
    pub faqs: Vec<Faq>,
}

impl ServiceContent {
    /// Specialised copy when the service has some, generic copy otherwise
    pub fn for_service(service: &Service) -> Self {
        SPECIALISED_CONTENT
            .get(&service.slug)
            .cloned()
            .unwrap_or_else(|| Self::generic(&service.name))
    }

    fn generic(name: &str) -> Self {
        let lower = name.to_lowercase();
        let benefit = |title: &str, description: String| Benefit {
            title: title.to_string(),
            description,
        };
        let faq = |question: String, answer: &str| Faq {
            question,
            answer: answer.to_string(),
        };

        Self {
            intro: format!(
                "Professional {lower} services in Brisbane. Our experienced groomers provide expert care using premium products and proven techniques. We understand every pet is unique and tailor our services to meet your pet's specific needs and your preferences."
            ),
            included: vec![
                format!("Complete {lower} service"),
                "Thorough health check during service".to_string(),
                "Premium quality products".to_string(),
                "Experienced professional groomer".to_string(),
                "Clean, sanitized equipment".to_string(),
                "Gentle, stress-free handling".to_string(),
                "Detailed consultation".to_string(),
                "After-care advice".to_string(),
            ],
            process: format!(
                "Our {lower} service begins with a consultation to understand your pet's needs. We use gentle handling techniques and premium products throughout the process. Our groomers take their time to ensure quality results and your pet's comfort. We complete the service with finishing touches and provide you with care recommendations."
            ),
            benefits: vec![
                benefit(
                    "Professional Expertise",
                    format!("Years of experience providing {lower} services for pets of all breeds and sizes."),
                ),
                benefit(
                    "Quality Products",
                    "We use only premium, pet-safe products that are gentle and effective.".to_string(),
                ),
                benefit(
                    "Personalized Care",
                    "Every service is tailored to your pet's individual needs and temperament.".to_string(),
                ),
                benefit(
                    "Satisfaction Guaranteed",
                    "We stand behind our work with a 100% satisfaction guarantee.".to_string(),
                ),
            ],
            faqs: vec![
                faq(
                    format!("How often should my pet receive {lower}?"),
                    "The frequency depends on your pet's breed, lifestyle, and individual needs. We can provide personalized recommendations based on your pet's specific situation.",
                ),
                faq(
                    format!("Is {lower} safe for all pets?"),
                    "Yes, our services are safe for healthy pets of all ages. If your pet has specific health conditions, please let us know so we can take appropriate precautions.",
                ),
                faq(
                    "How long does the service take?".to_string(),
                    "Service time varies depending on your pet's size and coat condition. We'll provide an estimated timeframe when you book your appointment.",
                ),
                faq(
                    "What should I do to prepare my pet?".to_string(),
                    "No special preparation is needed. Just bring your pet to us! If your pet has specific needs or concerns, let us know when booking.",
                ),
                faq(
                    "What if my pet is anxious?".to_string(),
                    "Our groomers are experienced with anxious pets and use calming techniques. We work at your pet's pace and never force a stressed animal to continue.",
                ),
            ],
        }
    }
}

/// `/services`
#[derive(Debug, Clone, Serialize)]
pub struct ServicesIndexPage {
    pub meta: PageMeta,
    pub services: Vec<ServiceCard>,
}

impl ServicesIndexPage {
    pub fn build(site: &Site, images: &mut ImageRotation<'_>) -> Self {
        Self {
            meta: PageMeta::page(
                "Pet Grooming Services Brisbane - Dog & Cat Grooming",
                "Comprehensive pet grooming services in Brisbane. Dog grooming, cat grooming, mobile services, de-shedding, nail clipping, and more. Book your appointment today!",
            ),
            services: site
                .catalog
                .services
                .all()
                .iter()
                .map(|service| ServiceCard::new(service, images))
                .collect(),
        }
    }
}

/// `/services/{service}`
#[derive(Debug, Clone, Serialize)]
pub struct ServicePage {
    pub meta: PageMeta,
    pub service: Service,
    pub heading: String,
    pub hero_image: String,
    pub content_image: String,
    pub content: ServiceContent,
    /// Landing pages for this service in the first locations
    pub locations: Vec<Link>,
    pub location_count: usize,
}

impl ServicePage {
    /// `None` when the service does not exist
    pub fn build(site: &Site, slug: &str, images: &mut ImageRotation<'_>) -> Option<Self> {
        let service = site.catalog.service(slug)?;
        let description: String = service.description.chars().take(150).collect();

        Some(Self {
            meta: PageMeta::page(
                format!("{} Brisbane | Professional Pet Grooming", service.name),
                format!(
                    "Expert {} services in Brisbane. {}",
                    service.name.to_lowercase(),
                    description
                ),
            ),
            heading: format!("{} in Brisbane", service.name),
            hero_image: images.pick(&service.slug, 0).to_string(),
            content_image: images.pick(&service.slug, 1).to_string(),
            content: ServiceContent::for_service(service),
            locations: site
                .catalog
                .locations
                .all()
                .iter()
                .take(SERVICE_PAGE_LOCATIONS)
                .map(|location| combined_link(service, location))
                .collect(),
            location_count: site.catalog.locations.len(),
            service: service.clone(),
        })
    }
}

/// A customer quote shown on landing pages
#[derive(Debug, Clone, Serialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
}

/// `/{service}-in-{location}`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceLocationPage {
    pub meta: PageMeta,
    pub slug: String,
    pub service: Service,
    pub location: Location,
    pub heading: String,
    pub subheading: String,
    pub hero_image: String,
    pub content_image: String,
    pub phone: Link,
    pub testimonials: Vec<Testimonial>,
    pub related: Vec<Link>,
}

impl ServiceLocationPage {
    /// Parse and resolve a combined slug. Every error means "not found".
    pub fn build(
        site: &Site,
        slug: &str,
        images: &mut ImageRotation<'_>,
    ) -> Result<Self, SlugError> {
        let combined = CombinedSlug::parse(slug)?;
        let (service, location) = combined.resolve(&site.catalog)?;
        Ok(Self::for_pair(service, location, images))
    }

    fn for_pair(service: &Service, location: &Location, images: &mut ImageRotation<'_>) -> Self {
        let (s, l) = (&service.name, &location.name);
        let lower = s.to_lowercase();

        let meta = PageMeta::page(
            format!("{s} in {l} - 24/7 Fast Response | Vet Groomers"),
            format!(
                "Professional {lower} in {l}, Brisbane. Expert pet groomers available 24/7. Same-day appointments. Call {PHONE_DISPLAY} for fast service."
            ),
        )
        .with_keywords(format!(
            "{s} {l}, {l} {s}, best {s} in {l}, pet grooming {l}"
        ));

        let testimonials = vec![
            Testimonial {
                quote: format!(
                    "Fantastic {lower} service! My dog looks incredible and the team was so professional. Highly recommend to anyone in {l}."
                ),
                author: format!("Jennifer R., {l}"),
            },
            Testimonial {
                quote: format!(
                    "Best groomers in {l}! They arrived quickly, were incredibly gentle with my anxious cat, and did an amazing job. Will definitely use again."
                ),
                author: format!("David M., {l}"),
            },
            Testimonial {
                quote: format!(
                    "Professional, affordable, and excellent results. Been using Vet Groomers for 3 years now here in {l}. Never disappointed!"
                ),
                author: format!("Lisa T., {l}"),
            },
        ];

        Self {
            meta,
            slug: CombinedSlug::new(&service.slug, &location.slug).to_string(),
            heading: format!("Professional {s} in {l}"),
            subheading: format!(
                "Fast, reliable, and affordable {lower} services for {l} residents"
            ),
            hero_image: images.pick(&service.slug, 2).to_string(),
            content_image: images.pick(&service.slug, 1).to_string(),
            phone: Link::new(PHONE_DISPLAY, PHONE_HREF),
            testimonials,
            related: vec![
                Link::new(format!("{s} Services"), service_path(&service.slug)),
                Link::new(format!("All Services in {l}"), location_path(&location.slug)),
                Link::new("All Grooming Services", "/services"),
            ],
            service: service.clone(),
            location: location.clone(),
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
    fn test_specialised_content_is_loaded() {
        assert_eq!(SPECIALISED_CONTENT.len(), 3);
        let site = site();
        let dog = site.catalog.service("dog-grooming").unwrap();
        let content = ServiceContent::for_service(dog);
        assert_eq!(content.included.len(), 8);
        assert_eq!(content.benefits[0].title, "Expert Breed Knowledge");
    }

    #[test]
    fn test_generic_content_mentions_service() {
        let site = site();
        let nails = site.catalog.service("nail-clipping").unwrap();
        let content = ServiceContent::for_service(nails);
        assert_eq!(content.included[0], "Complete nail clipping service");
        assert_eq!(content.faqs.len(), 5);
    }

    #[test]
    fn test_service_page_images_do_not_repeat() {
        let site = site();
        let mut images = site.images.rotation();
        let page = ServicePage::build(&site, "cat-grooming", &mut images).unwrap();
        assert_ne!(page.hero_image, page.content_image);
        assert_eq!(page.locations.len(), 15);
        assert_eq!(page.locations[0].href, "/cat-grooming-in-brisbane-city");
        assert_eq!(
            page.meta.title,
            "Cat Grooming Brisbane | Professional Pet Grooming | Vet Groomers Brisbane"
        );
    }

    #[test]
    fn test_unknown_service_page() {
        let site = site();
        let mut images = site.images.rotation();
        assert!(ServicePage::build(&site, "horse-shoeing", &mut images).is_none());
    }

    #[test]
    fn test_service_location_page() {
        let site = site();
        let mut images = site.images.rotation();
        let page =
            ServiceLocationPage::build(&site, "dog-grooming-in-south-bank", &mut images).unwrap();
        assert_eq!(page.heading, "Professional Dog Grooming in South Bank");
        assert_eq!(page.slug, "dog-grooming-in-south-bank");
        assert!(page.meta.description.starts_with("Professional dog grooming in South Bank"));
        assert_eq!(
            page.meta.keywords.as_deref(),
            Some("Dog Grooming South Bank, South Bank Dog Grooming, best Dog Grooming in South Bank, pet grooming South Bank")
        );
        assert_ne!(page.hero_image, page.content_image);
        assert_eq!(page.related[1].href, "/locations/south-bank");
    }

    #[test]
    fn test_service_location_not_found() {
        let site = site();
        let mut images = site.images.rotation();
        for slug in ["dog-grooming", "dog-grooming-in-atlantis", "a-in-b-in-c"] {
            assert!(ServiceLocationPage::build(&site, slug, &mut images).is_err());
        }
    }
}
