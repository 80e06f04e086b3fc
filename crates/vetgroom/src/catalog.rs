//! Service and location lookup tables
//!
//! Both collections are loaded once at startup and never mutated. Lookups are
//! linear scans; the site carries tens of records.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::slug::{CombinedSlug, SEPARATOR};

const BUILTIN_SERVICES: &str = include_str!("../data/services.json");
const BUILTIN_LOCATIONS: &str = include_str!("../data/locations.json");

/// A grooming service offered by the business
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub slug: String,
    pub description: String,
}

/// A suburb the business serves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub slug: String,
}

/// Records addressable by slug
pub trait Slugged {
    /// Human readable kind, used in error messages
    const KIND: &'static str;

    fn slug(&self) -> &str;
}

impl Slugged for Service {
    const KIND: &'static str = "service";

    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for Location {
    const KIND: &'static str = "location";

    fn slug(&self) -> &str {
        &self.slug
    }
}

/// Ordered, read-only table of records keyed by slug
#[derive(Debug, Clone)]
pub struct SlugTable<T> {
    records: Vec<T>,
}

impl<T: Slugged> SlugTable<T> {
    /// Build a table, rejecting duplicate slugs
    pub fn new(records: Vec<T>) -> Result<Self, ContentError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.slug()) {
                return Err(ContentError::DuplicateSlug {
                    kind: T::KIND,
                    slug: record.slug().to_string(),
                });
            }
        }
        Ok(Self { records })
    }

    /// Look up a record by slug
    pub fn get(&self, slug: &str) -> Option<&T> {
        self.records.iter().find(|r| r.slug() == slug)
    }

    /// All records in source file order
    pub fn all(&self) -> &[T] {
        &self.records
    }

    /// All slugs in source file order
    pub fn slugs(&self) -> Vec<&str> {
        self.records.iter().map(Slugged::slug).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Slugs that contain the combined-slug separator
    fn ambiguous_slugs(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .map(Slugged::slug)
            .filter(|slug| slug.contains(SEPARATOR))
    }
}

#[derive(Deserialize)]
struct ServicesFile {
    services: Vec<Service>,
}

#[derive(Deserialize)]
struct LocationsFile {
    locations: Vec<Location>,
}

/// The site's services and locations
#[derive(Debug, Clone)]
pub struct Catalog {
    pub services: SlugTable<Service>,
    pub locations: SlugTable<Location>,
}

impl Catalog {
    /// Catalog compiled into the library
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_SERVICES, BUILTIN_LOCATIONS)
    }

    /// Parse `services.json` and `locations.json` contents
    pub fn from_json(services: &str, locations: &str) -> Result<Self, ContentError> {
        let services: ServicesFile =
            serde_json::from_str(services).map_err(|e| ContentError::Malformed {
                path: "services.json".to_string(),
                reason: e.to_string(),
            })?;
        let locations: LocationsFile =
            serde_json::from_str(locations).map_err(|e| ContentError::Malformed {
                path: "locations.json".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            services: SlugTable::new(services.services)?,
            locations: SlugTable::new(locations.locations)?,
        })
    }

    /// Load `services.json` and `locations.json` from a content directory
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, ContentError> {
        let dir = dir.as_ref();
        let services = read_content_file(&dir.join("services.json"))?;
        let locations = read_content_file(&dir.join("locations.json"))?;
        Self::from_json(&services, &locations)
    }

    pub fn service(&self, slug: &str) -> Option<&Service> {
        self.services.get(slug)
    }

    pub fn location(&self, slug: &str) -> Option<&Location> {
        self.locations.get(slug)
    }

    /// Every service x location combination, services outermost
    pub fn combined_slugs(&self) -> Vec<CombinedSlug> {
        self.services
            .all()
            .iter()
            .flat_map(|service| {
                self.locations
                    .all()
                    .iter()
                    .map(move |location| CombinedSlug::new(&service.slug, &location.slug))
            })
            .collect()
    }

    /// Reject slugs that would make combined slugs unparseable, and tables
    /// that would leave the site without landing pages
    pub fn validate(&self) -> Result<(), ContentError> {
        if let Some(slug) = self.services.ambiguous_slugs().next() {
            return Err(ContentError::AmbiguousSlug {
                kind: Service::KIND,
                slug: slug.to_string(),
            });
        }
        if let Some(slug) = self.locations.ambiguous_slugs().next() {
            return Err(ContentError::AmbiguousSlug {
                kind: Location::KIND,
                slug: slug.to_string(),
            });
        }
        if self.services.is_empty() {
            return Err(ContentError::Empty {
                kind: Service::KIND,
            });
        }
        if self.locations.is_empty() {
            return Err(ContentError::Empty {
                kind: Location::KIND,
            });
        }
        Ok(())
    }
}

fn read_content_file(path: &Path) -> Result<String, ContentError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ContentError::NotFound {
            path: path.display().to_string(),
        },
        _ => ContentError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{"services": [
                {"name": "Dog Grooming", "slug": "dog-grooming", "description": "Dogs"},
                {"name": "Cat Grooming", "slug": "cat-grooming", "description": "Cats"}
            ]}"#,
            r#"{"locations": [
                {"name": "South Bank", "slug": "south-bank"},
                {"name": "New Farm", "slug": "new-farm"},
                {"name": "Ascot", "slug": "ascot"}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_get_returns_matching_record() {
        let catalog = catalog();
        let service = catalog.service("cat-grooming").unwrap();
        assert_eq!(service.name, "Cat Grooming");
        assert_eq!(catalog.service("cat-grooming"), Some(service));

        assert!(catalog.service("horse-grooming").is_none());
        assert!(catalog.location("").is_none());
    }

    #[test]
    fn test_all_and_slugs_keep_source_order() {
        let catalog = catalog();
        assert_eq!(
            catalog.locations.slugs(),
            vec!["south-bank", "new-farm", "ascot"]
        );
        assert_eq!(catalog.services.all()[0].slug, "dog-grooming");
        assert_eq!(catalog.services.len(), 2);
    }

    #[test]
    fn test_combined_slugs_enumerates_every_pair() {
        let slugs: Vec<String> = catalog()
            .combined_slugs()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(slugs.len(), 6);
        assert_eq!(slugs[0], "dog-grooming-in-south-bank");
        assert_eq!(slugs[2], "dog-grooming-in-ascot");
        assert_eq!(slugs[5], "cat-grooming-in-ascot");
    }

    #[test]
    fn test_duplicate_slugs_are_rejected() {
        let result = Catalog::from_json(
            r#"{"services": []}"#,
            r#"{"locations": [
                {"name": "Ascot", "slug": "ascot"},
                {"name": "Ascot Again", "slug": "ascot"}
            ]}"#,
        );
        assert!(matches!(
            result,
            Err(ContentError::DuplicateSlug { kind: "location", .. })
        ));
    }

    #[test]
    fn test_validate_flags_separator_in_slug() {
        let catalog = Catalog::from_json(
            r#"{"services": [{"name": "Drop In", "slug": "drop-in-wash", "description": ""}]}"#,
            r#"{"locations": []}"#,
        )
        .unwrap();
        assert!(matches!(
            catalog.validate(),
            Err(ContentError::AmbiguousSlug { kind: "service", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_tables() {
        let catalog = Catalog::from_json(
            r#"{"services": [{"name": "Dog Grooming", "slug": "dog-grooming", "description": ""}]}"#,
            r#"{"locations": []}"#,
        )
        .unwrap();
        assert!(catalog.locations.is_empty());
        assert!(matches!(
            catalog.validate(),
            Err(ContentError::Empty { kind: "location" })
        ));
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let result = Catalog::from_json("{", r#"{"locations": []}"#);
        assert!(matches!(result, Err(ContentError::Malformed { .. })));
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.validate().is_ok());
        assert!(catalog.service("dog-grooming").is_some());
        assert!(catalog.location("south-bank").is_some());
    }

    #[test]
    fn test_from_dir_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::from_dir(dir.path());
        assert!(matches!(result, Err(ContentError::NotFound { .. })));
    }
}
