//! Combined `<service>-in-<location>` slugs

use std::fmt;
use std::str::FromStr;

use crate::catalog::{Catalog, Location, Service};
use crate::error::SlugError;

/// Literal separator between the service and location halves
pub const SEPARATOR: &str = "-in-";

/// A service slug and a location slug joined by [`SEPARATOR`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CombinedSlug {
    pub service: String,
    pub location: String,
}

impl CombinedSlug {
    pub fn new(service: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            location: location.into(),
        }
    }

    /// Parse `<service>-in-<location>`.
    ///
    /// The separator must appear exactly once with text on both sides. A
    /// slug with several separators is rejected rather than guessed at.
    pub fn parse(slug: &str) -> Result<Self, SlugError> {
        let mut parts = slug.split(SEPARATOR);
        let (Some(service), Some(location)) = (parts.next(), parts.next()) else {
            return Err(SlugError::MissingSeparator {
                slug: slug.to_string(),
            });
        };
        if parts.next().is_some() {
            return Err(SlugError::AmbiguousSeparator {
                slug: slug.to_string(),
            });
        }

        if service.is_empty() {
            return Err(SlugError::EmptyPart {
                slug: slug.to_string(),
                part: "service",
            });
        }
        if location.is_empty() {
            return Err(SlugError::EmptyPart {
                slug: slug.to_string(),
                part: "location",
            });
        }

        Ok(Self::new(service, location))
    }

    /// Look both halves up in the catalog
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Result<(&'a Service, &'a Location), SlugError> {
        let service = catalog
            .service(&self.service)
            .ok_or_else(|| SlugError::UnknownService(self.service.clone()))?;
        let location = catalog
            .location(&self.location)
            .ok_or_else(|| SlugError::UnknownLocation(self.location.clone()))?;
        Ok((service, location))
    }

    /// Site path of the landing page
    pub fn path(&self) -> String {
        format!("/{}", self)
    }
}

impl fmt::Display for CombinedSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.service, SEPARATOR, self.location)
    }
}

impl FromStr for CombinedSlug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let slug = CombinedSlug::parse("dog-grooming-in-south-bank").unwrap();
        assert_eq!(slug.service, "dog-grooming");
        assert_eq!(slug.location, "south-bank");
    }

    #[test]
    fn test_parse_every_known_pair_round_trips() {
        let catalog = Catalog::builtin().unwrap();
        for combined in catalog.combined_slugs() {
            let parsed: CombinedSlug = combined.to_string().parse().unwrap();
            assert_eq!(parsed, combined);
            assert!(parsed.resolve(&catalog).is_ok());
        }
    }

    #[test]
    fn test_parse_missing_separator() {
        for input in ["dog-grooming", "", "in", "dog-grooming-south-bank", "dog-in"] {
            assert!(
                matches!(
                    CombinedSlug::parse(input),
                    Err(SlugError::MissingSeparator { .. })
                ),
                "{input}"
            );
        }
    }

    #[test]
    fn test_parse_multiple_separators() {
        let err = CombinedSlug::parse("drop-in-wash-in-new-farm").unwrap_err();
        assert!(matches!(err, SlugError::AmbiguousSeparator { .. }));
    }

    #[test]
    fn test_parse_empty_parts() {
        assert_eq!(
            CombinedSlug::parse("-in-ascot").unwrap_err(),
            SlugError::EmptyPart {
                slug: "-in-ascot".to_string(),
                part: "service",
            }
        );
        assert!(matches!(
            CombinedSlug::parse("nail-clipping-in-"),
            Err(SlugError::EmptyPart { part: "location", .. })
        ));
    }

    #[test]
    fn test_resolve_unknown_records() {
        let catalog = Catalog::builtin().unwrap();

        let err = CombinedSlug::parse("horse-shoeing-in-ascot")
            .unwrap()
            .resolve(&catalog)
            .unwrap_err();
        assert_eq!(err, SlugError::UnknownService("horse-shoeing".to_string()));
        assert!(err.is_unknown_record());

        let err = CombinedSlug::parse("dog-grooming-in-melbourne")
            .unwrap()
            .resolve(&catalog)
            .unwrap_err();
        assert_eq!(err, SlugError::UnknownLocation("melbourne".to_string()));
    }

    #[test]
    fn test_display_and_path() {
        let slug = CombinedSlug::new("cat-grooming", "new-farm");
        assert_eq!(slug.to_string(), "cat-grooming-in-new-farm");
        assert_eq!(slug.path(), "/cat-grooming-in-new-farm");
    }
}
