//! Decorative image selection
//!
//! Each service category owns a small pool of candidate images. Pages ask an
//! [`ImageRotation`] for images so the same picture is not shown twice on one
//! page while candidates remain. A rotation lives for one rendering session;
//! nothing is shared between requests.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// Category used when a service has no pool of its own
pub const DEFAULT_CATEGORY: &str = "default";

const FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1450778869180-41d0601e046e?w=1200";

/// Full-width images for the static pages
#[derive(Debug, Clone, Serialize)]
pub struct HeroImages {
    pub homepage: String,
    pub about: String,
    pub contact: String,
}

/// Candidate images keyed by category
#[derive(Debug, Clone)]
pub struct ImageLibrary {
    pools: HashMap<String, Vec<String>>,
    pub hero: HeroImages,
}

impl ImageLibrary {
    /// Build a library. An empty or missing `default` pool is replaced by the
    /// built-in fallback image so lookups never come back empty.
    pub fn new(pools: HashMap<String, Vec<String>>, hero: HeroImages) -> Self {
        let mut pools: HashMap<String, Vec<String>> = pools
            .into_iter()
            .filter(|(_, images)| !images.is_empty())
            .collect();
        pools
            .entry(DEFAULT_CATEGORY.to_string())
            .or_insert_with(|| vec![FALLBACK_IMAGE.to_string()]);
        Self { pools, hero }
    }

    /// The site's per-service image pools
    pub fn builtin() -> Self {
        let unsplash = |id: &str| format!("https://images.unsplash.com/photo-{id}?w=1200");
        let pools = [
            ("dog-grooming", ["1548199973-03cce0bbc87b", "1587300003388-59208cc962cb", "1516734212186-a967f81ad0d7"]),
            ("cat-grooming", ["1514888286974-6c03e2ca1dba", "1573865526739-10c1de0e183f", "1478098711619-5ab0b478d6e6"]),
            ("puppy-first-grooming", ["1477884213360-7e9d7dcc1e48", "1537151608828-ea2b11777ee8", "1583511655857-d19b40a7a54e"]),
            ("de-shedding-treatment", ["1522276498395-f4f68f7f8454", "1450778869180-41d0601e046e", "1534361960057-19889db9621e"]),
            ("flea-tick-treatment", ["1530126483408-aa533e55bdb2", "1601758228041-f3b2795255f1", "1415369629372-26f2fe60c467"]),
            ("nail-clipping", ["1581888227599-779811939961", "1623387641168-d9803ddd3f35", "1560807707-8cc77767d783"]),
            ("teeth-cleaning", ["1544568100-847a948585b9", "1568572933382-74d440642117", "1576201836106-db1758fd1c97"]),
            ("breed-specific-grooming", ["1561037404-61cd46aa615b", "1529472119196-cb724127a98e", "1583337130417-3346a1be7dee"]),
            ("show-dog-preparation", ["1585664811087-47f65abbad64", "1592194996308-7b43878e84a6", "1596492784531-6e6eb5ea9993"]),
            ("mobile-pet-grooming", ["1558618666-fcd25c85cd64", "1600880292203-757bb62b4baf", "1580489944761-15a19d654956"]),
            ("senior-pet-grooming", ["1517849845537-4d257902454a", "1601758125946-6ec2ef64daf8", "1552053831-71594a27632d"]),
            ("medicated-bath", ["1603923521253-023b9c6b6f73", "1606425271394-c3ca9aa1771c", "1543466835-00a7907e9de1"]),
        ]
        .into_iter()
        .map(|(category, ids)| (category.to_string(), ids.into_iter().map(unsplash).collect()))
        .collect();

        let hero = HeroImages {
            homepage: unsplash("1548199973-03cce0bbc87b"),
            about: unsplash("1444212477490-ca407925329e"),
            contact: unsplash("1583511655826-05700d52f4d9"),
        };

        Self::new(pools, hero)
    }

    /// Candidates for a category, falling back to the default pool
    pub fn candidates(&self, category: &str) -> &[String] {
        self.pools
            .get(category)
            .or_else(|| self.pools.get(DEFAULT_CATEGORY))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Start a fresh rendering session
    pub fn rotation(&self) -> ImageRotation<'_> {
        ImageRotation::new(self)
    }
}

/// Per-session image picker that avoids repeats while it can
#[derive(Debug)]
pub struct ImageRotation<'a> {
    library: &'a ImageLibrary,
    used: HashSet<&'a str>,
}

impl<'a> ImageRotation<'a> {
    pub fn new(library: &'a ImageLibrary) -> Self {
        Self {
            library,
            used: HashSet::new(),
        }
    }

    /// Pick an image for `category`.
    ///
    /// Returns the first candidate not yet handed out in this session. Once
    /// every candidate has been used, returns `candidates[index % len]`.
    pub fn pick(&mut self, category: &str, index: usize) -> &'a str {
        let library = self.library;
        let candidates = library.candidates(category);
        if candidates.is_empty() {
            return FALLBACK_IMAGE;
        }

        let selected = candidates
            .iter()
            .map(String::as_str)
            .find(|image| !self.used.contains(image))
            .unwrap_or_else(|| candidates[index % candidates.len()].as_str());
        self.used.insert(selected);
        selected
    }

    /// Lead image for a service
    pub fn service_image(&mut self, category: &str) -> &'a str {
        self.pick(category, 0)
    }

    /// Number of distinct images handed out so far
    pub fn used_count(&self) -> usize {
        self.used.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> ImageLibrary {
        let pools = HashMap::from([(
            "dog".to_string(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
        )]);
        ImageLibrary::new(
            pools,
            HeroImages {
                homepage: "home".to_string(),
                about: "about".to_string(),
                contact: "contact".to_string(),
            },
        )
    }

    #[test]
    fn test_distinct_images_before_repeat() {
        let library = library();
        let mut rotation = library.rotation();
        let picked: Vec<&str> = (0..3).map(|i| rotation.pick("dog", i)).collect();
        assert_eq!(picked, vec!["a", "b", "c"]);
        assert_eq!(rotation.used_count(), 3);
    }

    #[test]
    fn test_modular_fallback_after_exhaustion() {
        let library = library();
        let mut rotation = library.rotation();
        for _ in 0..3 {
            rotation.pick("dog", 0);
        }
        assert_eq!(rotation.pick("dog", 0), "a");
        assert_eq!(rotation.pick("dog", 1), "b");
        assert_eq!(rotation.pick("dog", 5), "c");
        assert_eq!(rotation.used_count(), 3);
    }

    #[test]
    fn test_unknown_category_uses_default_pool() {
        let library = library();
        let mut rotation = library.rotation();
        assert_eq!(rotation.pick("hamster", 0), FALLBACK_IMAGE);
        assert_eq!(rotation.pick("hamster", 7), FALLBACK_IMAGE);
    }

    #[test]
    fn test_sessions_are_independent() {
        let library = library();
        let mut first = library.rotation();
        first.pick("dog", 0);
        first.pick("dog", 0);

        let mut second = library.rotation();
        assert_eq!(second.service_image("dog"), "a");
    }

    #[test]
    fn test_builtin_pools() {
        let library = ImageLibrary::builtin();
        assert_eq!(library.candidates("cat-grooming").len(), 3);
        assert_eq!(library.candidates("unknown"), [FALLBACK_IMAGE.to_string()]);
        assert!(library.hero.about.contains("1444212477490"));
    }
}
