//! Blog posts stored as one JSON file per post
//!
//! Directory layout:
//! ```text
//! blog_dir/
//! ├── how-often-to-groom.json
//! └── summer-coat-care.json
//! ```
//!
//! Posts are read at request time. Read failures never surface as errors:
//! an unreadable directory is an empty blog and an unreadable post is absent.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tokio::fs;
use tracing::{debug, warn};

/// A single blog post as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: String,
    pub author: String,
    #[serde(default)]
    pub featured_image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub meta_description: String,
}

impl BlogPost {
    /// Publication date, accepting RFC 3339 timestamps or `YYYY-MM-DD`
    pub fn published(&self) -> Option<Date> {
        parse_post_date(&self.date)
    }

    /// Date as shown on the site, e.g. `5 March 2024`
    pub fn display_date(&self) -> String {
        self.published()
            .and_then(|date| {
                date.format(format_description!(
                    "[day padding:none] [month repr:long] [year]"
                ))
                .ok()
            })
            .unwrap_or_else(|| self.date.clone())
    }
}

fn parse_post_date(raw: &str) -> Option<Date> {
    if let Ok(timestamp) = OffsetDateTime::parse(raw, &time::format_description::well_known::Rfc3339) {
        return Some(timestamp.date());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
}

/// Read-only view over the blog directory
#[derive(Debug, Clone)]
pub struct BlogStore {
    dir: PathBuf,
}

impl BlogStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a post file; `None` for slugs that could escape the directory
    fn post_file(&self, slug: &str) -> Option<PathBuf> {
        let valid = !slug.is_empty()
            && !slug.contains(['/', '\\'])
            && slug != "."
            && slug != "..";
        valid.then(|| self.dir.join(format!("{}.json", slug)))
    }

    /// Paths of every `*.json` file in the blog directory
    async fn post_files(&self) -> Vec<PathBuf> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to read blog directory {}: {}", self.dir.display(), e);
                return Vec::new();
            }
        };

        let mut files = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    let path = entry.path();
                    if path.extension().is_some_and(|ext| ext == "json") {
                        files.push(path);
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read blog directory entry: {}", e);
                    break;
                }
            }
        }
        files.sort();
        files
    }

    async fn read_post(path: &Path) -> Option<BlogPost> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) => {
                debug!("Blog post {} unavailable: {}", path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(post) => Some(post),
            Err(e) => {
                warn!("Skipping malformed blog post {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Every post, newest first. Posts without a readable date sort last.
    pub async fn all(&self) -> Vec<BlogPost> {
        let mut posts = Vec::new();
        for path in self.post_files().await {
            if let Some(post) = Self::read_post(&path).await {
                posts.push(post);
            }
        }
        posts.sort_by(|a, b| b.published().cmp(&a.published()));
        posts
    }

    /// A single post by slug
    pub async fn get(&self, slug: &str) -> Option<BlogPost> {
        let path = self.post_file(slug)?;
        Self::read_post(&path).await
    }

    /// File stems of every post file
    pub async fn slugs(&self) -> Vec<String> {
        self.post_files()
            .await
            .iter()
            .filter_map(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(date: &str) -> BlogPost {
        BlogPost {
            slug: "post".to_string(),
            title: "Post".to_string(),
            excerpt: String::new(),
            content: String::new(),
            date: date.to_string(),
            author: "Vet Groomers".to_string(),
            featured_image: String::new(),
            images: Vec::new(),
            keywords: Vec::new(),
            meta_description: String::new(),
        }
    }

    #[test]
    fn test_display_date() {
        assert_eq!(post("2024-03-05").display_date(), "5 March 2024");
        assert_eq!(post("2024-11-20T09:30:00Z").display_date(), "20 November 2024");
        assert_eq!(post("sometime").display_date(), "sometime");
    }

    #[test]
    fn test_post_file_rejects_traversal() {
        let store = BlogStore::new("/srv/blog");
        assert!(store.post_file("../secrets").is_none());
        assert!(store.post_file("..").is_none());
        assert!(store.post_file("").is_none());
        assert_eq!(
            store.post_file("coat-care"),
            Some(PathBuf::from("/srv/blog/coat-care.json"))
        );
    }
}
