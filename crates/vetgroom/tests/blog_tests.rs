use std::fs;

use serde_json::json;
use tempfile::tempdir;
use vetgroom::BlogStore;
use vetgroom::pages::BlogPostPage;

fn write_post(dir: &std::path::Path, slug: &str, date: &str) {
    let post = json!({
        "slug": slug,
        "title": format!("Post {}", slug),
        "excerpt": "Short summary",
        "content": "# Heading\n\nBrush **daily**.",
        "date": date,
        "author": "Vet Groomers Team",
        "featuredImage": "https://images.example.com/hero.jpg",
        "images": [],
        "keywords": ["dog grooming", "brisbane"],
        "metaDescription": ""
    });
    fs::write(dir.join(format!("{}.json", slug)), post.to_string()).unwrap();
}

#[tokio::test]
async fn test_all_posts_sorted_newest_first() {
    let dir = tempdir().unwrap();
    write_post(dir.path(), "older", "2024-01-10");
    write_post(dir.path(), "newest", "2024-06-01");
    write_post(dir.path(), "middle", "2024-03-15T08:00:00Z");
    fs::write(dir.path().join("notes.txt"), "not a post").unwrap();

    let store = BlogStore::new(dir.path());
    let slugs: Vec<String> = store.all().await.into_iter().map(|p| p.slug).collect();

    assert_eq!(slugs, vec!["newest", "middle", "older"]);
}

#[tokio::test]
async fn test_malformed_post_is_skipped_and_absent() {
    let dir = tempdir().unwrap();
    write_post(dir.path(), "good", "2024-01-10");
    fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

    let store = BlogStore::new(dir.path());

    assert_eq!(store.all().await.len(), 1);
    assert!(store.get("broken").await.is_none());
    assert!(store.get("missing").await.is_none());
    assert_eq!(store.get("good").await, store.get("good").await);

    let mut slugs = store.slugs().await;
    slugs.sort();
    assert_eq!(slugs, vec!["broken", "good"]);
}

#[tokio::test]
async fn test_missing_directory_is_an_empty_blog() {
    let dir = tempdir().unwrap();
    let store = BlogStore::new(dir.path().join("does-not-exist"));

    assert!(store.all().await.is_empty());
    assert!(store.slugs().await.is_empty());
    assert!(store.get("anything").await.is_none());
}

#[tokio::test]
async fn test_post_page_renders_markdown_and_metadata() {
    let dir = tempdir().unwrap();
    write_post(dir.path(), "coat-care", "2024-03-05");

    let post = BlogStore::new(dir.path()).get("coat-care").await.unwrap();
    let page = BlogPostPage::from_post(post);

    assert!(page.html.contains("<h1 class=\"text-3xl font-bold text-gray-900 mt-10 mb-6\">Heading</h1>"));
    assert!(page.html.contains("<strong class=\"font-semibold text-gray-900\">daily</strong>"));
    assert_eq!(page.display_date, "5 March 2024");
    // Empty meta description falls back to the excerpt
    assert_eq!(page.meta.description, "Short summary");
    assert_eq!(page.meta.keywords.as_deref(), Some("dog grooming, brisbane"));
    assert_eq!(page.tags.len(), 2);
}
