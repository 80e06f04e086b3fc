//! Blog index and post pages

use serde::Serialize;

use super::{PageMeta, Site, blog_path};
use crate::blog::BlogPost;
use crate::markdown::markdown_to_html;

/// Post summary on the blog index
#[derive(Debug, Clone, Serialize)]
pub struct BlogCard {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub date: String,
    pub display_date: String,
    pub featured_image: String,
    pub href: String,
}

impl From<&BlogPost> for BlogCard {
    fn from(post: &BlogPost) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            author: post.author.clone(),
            date: post.date.clone(),
            display_date: post.display_date(),
            featured_image: post.featured_image.clone(),
            href: blog_path(&post.slug),
        }
    }
}

/// `/blog`
#[derive(Debug, Clone, Serialize)]
pub struct BlogIndexPage {
    pub meta: PageMeta,
    pub posts: Vec<BlogCard>,
}

impl BlogIndexPage {
    pub async fn build(site: &Site) -> Self {
        let posts = site.blog.all().await;
        Self {
            meta: PageMeta::page(
                "Pet Grooming Blog - Tips, Advice & News",
                "Expert pet grooming tips, advice, and news from Brisbane's leading pet groomers. Learn how to care for your pets between grooming sessions.",
            ),
            posts: posts.iter().map(BlogCard::from).collect(),
        }
    }
}

/// `/blog/{slug}`
#[derive(Debug, Clone, Serialize)]
pub struct BlogPostPage {
    pub meta: PageMeta,
    pub slug: String,
    pub title: String,
    pub author: String,
    pub display_date: String,
    pub featured_image: Option<String>,
    pub images: Vec<String>,
    /// Post body rendered to HTML
    pub html: String,
    pub tags: Vec<String>,
}

impl BlogPostPage {
    /// `None` when the post is missing or unreadable
    pub async fn build(site: &Site, slug: &str) -> Option<Self> {
        site.blog.get(slug).await.map(Self::from_post)
    }

    pub fn from_post(post: BlogPost) -> Self {
        let description = if post.meta_description.is_empty() {
            post.excerpt.clone()
        } else {
            post.meta_description.clone()
        };
        let meta = PageMeta::page(&post.title, description).with_keywords(post.keywords.join(", "));

        Self {
            meta,
            html: markdown_to_html(&post.content),
            display_date: post.display_date(),
            featured_image: (!post.featured_image.is_empty()).then(|| post.featured_image.clone()),
            slug: post.slug,
            title: post.title,
            author: post.author,
            images: post.images,
            tags: post.keywords,
        }
    }
}
