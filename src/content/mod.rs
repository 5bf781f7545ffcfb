//! Content objects the URL engine consumes.
//!
//! These are already rendered by the time they reach the resolvers:
//! the engine only reads slugs, dates and the pre-computed post URL.

use serde::{Deserialize, Serialize};

use crate::utils::date::DateTimeUtc;

/// A post or a static page.
///
/// `url` is filled from [`resolve_permalink`](crate::url::resolve_permalink)
/// before the post is handed to the router.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: u64,
    pub slug: String,
    /// `true` for top-level static pages, `false` for dated posts.
    pub page: bool,
    pub published_at: Option<DateTimeUtc>,
    pub author: Option<Author>,
    /// Pre-computed path (e.g. `/2014/01/01/welcome/`).
    pub url: String,
    pub secure: Option<bool>,
}

impl Post {
    pub fn new(id: u64, slug: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            ..Self::default()
        }
    }

    /// Mark as a static page (permalink pattern is ignored).
    pub fn as_page(mut self) -> Self {
        self.page = true;
        self
    }

    pub fn published(mut self, at: DateTimeUtc) -> Self {
        self.published_at = Some(at);
        self
    }

    pub fn by(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Author slug, empty when the post has no author.
    #[inline]
    pub fn author_slug(&self) -> &str {
        self.author.as_ref().map_or("", |a| a.slug.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub slug: String,
    pub secure: Option<bool>,
}

impl Tag {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            secure: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub slug: String,
    pub secure: Option<bool>,
}

impl Author {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            secure: None,
        }
    }
}

/// Navigation entry; `url` may be relative or point to another host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub url: String,
}

impl NavItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// 1-based page number of a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
}

impl Pagination {
    pub const fn new(page: u32) -> Self {
        Self { page }
    }

    /// Only pages after the first get a `/page/N/` suffix.
    #[inline]
    pub const fn needs_suffix(&self) -> bool {
        self.page > 1
    }
}
