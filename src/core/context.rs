//! Site-wide URL configuration consumed by the resolvers.

use serde::{Deserialize, Serialize};

/// Default location of uploaded images, relative to the mount path.
pub const DEFAULT_IMAGES_PATH: &str = "content/images";

/// URL segments used for taxonomy and pagination routes.
///
/// ```text
/// /tag/news/            <- tag
/// /author/alice/        <- author
/// /tag/news/page/2/     <- page
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteKeywords {
    pub tag: String,
    pub author: String,
    pub page: String,
}

impl Default for RouteKeywords {
    fn default() -> Self {
        Self {
            tag: "tag".into(),
            author: "author".into(),
            page: "page".into(),
        }
    }
}

/// Everything the resolvers need to know about where the site lives.
///
/// Built once (usually from the config file) and shared read-only.
///
/// # Example
///
/// ```text
/// base_url:    https://example.com/blog
/// mount_path:  /blog
/// images_path: content/images
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    /// Absolute site URL, trailing slash optional.
    pub base_url: String,
    /// Sub-path the site is served under: empty, or `/a[/b...]` without trailing slash.
    pub mount_path: String,
    /// Relative prefix identifying uploaded images (no surrounding slashes).
    pub images_path: String,
    pub route_keywords: RouteKeywords,
}

impl Default for SiteContext {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            mount_path: String::new(),
            images_path: DEFAULT_IMAGES_PATH.into(),
            route_keywords: RouteKeywords::default(),
        }
    }
}

impl SiteContext {
    /// Create a context for `base_url`, deriving the mount path from its path component.
    ///
    /// `https://example.com/blog/` -> mount path `/blog`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let mount_path = url::Url::parse(&base_url)
            .map(|parsed| normalize_mount_path(parsed.path()))
            .unwrap_or_default();

        Self {
            base_url,
            mount_path,
            ..Self::default()
        }
    }

    /// Override the mount path. Leading/trailing slashes are normalized.
    pub fn with_mount_path(mut self, mount_path: &str) -> Self {
        self.mount_path = normalize_mount_path(mount_path);
        self
    }

    pub fn with_images_path(mut self, images_path: &str) -> Self {
        self.images_path = images_path.trim_matches('/').to_string();
        self
    }

    pub fn with_route_keywords(mut self, route_keywords: RouteKeywords) -> Self {
        self.route_keywords = route_keywords;
        self
    }

    /// Base URL with a single trailing slash removed.
    #[inline]
    pub fn trimmed_base(&self) -> &str {
        self.base_url
            .strip_suffix('/')
            .unwrap_or(&self.base_url)
    }

    /// Base URL without its scheme, followed by the mount path.
    ///
    /// Used to recognise same-host navigation links. A base URL without
    /// `//` is taken as-is.
    ///
    /// `http://example.com` + `/blog` -> `example.com/blog`
    pub fn host_path(&self) -> String {
        let host = self
            .base_url
            .split("//")
            .nth(1)
            .unwrap_or(&self.base_url);
        format!("{}{}", host, self.mount_path)
    }

    /// Prefix every uploaded image path starts with: `{mount}/{images}`.
    pub fn images_prefix(&self) -> String {
        format!("{}/{}", self.mount_path, self.images_path)
    }
}

/// Normalize a mount path to empty or `/segment[/segment...]`.
pub fn normalize_mount_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_mount_path() {
        assert_eq!(SiteContext::new("https://example.com/blog/").mount_path, "/blog");
        assert_eq!(SiteContext::new("https://example.com/a/b").mount_path, "/a/b");
        assert_eq!(SiteContext::new("https://example.com/").mount_path, "");
        assert_eq!(SiteContext::new("https://example.com").mount_path, "");
    }

    #[test]
    fn test_new_invalid_url_has_no_mount() {
        let ctx = SiteContext::new("not a url");
        assert_eq!(ctx.mount_path, "");
        assert_eq!(ctx.base_url, "not a url");
    }

    #[test]
    fn test_with_mount_path_normalizes() {
        let ctx = SiteContext::new("http://example.com/");
        assert_eq!(ctx.clone().with_mount_path("blog").mount_path, "/blog");
        assert_eq!(ctx.clone().with_mount_path("/blog/").mount_path, "/blog");
        assert_eq!(ctx.clone().with_mount_path("/").mount_path, "");
        assert_eq!(ctx.with_mount_path("").mount_path, "");
    }

    #[test]
    fn test_trimmed_base_strips_one_slash() {
        assert_eq!(SiteContext::new("http://example.com/").trimmed_base(), "http://example.com");
        assert_eq!(SiteContext::new("http://example.com").trimmed_base(), "http://example.com");
        assert_eq!(SiteContext::new("http://example.com//").trimmed_base(), "http://example.com/");
    }

    #[test]
    fn test_host_path() {
        let ctx = SiteContext::new("http://example.com").with_mount_path("/blog");
        assert_eq!(ctx.host_path(), "example.com/blog");

        let ctx = SiteContext::new("https://example.com");
        assert_eq!(ctx.host_path(), "example.com");

        let ctx = SiteContext::new("example.com");
        assert_eq!(ctx.host_path(), "example.com");
    }

    #[test]
    fn test_host_path_repeats_mount_from_base_url() {
        let ctx = SiteContext::new("https://example.com/blog");
        assert_eq!(ctx.mount_path, "/blog");
        assert_eq!(ctx.host_path(), "example.com/blog/blog");
    }

    #[test]
    fn test_images_prefix() {
        let ctx = SiteContext::new("http://example.com").with_mount_path("/blog");
        assert_eq!(ctx.images_prefix(), "/blog/content/images");

        let ctx = SiteContext::new("http://example.com").with_images_path("/uploads/");
        assert_eq!(ctx.images_prefix(), "/uploads");
    }

    #[test]
    fn test_route_keywords_default() {
        let keywords = RouteKeywords::default();
        assert_eq!(keywords.tag, "tag");
        assert_eq!(keywords.author, "author");
        assert_eq!(keywords.page, "page");
    }
}
