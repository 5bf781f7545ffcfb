//! URL resolution engine.
//!
//! # Module Structure
//!
//! | Module      | Purpose                                            |
//! |-------------|----------------------------------------------------|
//! | `permalink` | Expand `:token` patterns into a post path          |
//! | `assemble`  | Apply mount path and absolute/relative base        |
//! | `router`    | Classify a request and derive its path             |
//!
//! # Usage
//!
//! ```ignore
//! let resolver = UrlResolver::new(Arc::new(SiteContext::new("https://example.com/blog")));
//!
//! let mut post = Post::new(1, "welcome").published(DateTimeUtc::from_ymd(2014, 1, 1));
//! post.url = resolver.permalink(&post, "/:year/:month/:day/:slug/");
//!
//! resolver.url_for(&RequestContext::Named(NamedRoute::Home), false);       // /blog/
//! resolver.url_for_data(&RequestContext::Post, &RequestData::new().post(&post), true);
//! ```

mod assemble;
pub mod permalink;
mod router;

use std::sync::Arc;

pub use assemble::assemble;
pub use permalink::{PAGE_PATTERN, Token};
pub use router::{INDEX_DOCUMENT, NamedRoute, RequestContext, RequestData, is_external};

use crate::content::Post;
use crate::core::{SiteContext, context};

/// Resolver bound to one site context.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    ctx: Arc<SiteContext>,
}

impl UrlResolver {
    pub fn new(ctx: Arc<SiteContext>) -> Self {
        Self { ctx }
    }

    /// Resolver over the installed process-wide context.
    pub fn installed() -> Self {
        Self::new(context())
    }

    #[inline]
    pub fn context(&self) -> &SiteContext {
        &self.ctx
    }

    /// URL for a request that carries no resource data.
    pub fn url_for(&self, context: &RequestContext, absolute: bool) -> String {
        self.url_for_data(context, &RequestData::default(), absolute)
    }

    /// URL for a request with resource data, pagination and secure hint.
    pub fn url_for_data(
        &self,
        context: &RequestContext,
        data: &RequestData<'_>,
        absolute: bool,
    ) -> String {
        router::resolve(&self.ctx, context, data, absolute)
    }

    /// Expand a permalink pattern for `post`.
    pub fn permalink(&self, post: &Post, pattern: &str) -> String {
        permalink::resolve(post, pattern)
    }
}

/// Resolve a request against the installed context.
pub fn resolve_url(context: &RequestContext, data: &RequestData<'_>, absolute: bool) -> String {
    UrlResolver::installed().url_for_data(context, data, absolute)
}

/// Expand a permalink pattern for `post`.
pub fn resolve_permalink(post: &Post, pattern: &str) -> String {
    permalink::resolve(post, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Tag;
    use crate::core::install_context;
    use crate::utils::date::DateTimeUtc;

    fn resolver() -> UrlResolver {
        UrlResolver::new(Arc::new(
            SiteContext::new("http://example.com/").with_mount_path("/blog"),
        ))
    }

    #[test]
    fn test_permalink_then_route() {
        let resolver = resolver();
        let mut post = Post::new(1, "welcome").published(DateTimeUtc::from_ymd(2014, 1, 1));
        post.url = resolver.permalink(&post, "/:year/:month/:day/:slug/");
        assert_eq!(post.url, "/2014/01/01/welcome/");

        let data = RequestData::new().post(&post);
        assert_eq!(
            resolver.url_for_data(&RequestContext::Post, &data, false),
            "/blog/2014/01/01/welcome/index.html"
        );
        assert_eq!(
            resolver.url_for_data(&RequestContext::Post, &data, true),
            "http://example.com/2014/01/01/welcome/index.html"
        );
    }

    #[test]
    fn test_url_for_without_data() {
        let resolver = resolver();
        assert_eq!(
            resolver.url_for(&RequestContext::Named(NamedRoute::Home), false),
            "/blog/"
        );
        assert_eq!(resolver.url_for(&RequestContext::Tag, false), "/blog/");
    }

    #[test]
    fn test_mount_never_doubled_for_prefixed_paths() {
        let resolver = resolver();
        for path in ["/blog/", "/blog/a/", "/blog/a/b.html", "/blog"] {
            let url = resolver.url_for(&RequestContext::relative(path), false);
            assert_eq!(url.matches("/blog").count(), 1, "{path} -> {url}");
        }
    }

    // The only test touching the process-wide handle.
    #[test]
    fn test_installed_context_entry_points() {
        install_context(SiteContext::new("https://example.org/docs"));

        let tag = Tag::new("news");
        assert_eq!(
            resolve_url(&RequestContext::Tag, &RequestData::new().tag(&tag), false),
            "/docs/tag/news/index.html"
        );
        assert_eq!(
            resolve_url(&RequestContext::Named(NamedRoute::Home), &RequestData::new(), true),
            "https://example.org/docs/"
        );
        assert_eq!(
            resolve_permalink(&Post::new(9, "hi"), "/:id/:slug/"),
            "/9/hi/"
        );
    }
}
