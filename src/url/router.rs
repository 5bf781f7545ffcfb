//! Request classification and path derivation.
//!
//! A [`RequestContext`] names what the caller wants a URL for, a
//! [`RequestData`] carries the instance. Resolution runs in two phases:
//!
//! 1. Dispatch: derive a path fragment and secure hint from the context.
//!    Images return here, fully resolved.
//! 2. Shared rules: pagination suffix, external passthrough,
//!    `index.html` for directory paths, then [`assemble`].
//!
//! Missing data never fails, the request falls back to `/`.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::assemble::assemble;
use crate::content::{Author, NavItem, Pagination, Post, Tag};
use crate::core::SiteContext;

/// Document appended to directory-style paths (static hosts do no index lookup).
pub const INDEX_DOCUMENT: &str = "index.html";

/// Fixed logical routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedRoute {
    Home,
    Rss,
    Api,
}

impl NamedRoute {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Rss => "/rss/",
            Self::Api => "/ghost/api/v0.1",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "home" => Some(Self::Home),
            "rss" => Some(Self::Rss),
            "api" => Some(Self::Api),
            _ => None,
        }
    }
}

/// What a URL is requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestContext {
    /// A path supplied by the caller.
    RelativeUrl { url: String, secure: Option<bool> },
    Post,
    Tag,
    Author,
    Image,
    Nav,
    SitemapXsl,
    Named(NamedRoute),
    /// Any other name: resolves to the site root.
    Unrecognized(String),
}

impl RequestContext {
    pub fn relative(url: impl Into<String>) -> Self {
        Self::RelativeUrl {
            url: url.into(),
            secure: None,
        }
    }
}

impl FromStr for RequestContext {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "post" => Self::Post,
            "tag" => Self::Tag,
            "author" => Self::Author,
            "image" => Self::Image,
            "nav" => Self::Nav,
            "sitemap-xsl" => Self::SitemapXsl,
            other => match NamedRoute::parse(other) {
                Some(route) => Self::Named(route),
                None => Self::Unrecognized(other.to_string()),
            },
        })
    }
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RelativeUrl { url, .. } => write!(f, "relative url `{url}`"),
            Self::Post => f.write_str("post"),
            Self::Tag => f.write_str("tag"),
            Self::Author => f.write_str("author"),
            Self::Image => f.write_str("image"),
            Self::Nav => f.write_str("nav"),
            Self::SitemapXsl => f.write_str("sitemap-xsl"),
            Self::Named(route) => write!(f, "{route:?}"),
            Self::Unrecognized(name) => write!(f, "unrecognized `{name}`"),
        }
    }
}

/// Resource instance and modifiers for a request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestData<'a> {
    pub post: Option<&'a Post>,
    pub tag: Option<&'a Tag>,
    pub author: Option<&'a Author>,
    pub nav: Option<&'a NavItem>,
    pub image: Option<&'a str>,
    pub secure: Option<bool>,
    pub pagination: Option<Pagination>,
}

impl<'a> RequestData<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(mut self, post: &'a Post) -> Self {
        self.post = Some(post);
        self
    }

    pub fn tag(mut self, tag: &'a Tag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn author(mut self, author: &'a Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn nav(mut self, nav: &'a NavItem) -> Self {
        self.nav = Some(nav);
        self
    }

    pub fn image(mut self, image: &'a str) -> Self {
        self.image = Some(image);
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.pagination = Some(Pagination::new(page));
        self
    }
}

/// Outcome of the dispatch phase.
enum Dispatch {
    /// Path fragment still subject to the shared rules.
    Path {
        path: String,
        secure: Option<bool>,
        absolute: bool,
    },
    /// Fully resolved, skip everything else.
    Done(String),
}

/// Resolve `context` to a URL.
pub fn resolve(
    ctx: &SiteContext,
    context: &RequestContext,
    data: &RequestData<'_>,
    absolute: bool,
) -> String {
    let (mut path, secure, absolute) = match dispatch(ctx, context, data, absolute) {
        Dispatch::Done(url) => return url,
        Dispatch::Path {
            path,
            secure,
            absolute,
        } => (path, secure, absolute),
    };

    if let Some(pagination) = data.pagination
        && pagination.needs_suffix()
    {
        path.push_str(&format!(
            "{}/{}/",
            ctx.route_keywords.page, pagination.page
        ));
    }

    if is_external(&path) {
        return path;
    }

    if path.len() > 1 && path.ends_with('/') {
        path.push_str(INDEX_DOCUMENT);
    }

    assemble(ctx, &path, absolute, secure)
}

fn dispatch(
    ctx: &SiteContext,
    context: &RequestContext,
    data: &RequestData<'_>,
    absolute: bool,
) -> Dispatch {
    let root = |secure| Dispatch::Path {
        path: "/".into(),
        secure,
        absolute,
    };
    let path = |path: String, secure| Dispatch::Path {
        path,
        secure,
        absolute,
    };

    match context {
        RequestContext::RelativeUrl { url, secure } => {
            let secure = secure.filter(|s| *s).or(data.secure);
            if url.is_empty() {
                crate::debug!("url"; "empty relative url, using site root");
                root(secure)
            } else {
                path(url.clone(), secure)
            }
        }

        RequestContext::Post => match data.post {
            Some(post) => path(post.url.clone(), data.secure),
            None => missing(context, root(data.secure)),
        },

        RequestContext::Tag => match data.tag {
            Some(tag) => path(
                format!("/{}/{}/", ctx.route_keywords.tag, tag.slug),
                tag.secure,
            ),
            None => missing(context, root(data.secure)),
        },

        RequestContext::Author => match data.author {
            Some(author) => path(
                format!("/{}/{}/", ctx.route_keywords.author, author.slug),
                author.secure,
            ),
            None => missing(context, root(data.secure)),
        },

        RequestContext::Image => match data.image {
            Some(image) => Dispatch::Done(image_url(ctx, image, absolute)),
            None => missing(context, root(data.secure)),
        },

        RequestContext::SitemapXsl => Dispatch::Path {
            path: "/sitemap.xsl".into(),
            secure: data.secure,
            absolute: true,
        },

        RequestContext::Nav => match data.nav {
            Some(nav) => {
                let (path, forced) = nav_path(ctx, &nav.url);
                Dispatch::Path {
                    path,
                    secure: data.secure,
                    absolute: absolute || forced,
                }
            }
            None => missing(context, root(data.secure)),
        },

        RequestContext::Named(route) => path(route.path().into(), data.secure),

        RequestContext::Unrecognized(_) => {
            crate::debug!("url"; "{} has no route, using site root", context);
            root(data.secure)
        }
    }
}

#[inline]
fn missing(context: &RequestContext, fallback: Dispatch) -> Dispatch {
    crate::debug!("url"; "{} requested without {} data, using site root", context, context);
    fallback
}

/// Resolve an uploaded image path.
///
/// Only paths under `{mount}/{images}` may become absolute; everything
/// else is returned untouched.
fn image_url(ctx: &SiteContext, image: &str, absolute: bool) -> String {
    let absolute = absolute && image.starts_with(&ctx.images_prefix());
    if !absolute {
        return image.to_string();
    }

    let path = image
        .strip_prefix(ctx.mount_path.as_str())
        .unwrap_or(image);
    format!("{}{}", ctx.trimmed_base(), path)
}

/// Rewrite same-host navigation links to a site path.
///
/// Returns the path and whether it must be made absolute. Links to a
/// subdomain of the site (`.example.com/...`) are left alone.
fn nav_path(ctx: &SiteContext, url: &str) -> (String, bool) {
    let host = ctx.host_path();
    let subdomain = format!(".{host}");

    if url.contains(&host) && !url.contains(&subdomain) {
        let rest = url.split_once(&host).map_or("", |(_, rest)| rest);
        let path = if rest.starts_with('/') {
            rest.to_string()
        } else {
            format!("/{rest}")
        };
        return (path, true);
    }

    (url.to_string(), false)
}

/// Already a full URL (`scheme://...`) or a `mailto:` link.
#[inline]
pub fn is_external(path: &str) -> bool {
    path.contains("://") || path.starts_with("mailto:")
}
