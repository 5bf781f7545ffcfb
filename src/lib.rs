//! urlfor - resolve posts, tags, authors, images and named routes into site URLs.
//!
//! ```text
//! SiteContext ──► UrlResolver ──► permalink (post path)
//!                      │
//!                      └────────► router ──► assemble ──► URL
//! ```

pub mod config;
pub mod content;
pub mod core;
pub mod logger;
pub mod url;
pub mod utils;

pub use crate::core::{SiteContext, context, install_context};
pub use crate::url::{
    NamedRoute, RequestContext, RequestData, UrlResolver, resolve_permalink, resolve_url,
};
