//! Process-wide site context.
//!
//! Uses `arc-swap` for lock-free reads. Install once at startup, before
//! any free-function resolution call. Resolvers built with an explicit
//! context (`UrlResolver::new`) never touch this handle.

use super::SiteContext;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global context storage.
static CONTEXT: LazyLock<ArcSwap<SiteContext>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteContext::default()));

/// Install the site context used by `resolve_url` and `resolve_permalink`.
#[inline]
pub fn install_context(context: SiteContext) -> Arc<SiteContext> {
    let arc = Arc::new(context);
    CONTEXT.store(Arc::clone(&arc));
    arc
}

/// Current site context (the default one if nothing was installed yet).
#[inline]
pub fn context() -> Arc<SiteContext> {
    CONTEXT.load_full()
}
