//! Core types - site context shared across the codebase.

mod context;
pub mod handle;

pub use context::{DEFAULT_IMAGES_PATH, RouteKeywords, SiteContext, normalize_mount_path};
pub use handle::{context, install_context};
