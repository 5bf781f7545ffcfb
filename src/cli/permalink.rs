//! Permalink command implementation.

use urlfor::config::SiteConfig;
use urlfor::content::{Author, Post};
use urlfor::url::UrlResolver;

use super::PermalinkArgs;

/// Expand the permalink for the post described by `args`.
///
/// Falls back to the configured pattern when `--pattern` is absent.
pub fn run_permalink(args: &PermalinkArgs, config: &SiteConfig, resolver: &UrlResolver) -> String {
    let mut post = Post::new(args.id, args.slug.as_str());
    post.page = args.static_page;
    post.published_at = args.date;
    post.author = args.author.as_deref().map(Author::new);

    let pattern = args
        .pattern
        .as_deref()
        .unwrap_or(&config.permalink.pattern);
    resolver.permalink(&post, pattern)
}
