//! Resolve command implementation.
//!
//! Builds the request from command-line flags and prints the URL.

use urlfor::content::{Author, NavItem, Post, Tag};
use urlfor::url::{RequestContext, RequestData, UrlResolver};

use super::ResolveArgs;

/// Context name for a literal path passed with `--url`.
const LITERAL_URL: &str = "url";

/// Owned resources backing a borrowed [`RequestData`].
#[derive(Default)]
struct Resources {
    post: Option<Post>,
    tag: Option<Tag>,
    author: Option<Author>,
    nav: Option<NavItem>,
}

/// Resolve the requested URL.
pub fn run_resolve(args: &ResolveArgs, resolver: &UrlResolver) -> String {
    let secure = args.secure.then_some(true);

    let context = if args.context == LITERAL_URL {
        RequestContext::RelativeUrl {
            url: args.url.clone().unwrap_or_default(),
            secure,
        }
    } else {
        args
            .context
            .parse::<RequestContext>()
            .unwrap_or_else(|never| match never {})
    };

    let resources = collect_resources(&context, args);
    let mut data = RequestData {
        post: resources.post.as_ref(),
        tag: resources.tag.as_ref(),
        author: resources.author.as_ref(),
        nav: resources.nav.as_ref(),
        image: args.image.as_deref().or(args.url.as_deref()),
        secure,
        pagination: None,
    };
    if let Some(page) = args.page {
        data = data.page(page);
    }

    let url = resolver.url_for_data(&context, &data, args.absolute);
    urlfor::debug!("url"; "{} -> {}", context, url);
    url
}

/// Turn `--slug`/`--url` into the resource the context expects.
fn collect_resources(context: &RequestContext, args: &ResolveArgs) -> Resources {
    let slug = args.slug.as_deref();
    let url = args.url.as_deref();

    match context {
        RequestContext::Post => Resources {
            post: url.map(|url| Post::new(0, slug.unwrap_or_default()).with_url(url)),
            ..Resources::default()
        },
        RequestContext::Tag => Resources {
            tag: slug.map(Tag::new),
            ..Resources::default()
        },
        RequestContext::Author => Resources {
            author: slug.map(Author::new),
            ..Resources::default()
        },
        RequestContext::Nav => Resources {
            nav: url.map(NavItem::new),
            ..Resources::default()
        },
        _ => Resources::default(),
    }
}
