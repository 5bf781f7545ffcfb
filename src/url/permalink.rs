//! Permalink pattern expansion.
//!
//! Expands `:token` placeholders in a pattern for a single post:
//!
//! ```text
//! /:year/:month/:day/:slug/  ->  /2014/01/01/welcome/
//! ```
//!
//! Static pages ignore the pattern and always use `/:slug/`.
//! Unknown tokens expand to nothing.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::content::Post;

/// Template used for static pages.
pub const PAGE_PATTERN: &str = "/:slug/";

/// `:` followed by lowercase letters.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":([a-z]+)").unwrap());

/// Supported permalink tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Year,
    Month,
    Day,
    Author,
    Slug,
    Id,
}

impl Token {
    /// Parse a token name (without the leading `:`).
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "year" => Some(Self::Year),
            "month" => Some(Self::Month),
            "day" => Some(Self::Day),
            "author" => Some(Self::Author),
            "slug" => Some(Self::Slug),
            "id" => Some(Self::Id),
            _ => None,
        }
    }

    /// Value of this token for `post`.
    ///
    /// Date tokens are empty when the post has no publication date.
    pub fn value(self, post: &Post) -> String {
        let date = |pattern: &str| {
            post.published_at
                .map(|at| at.format(pattern))
                .unwrap_or_default()
        };

        match self {
            Self::Year => date("YYYY"),
            Self::Month => date("MM"),
            Self::Day => date("DD"),
            Self::Author => post.author_slug().to_string(),
            Self::Slug => post.slug.clone(),
            Self::Id => post.id.to_string(),
        }
    }
}

/// Expand `pattern` for `post`.
///
/// The result is returned as-is: slashes come from the pattern.
pub fn resolve(post: &Post, pattern: &str) -> String {
    let template = if post.page { PAGE_PATTERN } else { pattern };

    TOKEN_RE
        .replace_all(template, |caps: &Captures| match Token::parse(&caps[1]) {
            Some(token) => token.value(post),
            None => {
                crate::debug!("permalink"; "unknown token `{}` in `{}`", &caps[0], template);
                String::new()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Author;
    use crate::utils::date::DateTimeUtc;

    fn welcome() -> Post {
        Post::new(42, "welcome")
            .published(DateTimeUtc::from_ymd(2014, 1, 1))
            .by(Author::new("alice"))
    }

    #[test]
    fn test_date_pattern() {
        assert_eq!(
            resolve(&welcome(), "/:year/:month/:day/:slug/"),
            "/2014/01/01/welcome/"
        );
    }

    #[test]
    fn test_slug_pattern() {
        assert_eq!(resolve(&welcome(), "/:slug/"), "/welcome/");
    }

    #[test]
    fn test_author_and_id() {
        assert_eq!(resolve(&welcome(), "/:author/:id/"), "/alice/42/");
    }

    #[test]
    fn test_page_ignores_pattern() {
        let page = welcome().as_page();
        assert_eq!(resolve(&page, "/:year/:month/:day/:slug/"), "/welcome/");
        assert_eq!(resolve(&page, "/blog/:id/"), "/welcome/");
    }

    #[test]
    fn test_unknown_token_dropped() {
        assert_eq!(resolve(&welcome(), "/:category/:slug/"), "//welcome/");
        assert_eq!(resolve(&welcome(), "/:slugs/"), "//");
    }

    #[test]
    fn test_uppercase_is_not_a_token() {
        assert_eq!(resolve(&welcome(), "/:Slug/:slug/"), "/:Slug/welcome/");
    }

    #[test]
    fn test_token_followed_by_literal() {
        assert_eq!(resolve(&welcome(), "/:slug.html"), "/welcome.html");
        assert_eq!(resolve(&welcome(), "/:year-:month/"), "/2014-01/");
    }

    #[test]
    fn test_missing_date_and_author() {
        let post = Post::new(1, "draft");
        assert_eq!(resolve(&post, "/:year/:month/:slug/"), "///draft/");
        assert_eq!(resolve(&post, "/:author/:slug/"), "//draft/");
    }

    #[test]
    fn test_token_parse_closed_set() {
        assert_eq!(Token::parse("year"), Some(Token::Year));
        assert_eq!(Token::parse("id"), Some(Token::Id));
        assert_eq!(Token::parse("tag"), None);
        assert_eq!(Token::parse(""), None);
    }

    #[test]
    fn test_pattern_without_tokens() {
        assert_eq!(resolve(&welcome(), "/static/"), "/static/");
        assert_eq!(resolve(&welcome(), ""), "");
    }
}
