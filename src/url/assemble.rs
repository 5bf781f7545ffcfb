//! Final URL assembly: mount path and absolute/relative handling.

use crate::core::SiteContext;

/// Join `path` onto the site base (absolute) or the mount path (relative).
///
/// A `path` already starting with the mount path has that prefix removed
/// first, so the mount never appears twice.
///
/// ```text
/// mount /blog, relative:  /welcome/       -> /blog/welcome/
/// mount /blog, relative:  /blog/welcome/  -> /blog/welcome/
/// absolute:               /               -> http://example.com/
/// ```
///
/// `secure` is accepted but does not change the scheme: the base URL is
/// used as configured.
pub fn assemble(ctx: &SiteContext, path: &str, absolute: bool, secure: Option<bool>) -> String {
    let path = if path.is_empty() { "/" } else { path };

    let base = if absolute {
        ctx.trimmed_base()
    } else {
        ctx.mount_path.as_str()
    };

    let path = path.strip_prefix(ctx.mount_path.as_str()).unwrap_or(path);

    if secure == Some(true) && absolute && ctx.base_url.starts_with("http://") {
        crate::debug!("url"; "secure url requested for {}, keeping configured scheme", path);
    }

    format!("{base}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog() -> SiteContext {
        SiteContext::new("http://example.com/").with_mount_path("/blog")
    }

    #[test]
    fn test_relative_prefixes_mount() {
        assert_eq!(assemble(&blog(), "/welcome/", false, None), "/blog/welcome/");
    }

    #[test]
    fn test_relative_empty_path_is_root() {
        assert_eq!(assemble(&blog(), "", false, None), "/blog/");
        assert_eq!(assemble(&SiteContext::new("http://example.com"), "", false, None), "/");
    }

    #[test]
    fn test_absolute_uses_trimmed_base() {
        assert_eq!(assemble(&blog(), "/", true, None), "http://example.com/");
        assert_eq!(
            assemble(&blog(), "/tag/news/", true, None),
            "http://example.com/tag/news/"
        );
    }

    #[test]
    fn test_mount_never_doubled() {
        assert_eq!(
            assemble(&blog(), "/blog/welcome/", false, None),
            "/blog/welcome/"
        );
        assert_eq!(
            assemble(&blog(), "/blog/welcome/", true, None),
            "http://example.com/welcome/"
        );
    }

    #[test]
    fn test_trailing_slash_preserved() {
        for path in ["/a/", "/blog/a/", "/a/b/c/"] {
            assert!(assemble(&blog(), path, false, None).ends_with('/'));
            assert!(assemble(&blog(), path, true, None).ends_with('/'));
        }
    }

    #[test]
    fn test_secure_does_not_change_scheme() {
        assert_eq!(
            assemble(&blog(), "/a/", true, Some(true)),
            "http://example.com/a/"
        );
    }

    #[test]
    fn test_root_deployment() {
        let ctx = SiteContext::new("https://example.com");
        assert_eq!(assemble(&ctx, "/about/", false, None), "/about/");
        assert_eq!(assemble(&ctx, "/about/", true, None), "https://example.com/about/");
    }
}
