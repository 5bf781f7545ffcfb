//! Site configuration management for `urlfor.toml`.
//!
//! # Sections
//!
//! | Section       | Purpose                                          |
//! |---------------|--------------------------------------------------|
//! | `[site]`      | Site URL and optional mount path override        |
//! | `[paths]`     | Upload locations (images)                        |
//! | `[routes]`    | URL keywords for tag, author and page routes     |
//! | `[permalink]` | Permalink pattern for dated posts                |
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.com/blog"
//!
//! [paths]
//! images = "content/images"
//!
//! [routes]
//! tag = "tag"
//! author = "author"
//! page = "page"
//!
//! [permalink]
//! pattern = "/:year/:month/:day/:slug/"
//! ```

mod error;
mod util;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use crate::core::{DEFAULT_IMAGES_PATH, RouteKeywords, SiteContext};
use crate::url::PAGE_PATTERN;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "urlfor.toml";

// ============================================================================
// sections
// ============================================================================

/// `[site]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site URL, path used as mount path (e.g., "https://example.com/blog").
    pub url: Option<String>,

    /// Explicit mount path, overrides the one derived from `url`.
    pub path_prefix: Option<String>,
}

impl SiteSection {
    const URL: FieldPath = FieldPath::new("site.url");
    const PATH_PREFIX: FieldPath = FieldPath::new("site.path_prefix");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be set
    /// - `url` must be a valid http(s) URL with a host
    /// - `path_prefix` must not contain a scheme
    fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.url else {
            diag.error_with_hint(
                Self::URL,
                "site URL is not configured",
                format!("set {}, e.g.: \"https://example.com\"", Self::URL),
            );
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
                if parsed.query().is_some() || parsed.fragment().is_some() {
                    diag.warn(Self::URL, "query string and fragment are ignored");
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::URL,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }

        if let Some(prefix) = &self.path_prefix
            && prefix.contains("://")
        {
            diag.error_with_hint(
                Self::PATH_PREFIX,
                "expected a path, found a URL",
                "use format like /blog",
            );
        }
    }
}

/// `[paths]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsSection {
    /// Upload location of images, relative to the mount path.
    pub images: String,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            images: DEFAULT_IMAGES_PATH.into(),
        }
    }
}

/// `[permalink]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PermalinkSection {
    /// Pattern for dated posts, tokens: `:year :month :day :author :slug :id`.
    pub pattern: String,
}

impl Default for PermalinkSection {
    fn default() -> Self {
        Self {
            pattern: PAGE_PATTERN.into(),
        }
    }
}

impl PermalinkSection {
    const PATTERN: FieldPath = FieldPath::new("permalink.pattern");

    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.pattern.starts_with('/') || !self.pattern.ends_with('/') {
            diag.error_with_hint(
                Self::PATTERN,
                format!("pattern `{}` must start and end with `/`", self.pattern),
                "use format like /:year/:month/:slug/",
            );
        }
    }
}

fn validate_routes(routes: &RouteKeywords, diag: &mut ConfigDiagnostics) {
    let fields = [
        (FieldPath::new("routes.tag"), &routes.tag),
        (FieldPath::new("routes.author"), &routes.author),
        (FieldPath::new("routes.page"), &routes.page),
    ];

    for (field, value) in fields {
        if value.is_empty() {
            diag.error(field, "route keyword must not be empty");
        } else if value.contains('/') {
            diag.error_with_hint(
                field,
                format!("route keyword `{value}` must be a single path segment"),
                format!("remove slashes, e.g.: \"{}\"", value.replace('/', "")),
            );
        }
    }
}

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing urlfor.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub paths: PathsSection,

    #[serde(default)]
    pub routes: RouteKeywords,

    #[serde(default)]
    pub permalink: PermalinkSection,
}

impl SiteConfig {
    /// Load configuration from file path, warning about unknown fields.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = path.to_path_buf();
        crate::debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        crate::log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Override the site URL (e.g. from `--site-url`).
    pub fn set_site_url(&mut self, url: impl Into<String>) {
        self.site.url = Some(url.into());
    }

    /// Validate all sections, reporting every problem at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        validate_routes(&self.routes, &mut diag);
        self.permalink.validate(&mut diag);

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Site context for the URL resolvers.
    ///
    /// The mount path comes from `site.path_prefix` when set, otherwise
    /// from the path component of `site.url`.
    pub fn context(&self) -> SiteContext {
        let base_url = self.site.url.clone().unwrap_or_default();
        let mut ctx = SiteContext::new(base_url)
            .with_images_path(&self.paths.images)
            .with_route_keywords(self.routes.clone());

        if let Some(prefix) = &self.site.path_prefix {
            ctx = ctx.with_mount_path(prefix);
        }
        ctx
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert!(config.site.url.is_none());
        assert_eq!(config.paths.images, "content/images");
        assert_eq!(config.routes, RouteKeywords::default());
        assert_eq!(config.permalink.pattern, "/:slug/");
    }

    #[test]
    fn test_full_config() {
        let config = SiteConfig::from_str(
            r#"
            [site]
            url = "https://example.com/blog"

            [paths]
            images = "uploads"

            [routes]
            tag = "topic"

            [permalink]
            pattern = "/:year/:slug/"
            "#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.routes.tag, "topic");
        assert_eq!(config.routes.author, "author");

        let ctx = config.context();
        assert_eq!(ctx.base_url, "https://example.com/blog");
        assert_eq!(ctx.mount_path, "/blog");
        assert_eq!(ctx.images_path, "uploads");
        assert_eq!(ctx.route_keywords.tag, "topic");
    }

    #[test]
    fn test_path_prefix_override() {
        let config = SiteConfig::from_str(
            r#"
            [site]
            url = "https://example.com/"
            path_prefix = "docs/"
            "#,
        )
        .unwrap();
        assert_eq!(config.context().mount_path, "/docs");
    }

    #[test]
    fn test_validate_missing_url() {
        let err = SiteConfig::from_str("").unwrap().validate().unwrap_err();
        match err {
            ConfigError::Diagnostics(diag) => {
                assert_eq!(diag.errors().len(), 1);
                assert_eq!(diag.errors()[0].field.as_str(), "site.url");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = SiteConfig::from_str(
            r#"
            [site]
            url = "ftp://example.com"

            [routes]
            tag = ""
            author = "by/name"

            [permalink]
            pattern = ":slug"
            "#,
        )
        .unwrap();

        let Err(ConfigError::Diagnostics(diag)) = config.validate() else {
            panic!("expected diagnostics");
        };
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            ["site.url", "routes.tag", "routes.author", "permalink.pattern"]
        );
    }

    #[test]
    fn test_validate_invalid_url() {
        let mut config = SiteConfig::default();
        config.set_site_url("not a url");
        assert!(config.validate().is_err());

        config.set_site_url("https://example.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_path_prefix_url_rejected() {
        let mut config = SiteConfig::default();
        config.set_site_url("https://example.com");
        config.site.path_prefix = Some("https://example.com/blog".into());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            SiteConfig::from_str("[site\nurl = 1"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[site]\nurl = \"http://example.com/\"\nunknown = 1\n\n[routes]\npage = \"p\""
        )
        .unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.config_path, file.path());
        assert_eq!(config.routes.page, "p");
        assert_eq!(config.context().mount_path, "");
    }

    #[test]
    fn test_parse_with_ignored_reports_unknown() {
        let (_, ignored) =
            SiteConfig::parse_with_ignored("[site]\nurl = \"http://x.com\"\ntheme = 1\n[extra]\na = 1")
                .unwrap();
        assert_eq!(ignored, ["site.theme", "extra"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        assert!(matches!(SiteConfig::load(&path), Err(ConfigError::Io(..))));
    }
}
