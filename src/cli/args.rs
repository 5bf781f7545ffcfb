//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;
use urlfor::utils::date::DateTimeUtc;

/// Resolve site URLs and permalinks
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, default_value = "urlfor.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override site URL.
    ///
    /// The path component becomes the mount path unless `[site] path_prefix` is set.
    /// Without a config file, this alone is enough to resolve URLs.
    ///
    /// Example: urlfor --site-url "https://example.github.io/blog" resolve home
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve a URL for a route or resource
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Expand a permalink pattern for a post
    #[command(visible_alias = "p")]
    Permalink {
        #[command(flatten)]
        args: PermalinkArgs,
    },

    /// Validate the configuration and print the derived site context
    #[command(visible_alias = "c")]
    Check,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// What to resolve: home, rss, api, post, tag, author, image, nav, sitemap-xsl,
    /// or `url` for a literal path given with --url
    pub context: String,

    /// Tag or author slug
    #[arg(short, long)]
    pub slug: Option<String>,

    /// Post URL, navigation URL, or literal path (depending on context)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Image path (e.g. /content/images/cat.png)
    #[arg(short, long)]
    pub image: Option<String>,

    /// Page number of a paginated listing
    #[arg(short, long)]
    pub page: Option<u32>,

    /// Produce an absolute URL (scheme and host)
    #[arg(short, long)]
    pub absolute: bool,

    /// Request the secure variant (advisory, the configured scheme is kept)
    #[arg(long)]
    pub secure: bool,
}

/// Permalink command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PermalinkArgs {
    /// Post slug
    #[arg(short, long)]
    pub slug: String,

    /// Post identifier
    #[arg(long, default_value_t = 0)]
    pub id: u64,

    /// Publication date (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ)
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<DateTimeUtc>,

    /// Author slug
    #[arg(long)]
    pub author: Option<String>,

    /// Treat as a static page (always `/:slug/`)
    #[arg(long)]
    pub static_page: bool,

    /// Pattern to expand (default: `[permalink] pattern` from config)
    #[arg(short = 'P', long)]
    pub pattern: Option<String>,
}

fn parse_date(s: &str) -> Result<DateTimeUtc, String> {
    DateTimeUtc::parse(s)
        .ok_or_else(|| format!("invalid date `{s}`, expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ"))
}
