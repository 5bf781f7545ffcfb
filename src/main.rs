//! urlfor - command-line front end for the URL resolution engine.

mod cli;

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use urlfor::config::{SiteConfig, find_config_file};
use urlfor::url::UrlResolver;
use urlfor::{install_context, log};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    urlfor::logger::set_verbose(cli.verbose);

    let config = load_config(&cli)?;
    if let Err(err) = config.validate() {
        log!("error"; "{}", err);
        std::process::exit(1);
    }

    let ctx = install_context(config.context());
    let resolver = UrlResolver::new(Arc::clone(&ctx));

    match &cli.command {
        Commands::Resolve { args } => println!("{}", cli::resolve::run_resolve(args, &resolver)),
        Commands::Permalink { args } => {
            println!("{}", cli::permalink::run_permalink(args, &config, &resolver))
        }
        Commands::Check => cli::check::run_check(&ctx),
    }

    Ok(())
}

/// Locate and load the config file, then apply CLI overrides.
///
/// A missing config file is fine when `--site-url` is given.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;

    let mut config = match find_config_file(&cwd, &cli.config) {
        Some(path) => SiteConfig::load(&path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None if cli.site_url.is_some() => SiteConfig::default(),
        None => bail!(
            "Config file '{}' not found. Create one or pass --site-url.",
            cli.config.display()
        ),
    };

    if let Some(url) = &cli.site_url {
        config.set_site_url(url.clone());
    }

    Ok(config)
}
