// FILE: crates/cli/src/commands.rs

use anyhow::{Context, Result};
use clap::ArgMatches;
use console::style;
use podfeed_config::{Config, ConfigManager};
use podfeed_network::{Client, ClientConfig};
use std::path::PathBuf;
use std::time::Duration;

use crate::pipeline::{self, Listing};
use crate::presenter::{self, ListingStyle};

/// Fetch a feed over HTTP and list its episodes
pub async fn fetch_feed(config: &Config, matches: &ArgMatches) -> Result<()> {
    let url = matches
        .get_one::<String>("url")
        .ok_or_else(|| anyhow::anyhow!("Feed URL is required"))?;

    let timeout = matches
        .get_one::<u64>("timeout")
        .map(|secs| Duration::from_secs(*secs))
        .unwrap_or_else(|| config.fetch.timeout());

    let client = Client::with_config(client_config(config, timeout))
        .context("Failed to create HTTP client")?;

    let listing = pipeline::fetch_episodes(&client, url, timeout)
        .await
        .with_context(|| format!("Could not list episodes of {}", url))?;

    emit(config, matches, &listing)
}

/// List the episodes of an RSS or Atom file
pub fn show_file(config: &Config, matches: &ArgMatches) -> Result<()> {
    let path = required_path(matches)?;
    let listing = pipeline::episodes_from_file(path)
        .with_context(|| format!("Could not list episodes of {}", path.display()))?;

    emit(config, matches, &listing)
}

/// List the episodes of a JSON array of raw entries
pub fn show_entries(config: &Config, matches: &ArgMatches) -> Result<()> {
    let path = required_path(matches)?;
    let listing = pipeline::episodes_from_json(path)
        .with_context(|| format!("Could not extract episodes from {}", path.display()))?;

    emit(config, matches, &listing)
}

/// Show the effective configuration or where it lives
pub fn show_config(manager: &ConfigManager, config: &Config, matches: &ArgMatches) -> Result<()> {
    let path = manager.config_path();

    if matches.get_flag("path") {
        println!("{}", path.display());
        return Ok(());
    }

    let marker = if path.exists() {
        style("✓").green().bold()
    } else {
        style("defaults").yellow()
    };
    println!("{} {}", marker, style(path.display()).dim());

    let rendered = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", rendered);
    Ok(())
}

fn emit(config: &Config, matches: &ArgMatches, listing: &Listing) -> Result<()> {
    if matches.get_flag("json") {
        let json = presenter::render_json(&listing.episodes).context("Failed to encode episodes")?;
        println!("{}", json);
        return Ok(());
    }

    presenter::print_listing(
        listing.title.as_deref(),
        &listing.episodes,
        listing_style(config, matches),
    );
    Ok(())
}

/// Display settings with the `--limit` override applied
pub(crate) fn listing_style(config: &Config, matches: &ArgMatches) -> ListingStyle {
    ListingStyle {
        limit: matches
            .get_one::<usize>("limit")
            .copied()
            .unwrap_or(config.display.episode_limit),
        preview_chars: config.display.summary_preview_chars,
    }
}

pub(crate) fn client_config(config: &Config, timeout: Duration) -> ClientConfig {
    ClientConfig {
        timeout,
        user_agent: config.fetch.user_agent.clone(),
        max_redirects: config.fetch.max_redirects,
        ..ClientConfig::default()
    }
}

fn required_path(matches: &ArgMatches) -> Result<&PathBuf> {
    matches
        .get_one::<PathBuf>("path")
        .ok_or_else(|| anyhow::anyhow!("File path is required"))
}
