// FILE: crates/cli/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use podfeed_config::{apply_env_overrides, Config, ConfigManager};
use std::path::PathBuf;

mod commands;
mod pipeline;
mod presenter;

fn limit_arg() -> Arg {
    Arg::new("limit")
        .short('n')
        .long("limit")
        .value_name("N")
        .help("Number of episodes to show")
        .value_parser(clap::value_parser!(usize))
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Print every episode as JSON")
        .action(ArgAction::SetTrue)
}

fn build_cli() -> Command {
    Command::new("podfeed")
        .version(env!("CARGO_PKG_VERSION"))
        .author("DrTomLLC")
        .about("List the episodes of podcast feeds")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.toml")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .subcommand(
            Command::new("fetch")
                .about("Fetch a feed and list its episodes")
                .arg(Arg::new("url").required(true).value_name("URL").help("Feed URL"))
                .arg(limit_arg())
                .arg(json_arg())
                .arg(
                    Arg::new("timeout")
                        .short('t')
                        .long("timeout")
                        .value_name("SECS")
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64).range(1..=300)),
                ),
        )
        .subcommand(
            Command::new("file")
                .about("List the episodes of an RSS or Atom file")
                .arg(
                    Arg::new("path")
                        .required(true)
                        .value_name("PATH")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(limit_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("entries")
                .about("Extract episodes from a JSON array of feed entries")
                .arg(
                    Arg::new("path")
                        .required(true)
                        .value_name("PATH")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(limit_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("config")
                .about("Show the effective configuration")
                .arg(
                    Arg::new("path")
                        .long("path")
                        .help("Only print the config file location")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn config_manager(dir: Option<&PathBuf>) -> Result<ConfigManager> {
    let manager = match dir {
        Some(dir) => ConfigManager::with_directory(dir.clone()),
        None => ConfigManager::new(),
    };
    manager.context("Failed to locate config directory")
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let manager = config_manager(matches.get_one::<PathBuf>("config"))?;

    let (mut config, load_error) = match manager.load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let rejected_overrides = apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.app.log_level.to_string()),
    )
    .init();

    if let Some(e) = load_error {
        log::warn!("Config error: {}, using defaults", e);
    }
    for rejected in rejected_overrides {
        log::warn!("Ignoring environment override: {}", rejected);
    }
    if let Err(problems) = config.validate() {
        for problem in problems {
            log::warn!("Config: {}", problem);
        }
    }

    match matches.subcommand() {
        Some(("fetch", sub_matches)) => commands::fetch_feed(&config, sub_matches).await,
        Some(("file", sub_matches)) => commands::show_file(&config, sub_matches),
        Some(("entries", sub_matches)) => commands::show_entries(&config, sub_matches),
        Some(("config", sub_matches)) => commands::show_config(&manager, &config, sub_matches),
        _ => {
            build_cli().print_help()?;
            Ok(())
        }
    }
}
