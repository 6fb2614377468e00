//! # ubl-gate
//!
//! Command-line front end over the ban list services. It stands in for the host
//! server: `check` runs the same login gate a server would call on each join.

pub mod cli;
pub mod commands;

use std::sync::Arc;

use tracing::info;
use ubl_common::{try_init_tracing_with_config, AppConfig, AppResult, TracingConfig};
use ubl_feed::FeedFetcher;
use ubl_service::{PluginInfo, ServiceContext};

pub use cli::{Cli, Command};

/// Metadata of this binary
pub fn plugin_info() -> PluginInfo {
    PluginInfo::new(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_HOMEPAGE"),
    )
}

/// Load configuration and apply command-line overrides
pub fn load_config(cli: &Cli) -> AppResult<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    if let Some(url) = &cli.feed_url {
        config.feed.url = Some(url.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log.level.clone_from(level);
    }

    Ok(config)
}

/// Run one command to completion
pub async fn run(cli: Cli) -> AppResult<()> {
    if cli.command == Command::Version {
        return commands::version(&plugin_info(), cli.json);
    }

    let config = load_config(&cli)?;

    if let Err(e) =
        try_init_tracing_with_config(TracingConfig::from_settings(&config.log, config.app.env))
    {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Fail fast on a malformed URL instead of on every lookup
    let fetcher = FeedFetcher::from_config(&config.feed)?;

    info!(
        env = ?config.app.env,
        feed = %fetcher.url(),
        fail_policy = ?config.gate.fail_policy,
        "Configuration loaded"
    );

    let ctx = ServiceContext::from_config(&config, Arc::new(fetcher));

    match &cli.command {
        Command::Stats => commands::stats(&ctx, cli.json).await,
        Command::Check { identities } => commands::check(&ctx, identities, cli.json).await,
        Command::List { identity, active } => {
            commands::list(&ctx, identity.as_deref(), *active, cli.json).await
        }
        Command::Version => commands::version(&plugin_info(), cli.json),
    }
}
