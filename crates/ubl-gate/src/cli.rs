//! Command-line interface
//!
//! Arguments are parsed with `clap`. Settings given here override the
//! configuration file and the `UBL__*` environment.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Universal Ban List gate
#[derive(Debug, Parser)]
#[command(name = "ubl-gate", version, about)]
pub struct Cli {
    /// Configuration file path (defaults to ./ubl.toml when present)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Override the feed URL
    #[arg(long, value_name = "URL", global = true)]
    pub feed_url: Option<String>,

    /// Override the log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Print results and errors as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Fetch the list and report how many bans it holds
    Stats,

    /// Run the login check for one or more players
    Check {
        /// Player UUIDs
        #[arg(required = true, value_name = "UUID")]
        identities: Vec<String>,
    },

    /// Print ban records
    List {
        /// Only records for this player
        #[arg(long, value_name = "UUID")]
        identity: Option<String>,

        /// Only bans in force right now
        #[arg(long)]
        active: bool,
    },

    /// Print version and authorship
    Version,
}
