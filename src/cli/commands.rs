//! CLI command definitions using clap
//!
//! Defines the command structure for the `splitbill` CLI tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// splitbill - split bills and track balances with friends
///
/// Run without arguments to launch the TUI mode.
#[derive(Parser, Debug)]
#[command(name = "splitbill", version, about, long_about = None)]
pub struct Cli {
    /// Load configuration from this file instead of the default location
    #[arg(long, global = true, env = "SPLITBILL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the starting friend list and balances
    Friends {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect configuration
    Config(ConfigArgs),
}

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the configuration file location
    Path,
    /// Print the effective configuration as TOML
    Show,
}
