//! CLI command implementations
//!
//! This module contains handlers for the non-interactive subcommands.

pub mod commands;
pub mod config;
pub mod friends;

use std::path::Path;

use crate::core::config::Config;
use crate::error::Result;

/// Load configuration from `path` if given, otherwise the default location
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
