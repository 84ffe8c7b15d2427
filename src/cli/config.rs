//! Configuration CLI command handlers

use std::path::Path;

use crate::cli::commands::ConfigCommand;
use crate::core::config::Config;
use crate::error::Result;

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand, path: Option<&Path>) -> Result<()> {
    match command {
        ConfigCommand::Path => {
            let path = match path {
                Some(path) => path.to_path_buf(),
                None => Config::config_path()?,
            };
            println!("{}", path.display());
        }
        ConfigCommand::Show => {
            let config = super::load_config(path)?;
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}
