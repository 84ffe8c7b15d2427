//! Application configuration management
//!
//! Handles loading settings including:
//! - Avatar base URL for new friends
//! - TUI tick rate
//! - The starting friend roster

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::friend::{Friend, FriendId};
use crate::core::id::IdGenerator;
use crate::core::registry::FriendRegistry;
use crate::error::{Result, SplitError};

/// Default avatar service used for new friends
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/48";

/// A friend in the starting roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendSeed {
    /// Fixed id; generated when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    /// Avatar URL; derived from `avatar_base_url` when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub balance: f64,
}

impl FriendSeed {
    fn fixed(id: &str, name: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            name: name.to_string(),
            image: Some(format!("{}?u={}", DEFAULT_AVATAR_URL, id)),
            balance: 0.0,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL the add-friend form starts with
    #[serde(default = "default_avatar_base_url")]
    pub avatar_base_url: String,

    /// TUI tick interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Friends listed when the app starts
    #[serde(default = "default_friends")]
    pub friends: Vec<FriendSeed>,
}

fn default_avatar_base_url() -> String {
    DEFAULT_AVATAR_URL.to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_friends() -> Vec<FriendSeed> {
    vec![
        FriendSeed::fixed("118836", "Clark"),
        FriendSeed::fixed("933372", "Sarah"),
        FriendSeed::fixed("499476", "Anthony"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            avatar_base_url: default_avatar_base_url(),
            tick_rate_ms: default_tick_rate(),
            friends: default_friends(),
        }
    }
}

impl Config {
    /// Load configuration from the default location, or defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let contents = fs::read_to_string(path)?;
            toml::from_str::<Config>(&contents)?
        } else {
            Config::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.avatar_base_url).map_err(|e| {
            SplitError::Config(format!(
                "avatar_base_url '{}' is not a valid URL: {}",
                self.avatar_base_url, e
            ))
        })?;

        if self.tick_rate_ms == 0 {
            return Err(SplitError::Config(
                "tick_rate_ms must be greater than zero".into(),
            ));
        }

        if let Some(seed) = self.friends.iter().find(|s| s.name.is_empty()) {
            return Err(SplitError::Config(format!(
                "friend {} has an empty name",
                seed.id.as_deref().unwrap_or("(no id)")
            )));
        }

        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "splitbill", "splitbill")
            .ok_or_else(|| SplitError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Build the starting friend list
    pub fn initial_registry(&self, ids: &dyn IdGenerator) -> FriendRegistry {
        let friends = self
            .friends
            .iter()
            .map(|seed| {
                let id = seed
                    .id
                    .as_deref()
                    .map(FriendId::new)
                    .unwrap_or_else(|| ids.next_id());
                let image = seed
                    .image
                    .clone()
                    .unwrap_or_else(|| format!("{}?u={}", self.avatar_base_url, id));
                Friend {
                    balance: seed.balance,
                    ..Friend::new(id, seed.name.clone(), image)
                }
            })
            .collect();

        FriendRegistry::with_friends(friends)
    }
}
