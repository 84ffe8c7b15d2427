//! Custom error types for splitbill
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the splitbill application
#[derive(Error, Debug)]
pub enum SplitError {
    /// Balance update aimed at a friend that is not in the list
    #[error("No friend with id '{0}' in the list.")]
    FriendNotFound(String),

    /// Split submitted while no friend is selected
    #[error("No friend is selected.")]
    NoSelection,

    /// Form submitted with a required field left empty
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}\n\n  → Run 'splitbill config path' to locate it.")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),
}

impl From<toml::de::Error> for SplitError {
    fn from(err: toml::de::Error) -> Self {
        SplitError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for SplitError {
    fn from(err: toml::ser::Error) -> Self {
        SplitError::Toml(err.to_string())
    }
}

/// Result type alias using SplitError
pub type Result<T> = std::result::Result<T, SplitError>;
