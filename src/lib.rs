//! splitbill - A TUI application for splitting bills with friends
//!
//! This library provides both CLI and TUI interfaces for keeping a running
//! balance with each friend: add friends, pick one, and record how a bill
//! was split.

pub mod cli;
pub mod core;
pub mod error;
pub mod tui;

pub use error::{Result, SplitError};
