//! TUI theme and styles

use ratatui::style::{Color, Modifier, Style};

use crate::core::BalanceStatus;

/// Application color theme
pub struct Theme;

impl Theme {
    /// Primary accent color
    pub const PRIMARY: Color = Color::Cyan;

    /// Focused input border color
    pub const FOCUS: Color = Color::Yellow;

    /// Friend owes you
    pub const OWED: Color = Color::Green;

    /// You owe the friend
    pub const OWE: Color = Color::Red;

    /// Muted text color
    pub const MUTED: Color = Color::DarkGray;

    /// Header style
    pub fn header() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().bg(Color::DarkGray)
    }

    /// Row under the list cursor
    pub fn cursor() -> Style {
        Style::default().bg(Self::PRIMARY).fg(Color::Black)
    }

    /// Friend selected for splitting
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::FOCUS)
            .add_modifier(Modifier::BOLD)
    }

    /// Border of the focused input
    pub fn focused() -> Style {
        Style::default().fg(Self::FOCUS)
    }

    /// Normal text style
    pub fn normal() -> Style {
        Style::default()
    }

    /// Muted text style
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Color for a balance line
    pub fn balance(status: BalanceStatus) -> Style {
        match status {
            BalanceStatus::YouOwe(_) => Style::default().fg(Self::OWE),
            BalanceStatus::OwesYou(_) => Style::default().fg(Self::OWED),
            BalanceStatus::Even => Self::normal(),
        }
    }
}
