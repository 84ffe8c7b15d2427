//! Friend records and balance display

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque friend identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FriendId(String);

impl FriendId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A friend and the running balance with them
///
/// `balance` is negative when you owe the friend and positive when the
/// friend owes you.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    pub balance: f64,
}

impl Friend {
    /// Create a settled friend
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance: 0.0,
        }
    }

    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::from_balance(self.balance)
    }

    /// Human readable balance line, e.g. "Clark owes you $60"
    pub fn status_text(&self) -> String {
        match self.status() {
            BalanceStatus::YouOwe(amount) => {
                format!("You owe {} ${}", self.name, format_amount(amount))
            }
            BalanceStatus::OwesYou(amount) => {
                format!("{} owes you ${}", self.name, format_amount(amount))
            }
            BalanceStatus::Even => format!("You and {} are even", self.name),
        }
    }
}

/// Who owes whom, derived from the sign of a balance
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceStatus {
    /// You owe the friend this (positive) amount
    YouOwe(f64),
    /// The friend owes you this (positive) amount
    OwesYou(f64),
    Even,
}

impl BalanceStatus {
    pub fn from_balance(balance: f64) -> Self {
        if balance < 0.0 {
            BalanceStatus::YouOwe(balance.abs())
        } else if balance > 0.0 {
            BalanceStatus::OwesYou(balance)
        } else {
            BalanceStatus::Even
        }
    }
}

/// Format an amount without a trailing ".0" for whole numbers
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{}", amount)
    }
}
