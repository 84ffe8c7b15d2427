//! Core functionality for splitbill
//!
//! This module contains the terminal-independent logic:
//! - Friend records and the friend list
//! - Selection tracking
//! - The add-friend and split-bill forms
//! - The ledger tying them together
//! - Application configuration

pub mod add_friend;
pub mod config;
pub mod friend;
pub mod id;
pub mod ledger;
pub mod registry;
pub mod selection;
pub mod split_bill;

pub use add_friend::AddFriendForm;
pub use config::Config;
pub use friend::{BalanceStatus, Friend, FriendId};
pub use id::{IdGenerator, UuidGenerator};
pub use ledger::{Ledger, Mode};
pub use registry::FriendRegistry;
pub use selection::SelectionController;
pub use split_bill::{Payer, SplitBillForm};
