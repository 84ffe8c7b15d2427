//! Friend list storage
//!
//! Keeps friends in insertion order. Balances only change through
//! [`FriendRegistry::apply_balance_delta`].

use crate::core::friend::{Friend, FriendId};
use crate::error::{Result, SplitError};

/// Ordered list of known friends
#[derive(Debug, Clone, Default)]
pub struct FriendRegistry {
    friends: Vec<Friend>,
}

impl FriendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from an initial roster
    pub fn with_friends(friends: Vec<Friend>) -> Self {
        Self { friends }
    }

    /// Add a friend to the end of the list
    ///
    /// Ids are not checked for duplicates; callers generate unique ids.
    pub fn append(&mut self, friend: Friend) {
        self.friends.push(friend);
    }

    /// Add `delta` to the balance of the friend with `id`
    pub fn apply_balance_delta(&mut self, id: &FriendId, delta: f64) -> Result<&Friend> {
        let friend = self
            .friends
            .iter_mut()
            .find(|f| &f.id == id)
            .ok_or_else(|| SplitError::FriendNotFound(id.to_string()))?;

        friend.balance += delta;
        Ok(friend)
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn get(&self, id: &FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| &f.id == id)
    }

    /// Index of the friend with `id` in display order
    pub fn position(&self, id: &FriendId) -> Option<usize> {
        self.friends.iter().position(|f| &f.id == id)
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}
