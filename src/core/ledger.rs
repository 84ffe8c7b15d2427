//! Application state shared by every view
//!
//! The [`Ledger`] owns the friend list, the current selection and whether
//! the add-friend panel is open. Views read it and change it only through
//! the methods below.

use tracing::{info, warn};

use crate::core::friend::{Friend, FriendId};
use crate::core::registry::FriendRegistry;
use crate::core::selection::SelectionController;
use crate::error::{Result, SplitError};

/// Which form the sidebar shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode<'a> {
    /// Only the friend list
    Browsing,
    /// Add-friend panel open
    Adding,
    /// Splitting a bill with the selected friend
    Splitting(&'a Friend),
}

/// Friends, selection and panel state
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    registry: FriendRegistry,
    selection: SelectionController,
    adding: bool,
}

impl Ledger {
    pub fn new(registry: FriendRegistry) -> Self {
        Self {
            registry,
            selection: SelectionController::new(),
            adding: false,
        }
    }

    pub fn registry(&self) -> &FriendRegistry {
        &self.registry
    }

    pub fn friends(&self) -> &[Friend] {
        self.registry.friends()
    }

    pub fn is_adding(&self) -> bool {
        self.adding
    }

    /// Open or close the add-friend panel
    ///
    /// The selection is kept; the split form is hidden while adding.
    pub fn toggle_add_friend(&mut self) {
        self.adding = !self.adding;
    }

    /// Append a new friend and close the add-friend panel
    pub fn add_friend(&mut self, friend: Friend) {
        info!(id = %friend.id, name = %friend.name, "friend added");
        self.registry.append(friend);
        self.adding = false;
    }

    /// Select a friend, or deselect if already selected
    ///
    /// Always closes the add-friend panel.
    pub fn toggle_select(&mut self, id: &FriendId) -> Result<()> {
        if self.registry.get(id).is_none() {
            return Err(SplitError::FriendNotFound(id.to_string()));
        }
        self.selection.toggle_select(id);
        self.adding = false;
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The selected friend, if the selection still resolves
    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selection
            .selected()
            .and_then(|id| self.registry.get(id))
    }

    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selected_friend().is_some_and(|f| &f.id == id)
    }

    /// Drop a selection whose friend is no longer in the list
    pub fn prune_selection(&mut self) {
        if self.selection.selected().is_some() && self.selected_friend().is_none() {
            warn!("clearing selection of unknown friend");
            self.selection.clear();
        }
    }

    /// Add a split result to the selected friend and clear the selection
    pub fn split_bill(&mut self, delta: f64) -> Result<&Friend> {
        let id = self
            .selection
            .selected()
            .cloned()
            .ok_or(SplitError::NoSelection)?;
        self.selection.clear();

        let friend = self.registry.apply_balance_delta(&id, delta)?;
        info!(id = %friend.id, delta, balance = friend.balance, "split applied");
        Ok(friend)
    }

    pub fn mode(&self) -> Mode<'_> {
        if self.adding {
            return Mode::Adding;
        }
        match self.selected_friend() {
            Some(friend) => Mode::Splitting(friend),
            None => Mode::Browsing,
        }
    }
}
