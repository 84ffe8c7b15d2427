//! Tracks which friend is selected for splitting a bill

use crate::core::friend::FriendId;

/// Holds at most one selected friend id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    selected: Option<FriendId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`, or clear the selection if `id` is already selected
    pub fn toggle_select(&mut self, id: &FriendId) {
        if self.is_selected(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.clone());
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&FriendId> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: &FriendId) -> bool {
        self.selected.as_ref() == Some(id)
    }
}
