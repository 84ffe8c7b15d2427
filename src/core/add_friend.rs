//! Add-friend form state

use tracing::debug;

use crate::core::friend::Friend;
use crate::core::id::IdGenerator;
use crate::error::{Result, SplitError};

/// Input field of the add-friend form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddFriendField {
    #[default]
    Name,
    Image,
}

impl AddFriendField {
    pub fn next(self) -> Self {
        match self {
            AddFriendField::Name => AddFriendField::Image,
            AddFriendField::Image => AddFriendField::Name,
        }
    }
}

/// Name and avatar inputs for a new friend
#[derive(Debug, Clone)]
pub struct AddFriendForm {
    pub name: String,
    pub image: String,
    pub field: AddFriendField,
    /// Value `image` resets to after a submission
    default_image: String,
}

impl AddFriendForm {
    pub fn new(default_image: impl Into<String>) -> Self {
        let default_image = default_image.into();
        Self {
            name: String::new(),
            image: default_image.clone(),
            field: AddFriendField::Name,
            default_image,
        }
    }

    /// Mutable access to the focused input
    pub fn focused_input(&mut self) -> &mut String {
        match self.field {
            AddFriendField::Name => &mut self.name,
            AddFriendField::Image => &mut self.image,
        }
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    /// Build a friend from the inputs and reset the form
    ///
    /// Leaves the inputs untouched when either one is empty.
    pub fn submit(&mut self, ids: &dyn IdGenerator) -> Result<Friend> {
        if self.name.is_empty() {
            return Err(SplitError::MissingField("name"));
        }
        if self.image.is_empty() {
            return Err(SplitError::MissingField("image"));
        }

        let id = ids.next_id();
        let image = format!("{}?={}", self.image, id);
        let friend = Friend::new(id, std::mem::take(&mut self.name), image);
        debug!(id = %friend.id, name = %friend.name, "add-friend form submitted");

        self.reset();
        Ok(friend)
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.image = self.default_image.clone();
        self.field = AddFriendField::Name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::friend::FriendId;
    use crate::core::id::MockIdGenerator;

    const AVATAR: &str = "https://i.pravatar.cc/48";

    fn fixed_ids(id: &'static str) -> MockIdGenerator {
        let mut ids = MockIdGenerator::new();
        ids.expect_next_id().returning(move || FriendId::new(id));
        ids
    }

    #[test]
    fn test_submit_builds_friend_and_resets() {
        let mut form = AddFriendForm::new(AVATAR);
        form.name = "Nina".to_string();
        form.image = "http://x".to_string();
        form.field = AddFriendField::Image;

        let friend = form.submit(&fixed_ids("abc-123")).unwrap();

        assert_eq!(friend.id, FriendId::new("abc-123"));
        assert_eq!(friend.name, "Nina");
        assert_eq!(friend.image, "http://x?=abc-123");
        assert_eq!(friend.balance, 0.0);

        assert!(form.name.is_empty());
        assert_eq!(form.image, AVATAR);
        assert_eq!(form.field, AddFriendField::Name);
    }

    #[test]
    fn test_empty_name_is_rejected_without_consuming_id() {
        let mut ids = MockIdGenerator::new();
        ids.expect_next_id().never();

        let mut form = AddFriendForm::new(AVATAR);
        let result = form.submit(&ids);

        assert!(matches!(result, Err(SplitError::MissingField("name"))));
        assert_eq!(form.image, AVATAR);
    }

    #[test]
    fn test_empty_image_is_rejected_and_keeps_name() {
        let mut form = AddFriendForm::new(AVATAR);
        form.name = "Nina".to_string();
        form.image.clear();

        let result = form.submit(&fixed_ids("x"));

        assert!(matches!(result, Err(SplitError::MissingField("image"))));
        assert_eq!(form.name, "Nina");
    }

    #[test]
    fn test_focused_input_follows_field() {
        let mut form = AddFriendForm::new(AVATAR);
        form.focused_input().push_str("Ni");
        form.next_field();
        form.focused_input().push_str("?size=2");

        assert_eq!(form.name, "Ni");
        assert_eq!(form.image, format!("{}?size=2", AVATAR));
    }
}
