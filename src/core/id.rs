//! Friend id generation

use uuid::Uuid;

use crate::core::friend::FriendId;

/// Source of fresh friend ids
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator {
    fn next_id(&self) -> FriendId;
}

/// Random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> FriendId {
        FriendId::new(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_unique() {
        let ids = UuidGenerator;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }
}
