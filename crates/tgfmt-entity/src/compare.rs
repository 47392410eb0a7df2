//! Entity comparison.
//!
//! Two notions of sameness are needed by the consolidator and its callers:
//! - *equal*: same kind, same payload, same range;
//! - *similar*: same kind and payload wherever the range is.
//!
//! Payload comparison is an exhaustive match over [`EntityKind`], so user
//! records compare field by field. Optional user fields are `Option`s, which
//! makes an omitted field and an explicit `null` the same value.

use crate::entity::MessageEntity;
use crate::user::User;

/// True if both entities have the same kind, payload, offset, and length.
#[must_use]
pub fn is_entity_equal(a: &MessageEntity, b: &MessageEntity) -> bool {
    a.offset == b.offset && a.length == b.length && is_entity_similar(a, b)
}

/// True if both entities have the same kind and payload, ignoring the range.
#[must_use]
pub fn is_entity_similar(a: &MessageEntity, b: &MessageEntity) -> bool {
    a.kind == b.kind
}

/// True if both user records carry the same values in every field.
#[must_use]
pub fn is_user_equal(a: &User, b: &User) -> bool {
    a == b
}

impl MessageEntity {
    /// See [`is_entity_similar`].
    #[must_use]
    pub fn is_similar(&self, other: &Self) -> bool {
        is_entity_similar(self, other)
    }
}
