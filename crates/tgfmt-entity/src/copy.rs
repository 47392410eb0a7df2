use crate::entity::MessageEntity;

/// Duplicate an entity so that the copy shares nothing with the source.
///
/// Every payload, including a `text_mention` user record, is owned by the
/// entity, so a clone is already fully independent. This function exists to
/// name that guarantee at call sites that cache or mutate entities.
#[must_use]
pub fn deep_copy_entity(entity: &MessageEntity) -> MessageEntity {
    entity.clone()
}
