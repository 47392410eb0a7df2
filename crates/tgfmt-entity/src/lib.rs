//! Message entity model for the tgfmt converter.
//!
//! A formatted message is plain text plus an ordered list of entities. Each
//! entity covers a half-open range of the text measured in UTF-16 code units,
//! which is how Telegram counts characters.
//!
//! # Scope
//!
//! This crate implements:
//! - **Entity model** ([`MessageEntity`], [`EntityKind`], [`EntityType`], [`User`])
//! - **Comparison** ([`is_entity_equal`], [`is_entity_similar`], [`is_user_equal`])
//! - **Deep copy** ([`deep_copy_entity`])
//! - **Consolidation** ([`consolidate_entities`]) of fragmented entities
//! - **Formatted text** ([`FormattedText`]) with range validation and concatenation
//!
//! The crate has no knowledge of HTML; see `tgfmt-html` for the parser.

/// Structural comparison of entities and user records.
pub mod compare;
/// Merging of touching or overlapping entities of the same kind.
pub mod consolidate;
/// Independent duplication of entities.
pub mod copy;
/// The entity value type and its kinds.
pub mod entity;
/// Text paired with its entities.
pub mod formatted;
/// The user record carried by `text_mention` entities.
pub mod user;

pub use compare::{is_entity_equal, is_entity_similar, is_user_equal};
pub use consolidate::consolidate_entities;
pub use copy::deep_copy_entity;
pub use entity::{EntityKind, EntityType, MessageEntity};
pub use formatted::{EntityError, FormattedText, utf16_len};
pub use user::User;
