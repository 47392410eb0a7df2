use core::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::user::User;

/// The kind of a [`MessageEntity`] without its payload.
///
/// Displays and parses as the wire name used by the Bot API, e.g.
/// `"expandable_blockquote"`. The declaration order is the tie-break order
/// used when sorting entities that share a range.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    /// `@username`
    Mention,
    /// `#hashtag`
    Hashtag,
    /// `$USD`
    Cashtag,
    /// `/start@bot`
    BotCommand,
    /// `https://telegram.org`
    Url,
    /// `do-not-reply@telegram.org`
    Email,
    /// `+1-212-555-0123`
    PhoneNumber,
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// Underlined text.
    Underline,
    /// Strikethrough text.
    Strikethrough,
    /// Spoiler message.
    Spoiler,
    /// Block quotation.
    Blockquote,
    /// Collapsed-by-default block quotation.
    ExpandableBlockquote,
    /// Monowidth string.
    Code,
    /// Monowidth block.
    Pre,
    /// Clickable text URL.
    TextLink,
    /// Mention of a user without a username.
    TextMention,
    /// Inline custom emoji sticker.
    CustomEmoji,
}

/// An entity kind together with the payload that kind requires.
///
/// Serialized with an internal `"type"` tag so that, flattened into
/// [`MessageEntity`], the JSON matches the Bot API shape.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntityKind {
    /// `@username`
    Mention,
    /// `#hashtag`
    Hashtag,
    /// `$USD`
    Cashtag,
    /// `/start@bot`
    BotCommand,
    /// `https://telegram.org`
    Url,
    /// `do-not-reply@telegram.org`
    Email,
    /// `+1-212-555-0123`
    PhoneNumber,
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// Underlined text.
    Underline,
    /// Strikethrough text.
    Strikethrough,
    /// Spoiler message.
    Spoiler,
    /// Block quotation.
    Blockquote,
    /// Collapsed-by-default block quotation.
    ExpandableBlockquote,
    /// Monowidth string.
    Code,
    /// Monowidth block.
    Pre {
        /// The programming language of the block, if known.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    /// Clickable text URL.
    TextLink {
        /// URL opened when the text is tapped.
        url: String,
    },
    /// Mention of a user without a username.
    TextMention {
        /// The mentioned user.
        user: User,
    },
    /// Inline custom emoji sticker.
    CustomEmoji {
        /// Identifier of the custom emoji.
        custom_emoji_id: String,
    },
}

impl EntityKind {
    /// The payload-free discriminant of this kind.
    #[must_use]
    pub const fn entity_type(&self) -> EntityType {
        match self {
            Self::Mention => EntityType::Mention,
            Self::Hashtag => EntityType::Hashtag,
            Self::Cashtag => EntityType::Cashtag,
            Self::BotCommand => EntityType::BotCommand,
            Self::Url => EntityType::Url,
            Self::Email => EntityType::Email,
            Self::PhoneNumber => EntityType::PhoneNumber,
            Self::Bold => EntityType::Bold,
            Self::Italic => EntityType::Italic,
            Self::Underline => EntityType::Underline,
            Self::Strikethrough => EntityType::Strikethrough,
            Self::Spoiler => EntityType::Spoiler,
            Self::Blockquote => EntityType::Blockquote,
            Self::ExpandableBlockquote => EntityType::ExpandableBlockquote,
            Self::Code => EntityType::Code,
            Self::Pre { .. } => EntityType::Pre,
            Self::TextLink { .. } => EntityType::TextLink,
            Self::TextMention { .. } => EntityType::TextMention,
            Self::CustomEmoji { .. } => EntityType::CustomEmoji,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entity_type())?;
        match self {
            Self::Pre {
                language: Some(language),
            } => write!(f, "({language})"),
            Self::TextLink { url } => write!(f, "({url})"),
            Self::TextMention { user } => write!(f, "({})", user.id),
            Self::CustomEmoji { custom_emoji_id } => write!(f, "({custom_emoji_id})"),
            _ => Ok(()),
        }
    }
}

/// A formatted range of a message's text.
///
/// `offset` and `length` are measured in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageEntity {
    /// What the range is formatted as, with its payload.
    #[serde(flatten)]
    pub kind: EntityKind,
    /// Start of the range in UTF-16 code units.
    pub offset: usize,
    /// Length of the range in UTF-16 code units.
    pub length: usize,
}

impl MessageEntity {
    /// Create an entity covering `length` code units starting at `offset`.
    #[must_use]
    pub const fn new(kind: EntityKind, offset: usize, length: usize) -> Self {
        Self {
            kind,
            offset,
            length,
        }
    }

    /// The payload-free kind of this entity.
    #[must_use]
    pub const fn entity_type(&self) -> EntityType {
        self.kind.entity_type()
    }

    /// One past the last code unit covered by this entity.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }

    /// The same entity moved `by` code units to the right.
    #[must_use]
    pub fn shifted(mut self, by: usize) -> Self {
        self.offset += by;
        self
    }
}

impl fmt::Display for MessageEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}..{})", self.kind, self.offset, self.end())
    }
}
