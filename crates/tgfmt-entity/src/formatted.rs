use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entity::{EntityType, MessageEntity};

/// The length of a string as Telegram counts it: in UTF-16 code units, so a
/// character outside the Basic Multilingual Plane counts as two.
#[must_use]
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// A range problem found by [`FormattedText::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    /// The entity covers no text.
    #[error("entity #{index} ({entity_type}) at offset {offset} has zero length")]
    EmptyRange {
        /// Position of the entity in the list.
        index: usize,
        /// Kind of the offending entity.
        entity_type: EntityType,
        /// Where the empty range starts.
        offset: usize,
    },
    /// The entity extends past the end of the text.
    #[error("entity #{index} ({entity_type}) ends at {end}, past the text length {text_len}")]
    OutOfBounds {
        /// Position of the entity in the list.
        index: usize,
        /// Kind of the offending entity.
        entity_type: EntityType,
        /// One past the last code unit the entity covers.
        end: usize,
        /// UTF-16 length of the text.
        text_len: usize,
    },
}

/// Plain text together with the entities that format it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedText {
    /// The plain text.
    pub text: String,
    /// Entities over `text`, in UTF-16 code units.
    pub entities: Vec<MessageEntity>,
}

impl FormattedText {
    /// Pair text with its entities.
    #[must_use]
    pub fn new(text: impl Into<String>, entities: Vec<MessageEntity>) -> Self {
        Self {
            text: text.into(),
            entities,
        }
    }

    /// Text without any formatting.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    /// Length of the text in UTF-16 code units.
    #[must_use]
    pub fn utf16_len(&self) -> usize {
        utf16_len(&self.text)
    }

    /// True if there is neither text nor entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.entities.is_empty()
    }

    /// Check that every entity is non-empty and lies within the text.
    ///
    /// # Errors
    ///
    /// Returns the first [`EntityError`] found, in list order.
    pub fn validate(&self) -> Result<(), EntityError> {
        let text_len = self.utf16_len();
        for (index, entity) in self.entities.iter().enumerate() {
            if entity.length == 0 {
                return Err(EntityError::EmptyRange {
                    index,
                    entity_type: entity.entity_type(),
                    offset: entity.offset,
                });
            }
            if entity.end() > text_len {
                return Err(EntityError::OutOfBounds {
                    index,
                    entity_type: entity.entity_type(),
                    end: entity.end(),
                    text_len,
                });
            }
        }
        Ok(())
    }

    /// Append `other` after this text, moving its entities past the end of
    /// the current text. Existing entities are left untouched.
    pub fn append(&mut self, other: Self) {
        let shift = self.utf16_len();
        self.text.push_str(&other.text);
        self.entities
            .extend(other.entities.into_iter().map(|entity| entity.shifted(shift)));
    }

    /// Append unformatted text.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Join `parts` in order, putting the plain `separator` between them.
    #[must_use]
    pub fn concat<I>(parts: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut joined = Self::default();
        for (index, part) in parts.into_iter().enumerate() {
            if index > 0 {
                joined.push_str(separator);
            }
            joined.append(part);
        }
        joined
    }
}

impl From<&str> for FormattedText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for FormattedText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}
