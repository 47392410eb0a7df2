//! Parse warnings.
//!
//! The parser never fails. Every condition it has to recover from is recorded
//! as a [`ParseWarning`] instead, in the order it was found, so callers can
//! surface diagnostics or reject input without affecting the parse result.

use core::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display};

/// The condition a [`ParseWarning`] reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    /// A tag that maps to no entity kind. Its content is kept as plain text.
    UnsupportedTag,
    /// A closing tag with no open tag to close. It is dropped.
    OrphanedClosingTag,
    /// A tag still open at the end of input. It is closed at the end of the text.
    UnclosedTag,
    /// Tag syntax that could not be completed. An incomplete tag is discarded;
    /// a `<` that starts no tag is kept as text.
    MalformedTag,
    /// A repeated attribute on one tag. The first occurrence wins.
    DuplicateAttribute,
    /// An unterminated or numerically invalid character reference, kept as text.
    MalformedCharacterReference,
    /// A well-formed reference to an unknown name, kept as text.
    UnknownCharacterReference,
}

/// A recoverable problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParseWarning {
    /// What went wrong.
    pub kind: WarningKind,
    /// Byte offset in the input where the offending construct starts.
    pub position: usize,
    /// Human-readable detail.
    pub message: String,
}

impl ParseWarning {
    /// Create a warning of `kind` at byte `position`.
    #[must_use]
    pub fn new(kind: WarningKind, position: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            position,
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}: {}", self.kind, self.position, self.message)
    }
}
