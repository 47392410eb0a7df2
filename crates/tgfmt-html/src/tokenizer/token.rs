use core::fmt;

use crate::warning::ParseWarning;

/// An attribute on a start tag.
///
/// Names are lowercased by the tokenizer. Values are kept verbatim apart from
/// character reference decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Lowercased attribute name.
    pub name: String,
    /// Attribute value; empty for a boolean attribute.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// Look up the value of attribute `name` in `attributes`.
#[must_use]
pub fn attribute_value<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|attr| attr.name == name)
        .map(|attr| attr.value.as_str())
}

/// The tokens the tokenizer hands to a [`TokenSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<name attr=value ...>`
    StartTag {
        /// Lowercased tag name.
        name: String,
        /// Attributes in source order, without duplicates.
        attributes: Vec<Attribute>,
    },

    /// `</name>`
    EndTag {
        /// Lowercased tag name.
        name: String,
    },

    /// One character of text, with character references already decoded.
    Character {
        /// The character.
        data: char,
    },

    /// End-of-file token signals the end of input.
    EndOfFile,
}

impl Token {
    /// Create a start tag token with an empty name and no attributes.
    #[must_use]
    pub const fn new_start_tag() -> Self {
        Self::StartTag {
            name: String::new(),
            attributes: Vec::new(),
        }
    }

    /// Create an end tag token with an empty name.
    #[must_use]
    pub const fn new_end_tag() -> Self {
        Self::EndTag {
            name: String::new(),
        }
    }

    /// Create a character token with the given character.
    #[must_use]
    pub const fn new_character(c: char) -> Self {
        Self::Character { data: c }
    }

    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }

    /// The tag name of a start or end tag token.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::StartTag { name, .. } | Self::EndTag { name } => Some(name),
            Self::Character { .. } | Self::EndOfFile => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag { name, attributes } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                }
                write!(f, ">")
            }
            Self::EndTag { name } => write!(f, "</{name}>"),
            Self::Character { data } => match data {
                '\n' => write!(f, "Character(\\n)"),
                '\t' => write!(f, "Character(\\t)"),
                ' ' => write!(f, "Character(SPACE)"),
                c => write!(f, "Character({c})"),
            },
            Self::EndOfFile => write!(f, "EOF"),
        }
    }
}

/// Receiver of the tokenizer's output.
///
/// Tokens arrive in input order together with the byte offset at which each
/// one starts. The tokenizer's own recoverable problems are reported through
/// [`TokenSink::parse_warning`].
pub trait TokenSink {
    /// Handle one token starting at byte `position` of the input.
    fn process_token(&mut self, token: Token, position: usize);

    /// Handle a tokenizer warning. Ignored by default.
    fn parse_warning(&mut self, _warning: ParseWarning) {}
}

/// Collects tokens for inspection, dropping positions and warnings.
impl TokenSink for Vec<Token> {
    fn process_token(&mut self, token: Token, _position: usize) {
        self.push(token);
    }
}
