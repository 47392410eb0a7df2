//! Tokenizer for the Telegram HTML dialect.
//!
//! A character-at-a-time state machine that recognises start tags with
//! attributes, end tags, and character references. Everything else is text.

/// Character reference decoding.
pub mod character_reference;
/// Tokenizer state machine implementation.
pub mod core;
/// Helper methods for tokenizer state transitions.
pub mod helpers;
/// Named character reference lookup table.
pub mod named_character_references;
/// Token types and the sink they are delivered to.
pub mod token;

pub use self::core::{HTMLTokenizer, TokenizerState};
pub use token::{Attribute, Token, TokenSink, attribute_value};
