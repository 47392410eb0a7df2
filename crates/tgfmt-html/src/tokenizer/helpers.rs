//! Helper functions for the tokenizer.
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Input/character handling ("Consume the next input character")
//! - Tag and attribute building, with duplicate detection
//! - Token emission and warning reporting

use tracing::trace;

use super::core::{HTMLTokenizer, TokenizerState, is_whitespace_char};
use super::token::{Attribute, Token, TokenSink};
use crate::warning::{ParseWarning, WarningKind};

// =============================================================================
// State Transition Helpers
// =============================================================================

impl<S: TokenSink> HTMLTokenizer<'_, S> {
    /// "Switch to the X state"
    ///
    /// Transitions to a new state. The next character will be consumed on the
    /// next iteration of the main loop.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// Transitions to a new state without consuming the current character.
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }

    /// Remember where a character reference starts and which state it returns to.
    pub(super) fn begin_character_reference(&mut self, return_state: TokenizerState) {
        self.return_state = return_state;
        self.reference_start = self.current_pos - 1;
        self.temporary_buffer.clear();
        self.switch_to(TokenizerState::CharacterReference);
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl<S: TokenSink> HTMLTokenizer<'_, S> {
    /// "Consume the next input character"
    ///
    /// Returns the character at the current position and advances the position.
    /// Returns None if we've reached the end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// True if `c` ends the attribute value being read: its closing quote, or
    /// whitespace for an unquoted value.
    pub(super) fn ends_attribute_value(&self, c: char) -> bool {
        match self.quote {
            Some(quote) => c == quote,
            None => is_whitespace_char(c),
        }
    }
}

// =============================================================================
// Tag and Attribute Helpers
// =============================================================================

impl<S: TokenSink> HTMLTokenizer<'_, S> {
    /// Append to the current tag's name. Names are ASCII case-insensitive and
    /// stored lowercased.
    pub(super) fn append_to_tag_name(&mut self, c: char) {
        if let Some(Token::StartTag { name, .. } | Token::EndTag { name }) = &mut self.current_token
        {
            name.push(c.to_ascii_lowercase());
        }
    }

    /// True while no character of the current tag's name has been read.
    pub(super) fn tag_name_is_empty(&self) -> bool {
        self.current_token
            .as_ref()
            .and_then(Token::tag_name)
            .is_none_or(str::is_empty)
    }

    /// Start a new attribute with an empty name and value.
    pub(super) fn start_new_attribute(&mut self) {
        self.current_attribute = Some(Attribute::new(String::new(), String::new()));
    }

    /// Append to the current attribute's name, lowercased.
    pub(super) fn append_to_current_attribute_name(&mut self, c: char) {
        if let Some(attribute) = self.current_attribute.as_mut() {
            attribute.name.push(c.to_ascii_lowercase());
        }
    }

    /// Append to the current attribute's value, verbatim.
    pub(super) fn append_to_current_attribute_value(&mut self, c: char) {
        if let Some(attribute) = self.current_attribute.as_mut() {
            attribute.value.push(c);
        }
    }

    /// Attach the current attribute to the current start tag.
    ///
    /// If the tag already has an attribute with the same name, the new one is
    /// dropped and reported: the first occurrence wins.
    pub(super) fn commit_current_attribute(&mut self) {
        let Some(attribute) = self.current_attribute.take() else {
            return;
        };
        let Some(Token::StartTag { name, attributes }) = &mut self.current_token else {
            return;
        };
        if attributes.iter().any(|existing| existing.name == attribute.name) {
            let message = format!(
                "duplicate attribute {:?} on <{name}>; keeping the first value",
                attribute.name
            );
            self.sink.parse_warning(ParseWarning::new(
                WarningKind::DuplicateAttribute,
                self.tag_start,
                message,
            ));
        } else {
            attributes.push(attribute);
        }
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl<S: TokenSink> HTMLTokenizer<'_, S> {
    /// Emit the current tag token once its `>` has been read.
    ///
    /// A pending attribute is attached first. An end tag without a name
    /// (`</>`) is dropped and reported.
    pub(super) fn emit_current_token(&mut self) {
        self.commit_current_attribute();
        let Some(token) = self.current_token.take() else {
            return;
        };
        if matches!(&token, Token::EndTag { name } if name.is_empty()) {
            self.sink.parse_warning(ParseWarning::new(
                WarningKind::MalformedTag,
                self.tag_start,
                "closing tag without a name",
            ));
            return;
        }
        trace!(%token, position = self.tag_start, "emit tag");
        self.sink.process_token(token, self.tag_start);
    }

    /// Emit a character token that starts at byte `position` of the input.
    pub(super) fn emit_character_token(&mut self, c: char, position: usize) {
        self.sink.process_token(Token::new_character(c), position);
    }

    /// "Emit an end-of-file token."
    pub(super) fn emit_eof_token(&mut self) {
        self.sink.process_token(Token::EndOfFile, self.input.len());
        self.at_eof = true;
    }

    /// The input ended inside a tag. The incomplete tag is discarded, never
    /// turned into text.
    pub(super) fn handle_eof_in_tag(&mut self) {
        let fragment = &self.input[self.tag_start..];
        let message = format!("unterminated tag {fragment:?} discarded at end of input");
        self.sink.parse_warning(ParseWarning::new(
            WarningKind::MalformedTag,
            self.tag_start,
            message,
        ));
        self.current_token = None;
        self.current_attribute = None;
        self.emit_eof_token();
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl<S: TokenSink> HTMLTokenizer<'_, S> {
    /// Report a `<` that does not start a tag. It is kept as text.
    pub(super) fn log_stray_less_than_sign(&mut self) {
        self.sink.parse_warning(ParseWarning::new(
            WarningKind::MalformedTag,
            self.tag_start,
            "'<' does not start a tag; kept as text (write &lt; instead)",
        ));
    }
}
