//! Character reference decoding for the tokenizer.
//!
//! Supports `&name;` from the named table, `&#NNN;` decimal, and `&#xHHH;` or
//! `&#XHHH;` hexadecimal references. Only terminated references are decoded;
//! the tokenizer keeps anything else as literal text.

use tracing::trace;

use super::core::{HTMLTokenizer, TokenizerState};
use super::named_character_references::lookup_entity;
use super::token::TokenSink;
use crate::warning::{ParseWarning, WarningKind};

/// Decode the text between `&` and `;`.
///
/// # Errors
///
/// Returns [`WarningKind::UnknownCharacterReference`] for a name missing from
/// the table, and [`WarningKind::MalformedCharacterReference`] for an empty
/// reference or a numeric one that is not a valid scalar value (zero,
/// surrogates, above U+10FFFF, or not a number at all).
pub fn decode_character_reference(name: &str) -> Result<String, WarningKind> {
    if let Some(number) = name.strip_prefix('#') {
        let code_point = match number.strip_prefix(['x', 'X']) {
            Some(hex) => decode_numeric(hex, 16),
            None => decode_numeric(number, 10),
        };
        return code_point
            .map(String::from)
            .ok_or(WarningKind::MalformedCharacterReference);
    }
    if name.is_empty() {
        return Err(WarningKind::MalformedCharacterReference);
    }
    lookup_entity(name)
        .map(str::to_string)
        .ok_or(WarningKind::UnknownCharacterReference)
}

fn decode_numeric(digits: &str, radix: u32) -> Option<char> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let code_point = u32::from_str_radix(digits, radix).ok()?;
    if code_point == 0 {
        return None;
    }
    char::from_u32(code_point)
}

impl<S: TokenSink> HTMLTokenizer<'_, S> {
    /// True if the reference being read sits inside an attribute value.
    pub(super) fn is_consumed_as_part_of_attribute(&self) -> bool {
        self.return_state == TokenizerState::AttributeValue
    }

    /// Resolve the reference in the temporary buffer after its `;`.
    ///
    /// A decoded reference is appended to the text or the attribute value. A
    /// reference that does not decode is kept as the literal `&name;` and
    /// reported.
    pub(super) fn finish_character_reference(&mut self) {
        match decode_character_reference(&self.temporary_buffer) {
            Ok(decoded) => {
                trace!(reference = %self.temporary_buffer, "decoded character reference");
                self.append_consumed_text(&decoded);
            }
            Err(kind) => {
                let literal = format!("&{};", self.temporary_buffer);
                let message = match kind {
                    WarningKind::UnknownCharacterReference => {
                        format!("unknown character reference {literal}")
                    }
                    _ => format!("invalid character reference {literal}"),
                };
                self.sink.parse_warning(ParseWarning::new(
                    kind,
                    self.reference_start,
                    message,
                ));
                self.append_consumed_text(&literal);
            }
        }
        self.temporary_buffer.clear();
    }

    /// Keep an unterminated reference as the literal `&` plus whatever was
    /// read after it. A bare `&` is not reported.
    pub(super) fn flush_code_points_consumed_as_character_reference(&mut self) {
        if !self.temporary_buffer.is_empty() {
            self.sink.parse_warning(ParseWarning::new(
                WarningKind::MalformedCharacterReference,
                self.reference_start,
                format!("unterminated character reference &{}", self.temporary_buffer),
            ));
        }
        let literal = format!("&{}", self.temporary_buffer);
        self.append_consumed_text(&literal);
        self.temporary_buffer.clear();
    }

    /// Route reference output to the attribute value or the text, whichever
    /// the reference was read from.
    fn append_consumed_text(&mut self, text: &str) {
        if self.is_consumed_as_part_of_attribute() {
            if let Some(attribute) = self.current_attribute.as_mut() {
                attribute.value.push_str(text);
            }
        } else {
            for c in text.chars() {
                self.emit_character_token(c, self.reference_start);
            }
        }
    }
}
