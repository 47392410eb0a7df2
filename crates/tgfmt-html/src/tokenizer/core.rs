use strum_macros::Display;

use super::token::{Attribute, Token, TokenSink};

/// The tokenizer state machine.
///
/// The dialect has no comments, doctypes, or raw text elements, so the machine
/// only distinguishes text, tags with their attributes, and character
/// references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// Plain text between tags.
    Text,
    /// Just consumed `<`.
    TagOpen,
    /// Reading the name of a start tag.
    TagName,
    /// Reading the name of an end tag after `</`.
    CloseTagName,
    /// After the name of an end tag; everything up to `>` is ignored.
    AfterCloseTagName,
    /// Between attributes of a start tag.
    AttributeSpace,
    /// Reading an attribute name.
    AttributeName,
    /// After an attribute name, before `=` or the next attribute.
    AfterAttributeName,
    /// After `=`, before the value.
    AttributeValueStart,
    /// Reading a quoted or unquoted attribute value.
    AttributeValue,
    /// Inside `&...;`.
    CharacterReference,
}

/// Streaming tokenizer for Telegram-flavoured HTML.
///
/// Feeds every token to a [`TokenSink`] as soon as it is complete, so callers
/// never hold a token list unless they ask for one by using `Vec<Token>` as
/// the sink.
pub struct HTMLTokenizer<'a, S: TokenSink> {
    pub(super) state: TokenizerState,
    pub(super) return_state: TokenizerState,
    pub(super) input: &'a str,
    pub(super) current_pos: usize,
    pub(super) current_input_character: Option<char>,
    pub(super) at_eof: bool,
    // When true, the next iteration of the main loop will not consume a new character.
    // "Reconsume in the X state" sets this flag.
    pub(super) reconsume: bool,
    pub(super) sink: S,

    /// The start or end tag being built.
    pub(super) current_token: Option<Token>,
    /// The attribute being built, not yet attached to `current_token`.
    pub(super) current_attribute: Option<Attribute>,
    /// Quote character of the attribute value being read; `None` when unquoted.
    pub(super) quote: Option<char>,
    /// Byte offset of the `<` that opened the current tag.
    pub(super) tag_start: usize,

    /// Characters read after `&` in the current character reference.
    pub(super) temporary_buffer: String,
    /// Byte offset of the `&` that opened the current character reference.
    pub(super) reference_start: usize,
}

impl<'a, S: TokenSink> HTMLTokenizer<'a, S> {
    /// Create a tokenizer over `input` that reports to `sink`.
    /// The initial state is the text state.
    #[must_use]
    pub const fn new(input: &'a str, sink: S) -> Self {
        HTMLTokenizer {
            state: TokenizerState::Text,
            return_state: TokenizerState::Text,
            input,
            current_pos: 0,
            current_input_character: None,
            at_eof: false,
            reconsume: false,
            sink,
            current_token: None,
            current_attribute: None,
            quote: None,
            tag_start: 0,
            temporary_buffer: String::new(),
            reference_start: 0,
        }
    }

    /// Give back the sink, typically after [`HTMLTokenizer::run`].
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Text state.
    fn handle_text_state(&mut self) {
        match self.current_input_character {
            Some('<') => {
                self.tag_start = self.current_pos - 1;
                self.switch_to(TokenizerState::TagOpen);
            }
            Some('&') => {
                self.begin_character_reference(TokenizerState::Text);
            }
            None => {
                self.emit_eof_token();
            }
            Some(c) => {
                self.emit_character_token(c, self.current_pos - c.len_utf8());
            }
        }
    }

    /// Tag open state: decides whether the `<` starts a tag at all.
    fn handle_tag_open_state(&mut self) {
        match self.current_input_character {
            Some('/') => {
                self.current_token = Some(Token::new_end_tag());
                self.switch_to(TokenizerState::CloseTagName);
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_start_tag());
                self.reconsume_in(TokenizerState::TagName);
            }
            // A lone `<` at the end of input stays text.
            None => {
                self.log_stray_less_than_sign();
                self.emit_character_token('<', self.tag_start);
                self.emit_eof_token();
            }
            // Whitespace, `>`, digits and the like: the `<` was text after all.
            Some(_) => {
                self.log_stray_less_than_sign();
                self.emit_character_token('<', self.tag_start);
                self.reconsume_in(TokenizerState::Text);
            }
        }
    }

    /// Start tag name state.
    fn handle_tag_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) || c == '/' => {
                self.switch_to(TokenizerState::AttributeSpace);
            }
            Some('>') => {
                self.emit_current_token();
                self.switch_to(TokenizerState::Text);
            }
            None => {
                self.handle_eof_in_tag();
            }
            Some(c) => {
                self.append_to_tag_name(c);
            }
        }
    }

    /// End tag name state. Leading whitespace is skipped; whitespace after the
    /// name ends it.
    fn handle_close_tag_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {
                if !self.tag_name_is_empty() {
                    self.switch_to(TokenizerState::AfterCloseTagName);
                }
            }
            Some('>') => {
                self.emit_current_token();
                self.switch_to(TokenizerState::Text);
            }
            None => {
                self.handle_eof_in_tag();
            }
            Some(c) => {
                self.append_to_tag_name(c);
            }
        }
    }

    /// After an end tag name: skip to `>`.
    fn handle_after_close_tag_name_state(&mut self) {
        match self.current_input_character {
            Some('>') => {
                self.emit_current_token();
                self.switch_to(TokenizerState::Text);
            }
            None => {
                self.handle_eof_in_tag();
            }
            Some(_) => {}
        }
    }

    /// Between attributes. A `/` is skipped: no tag is self-closing.
    fn handle_attribute_space_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) || c == '/' => {}
            Some('>') => {
                self.emit_current_token();
                self.switch_to(TokenizerState::Text);
            }
            None => {
                self.handle_eof_in_tag();
            }
            Some(c) => {
                self.start_new_attribute();
                self.append_to_current_attribute_name(c);
                self.switch_to(TokenizerState::AttributeName);
            }
        }
    }

    /// Attribute name state.
    fn handle_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some('=') => {
                self.switch_to(TokenizerState::AttributeValueStart);
            }
            Some(c) if is_whitespace_char(c) => {
                self.switch_to(TokenizerState::AfterAttributeName);
            }
            Some('/') => {
                self.commit_current_attribute();
                self.switch_to(TokenizerState::AttributeSpace);
            }
            Some('>') => {
                self.emit_current_token();
                self.switch_to(TokenizerState::Text);
            }
            None => {
                self.handle_eof_in_tag();
            }
            Some(c) => {
                self.append_to_current_attribute_name(c);
            }
        }
    }

    /// After an attribute name: either `=` follows, or the attribute was
    /// boolean.
    fn handle_after_attribute_name_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {}
            Some('=') => {
                self.switch_to(TokenizerState::AttributeValueStart);
            }
            Some('/') => {
                self.commit_current_attribute();
                self.switch_to(TokenizerState::AttributeSpace);
            }
            Some('>') => {
                self.emit_current_token();
                self.switch_to(TokenizerState::Text);
            }
            None => {
                self.handle_eof_in_tag();
            }
            Some(_) => {
                self.commit_current_attribute();
                self.start_new_attribute();
                self.reconsume_in(TokenizerState::AttributeName);
            }
        }
    }

    /// After `=`: pick the quoting style of the value.
    fn handle_attribute_value_start_state(&mut self) {
        match self.current_input_character {
            Some(c) if is_whitespace_char(c) => {}
            Some(c @ ('"' | '\'')) => {
                self.quote = Some(c);
                self.switch_to(TokenizerState::AttributeValue);
            }
            Some('>') => {
                self.emit_current_token();
                self.switch_to(TokenizerState::Text);
            }
            None => {
                self.handle_eof_in_tag();
            }
            Some(_) => {
                self.quote = None;
                self.reconsume_in(TokenizerState::AttributeValue);
            }
        }
    }

    /// Attribute value state, quoted or unquoted depending on `quote`.
    fn handle_attribute_value_state(&mut self) {
        match (self.current_input_character, self.quote) {
            (Some(c), _) if self.ends_attribute_value(c) => {
                self.commit_current_attribute();
                self.switch_to(TokenizerState::AttributeSpace);
            }
            (Some('>'), None) => {
                self.emit_current_token();
                self.switch_to(TokenizerState::Text);
            }
            (Some('&'), _) => {
                self.begin_character_reference(TokenizerState::AttributeValue);
            }
            (None, _) => {
                self.handle_eof_in_tag();
            }
            (Some(c), _) => {
                self.append_to_current_attribute_value(c);
            }
        }
    }

    /// Character reference state. Only a `;` terminates the reference; any
    /// other character that cannot be part of a name keeps the reference as
    /// text and is processed again in the return state.
    fn handle_character_reference_state(&mut self) {
        match self.current_input_character {
            Some(c) if c.is_ascii_alphanumeric() || c == '#' => {
                self.temporary_buffer.push(c);
            }
            Some(';') => {
                self.finish_character_reference();
                self.switch_to(self.return_state);
            }
            Some(_) | None => {
                self.flush_code_points_consumed_as_character_reference();
                self.reconsume_in(self.return_state);
            }
        }
    }

    /// Tokenize the whole input, feeding the sink as it goes. The last token
    /// is always [`Token::EndOfFile`].
    pub fn run(&mut self) {
        loop {
            // Each state begins by consuming the next input character,
            // unless we're reconsuming from a previous state transition.
            if self.reconsume {
                self.reconsume = false;
            } else {
                self.current_input_character = self.consume();
            }

            if self.at_eof {
                break;
            }
            match self.state {
                TokenizerState::Text => self.handle_text_state(),
                TokenizerState::TagOpen => self.handle_tag_open_state(),
                TokenizerState::TagName => self.handle_tag_name_state(),
                TokenizerState::CloseTagName => self.handle_close_tag_name_state(),
                TokenizerState::AfterCloseTagName => self.handle_after_close_tag_name_state(),
                TokenizerState::AttributeSpace => self.handle_attribute_space_state(),
                TokenizerState::AttributeName => self.handle_attribute_name_state(),
                TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state(),
                TokenizerState::AttributeValueStart => self.handle_attribute_value_start_state(),
                TokenizerState::AttributeValue => self.handle_attribute_value_state(),
                TokenizerState::CharacterReference => self.handle_character_reference_state(),
            }
        }
    }
}

/// Whitespace as far as tag syntax is concerned.
pub(super) const fn is_whitespace_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}
