use tgfmt_entity::{EntityKind, FormattedText, MessageEntity, consolidate_entities};
use tracing::{debug, trace};

use super::frame::{Frame, FrameRole};
use super::overlap::repair_overlap;
use super::tags::{code_language, resolve_tag, tag_group};
use crate::api::HtmlParseResult;
use crate::tokenizer::{Attribute, Token, TokenSink};
use crate::warning::{ParseWarning, WarningKind};

/// Builds the output text and entities from the tokenizer's tokens.
///
/// Keeps a stack of open tags. Characters go straight to the text; a closing
/// tag turns the frame it matches into a draft entity. At the end of input
/// the drafts are consolidated into the final entity list.
#[derive(Debug, Default)]
pub struct TagResolver {
    text: String,
    /// Length of `text` in UTF-16 code units.
    text_len: usize,
    stack: Vec<Frame>,
    drafts: Vec<MessageEntity>,
    warnings: Vec<ParseWarning>,
}

impl TagResolver {
    /// Create a resolver with empty output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the text produced so far, in UTF-16 code units.
    #[must_use]
    pub const fn current_offset(&self) -> usize {
        self.text_len
    }

    /// Tags that are open right now, outermost first.
    #[must_use]
    pub fn open_frames(&self) -> &[Frame] {
        &self.stack
    }

    /// Close what is still open and hand back the text, the consolidated
    /// entities, and every warning in the order it was found.
    #[must_use]
    pub fn finish(mut self) -> HtmlParseResult {
        self.close_unclosed_frames();
        let entities = consolidate_entities(&self.drafts);
        HtmlParseResult {
            formatted: FormattedText::new(self.text, entities),
            warnings: self.warnings,
        }
    }

    fn push_char(&mut self, c: char) {
        self.text.push(c);
        self.text_len += c.len_utf16();
    }

    fn warn(&mut self, kind: WarningKind, position: usize, message: String) {
        self.warnings.push(ParseWarning::new(kind, position, message));
    }

    fn open_tag(&mut self, name: String, attributes: &[Attribute], position: usize) {
        if name == "code" && self.capture_pre_language(attributes) {
            self.stack.push(Frame {
                tag_name: name,
                group: tag_group("code"),
                start: self.text_len,
                position,
                role: FrameRole::Suppressed,
            });
            return;
        }

        let group = tag_group(&name);
        let role = if let Some(kind) = resolve_tag(&name, attributes) {
            FrameRole::Live(kind)
        } else {
            self.warn(
                WarningKind::UnsupportedTag,
                position,
                format!("unsupported tag <{name}> ignored; its content is kept as text"),
            );
            FrameRole::Inert
        };
        trace!(tag = %name, ?role, offset = self.text_len, "open");
        self.stack.push(Frame {
            tag_name: name,
            group: if matches!(role, FrameRole::Inert) { None } else { group },
            start: self.text_len,
            position,
            role,
        });
    }

    /// `<code class="language-X">` directly inside `<pre>` gives the `pre`
    /// its language. Returns true if the `code` was absorbed that way.
    fn capture_pre_language(&mut self, attributes: &[Attribute]) -> bool {
        let Some(language) = code_language(attributes) else {
            return false;
        };
        let Some(Frame {
            role: FrameRole::Live(EntityKind::Pre { language: pre_language }),
            ..
        }) = self.stack.last_mut()
        else {
            return false;
        };
        if !language.is_empty() {
            *pre_language = Some(language.to_string());
        }
        true
    }

    /// Find the frame a closing tag closes: the innermost frame opened by the
    /// same tag name, or failing that, the innermost frame of the same alias
    /// group.
    fn find_frame(&self, name: &str) -> Option<usize> {
        self.stack
            .iter()
            .rposition(|frame| frame.tag_name == name)
            .or_else(|| {
                let group = tag_group(name)?;
                self.stack
                    .iter()
                    .rposition(|frame| frame.group == Some(group))
            })
    }

    fn close_tag(&mut self, name: &str, position: usize) {
        let Some(index) = self.find_frame(name) else {
            let kind = if tag_group(name).is_some() {
                WarningKind::OrphanedClosingTag
            } else {
                WarningKind::UnsupportedTag
            };
            self.warn(kind, position, format!("closing tag </{name}> matches no open tag; dropped"));
            return;
        };

        if index + 1 == self.stack.len() {
            if let Some(frame) = self.stack.pop() {
                trace!(tag = %frame.tag_name, offset = self.text_len, "close");
                self.drafts.extend(frame.close(self.text_len));
            }
        } else {
            repair_overlap(&mut self.stack, index, self.text_len, &mut self.drafts);
        }
    }

    /// Close every frame left open at the end of input, innermost first.
    fn close_unclosed_frames(&mut self) {
        while let Some(frame) = self.stack.pop() {
            if !frame.is_inert() {
                debug!(tag = %frame.tag_name, offset = self.text_len, "auto-closing tag at end of input");
                self.warn(
                    WarningKind::UnclosedTag,
                    frame.position,
                    format!("<{}> is never closed; it ends with the text", frame.tag_name),
                );
            }
            self.drafts.extend(frame.close(self.text_len));
        }
    }
}

impl TokenSink for TagResolver {
    fn process_token(&mut self, token: Token, position: usize) {
        match token {
            Token::Character { data } => self.push_char(data),
            Token::StartTag { name, attributes } => self.open_tag(name, &attributes, position),
            Token::EndTag { name } => self.close_tag(&name, position),
            Token::EndOfFile => {}
        }
    }

    fn parse_warning(&mut self, warning: ParseWarning) {
        self.warnings.push(warning);
    }
}
