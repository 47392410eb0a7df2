//! Telegram-flavoured HTML to plain text and message entities.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer** ([`HTMLTokenizer`]): a streaming state machine for tags,
//!   attributes, and character references
//! - **Tag resolver** ([`TagResolver`]): tag aliases, attribute-dependent
//!   kinds, and the stack of open tags
//! - **Overlap repair** ([`resolver::repair_overlap`]) for tags that close out
//!   of nesting order
//! - **Diagnostics** ([`ParseWarning`]) for everything the parser recovers from
//!
//! Entities are consolidated with [`tgfmt_entity::consolidate_entities`]
//! before they are returned.
//!
//! # Not Supported
//!
//! - Comments, doctypes, and raw text elements
//! - Self-closing tags (`<br/>` is read as an unsupported `br`)
//! - Rendering entities back into HTML

/// Parsing entry points.
pub mod api;
/// Token stream to text and entities.
pub mod resolver;
/// Tokenizer for tags, attributes, and character references.
pub mod tokenizer;
/// Recoverable parse problems.
pub mod warning;

pub use api::{
    HtmlParseResult, HtmlValidation, concat_html, parse_html, parse_html_with_prefix,
    parse_html_with_warnings, validate_html,
};
pub use resolver::TagResolver;
pub use tokenizer::{Attribute, HTMLTokenizer, Token, TokenSink};
pub use warning::{ParseWarning, WarningKind};
