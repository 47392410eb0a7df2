//! Entry points for converting HTML into formatted text.

use serde::{Deserialize, Serialize};
use tgfmt_entity::FormattedText;

use crate::resolver::TagResolver;
use crate::tokenizer::HTMLTokenizer;
use crate::warning::ParseWarning;

/// Formatted text together with the warnings raised while parsing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlParseResult {
    /// The plain text and its entities.
    pub formatted: FormattedText,
    /// Recoverable problems, in the order they were found.
    pub warnings: Vec<ParseWarning>,
}

/// Outcome of [`validate_html`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlValidation {
    /// True if parsing raised no warnings.
    pub is_valid: bool,
    /// What made the input invalid.
    pub warnings: Vec<ParseWarning>,
}

/// Parse `html` into plain text and entities.
///
/// Never fails: malformed markup is recovered from as described by
/// [`WarningKind`](crate::WarningKind). Use [`parse_html_with_warnings`] to
/// see what was recovered from.
///
/// ```
/// use tgfmt_entity::{EntityKind, MessageEntity};
///
/// let formatted = tgfmt_html::parse_html("<b>bold <i>italic</i></b>");
/// assert_eq!(formatted.text, "bold italic");
/// assert_eq!(
///     formatted.entities,
///     vec![
///         MessageEntity::new(EntityKind::Bold, 0, 11),
///         MessageEntity::new(EntityKind::Italic, 5, 6),
///     ]
/// );
/// ```
#[must_use]
pub fn parse_html(html: &str) -> FormattedText {
    parse_html_with_warnings(html).formatted
}

/// Parse `html`, also returning every warning raised.
#[must_use]
pub fn parse_html_with_warnings(html: &str) -> HtmlParseResult {
    let mut tokenizer = HTMLTokenizer::new(html, TagResolver::new());
    tokenizer.run();
    tokenizer.into_sink().finish()
}

/// Parse `html` and append the result to `prefix`.
///
/// The prefix's entities are kept unchanged and come first; the parsed
/// entities are shifted by the prefix's UTF-16 length.
#[must_use]
pub fn parse_html_with_prefix(html: &str, prefix: &FormattedText) -> FormattedText {
    let mut formatted = prefix.clone();
    formatted.append(parse_html(html));
    formatted
}

/// Check whether `html` parses without any warning.
#[must_use]
pub fn validate_html(html: &str) -> HtmlValidation {
    let warnings = parse_html_with_warnings(html).warnings;
    HtmlValidation {
        is_valid: warnings.is_empty(),
        warnings,
    }
}

/// Parse each HTML fragment and join the results, putting the plain
/// `separator` between them.
///
/// Fragments are parsed independently, so a tag left open in one fragment
/// ends with that fragment.
#[must_use]
pub fn concat_html<I, S>(parts: I, separator: &str) -> FormattedText
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    FormattedText::concat(
        parts.into_iter().map(|part| parse_html(part.as_ref())),
        separator,
    )
}
