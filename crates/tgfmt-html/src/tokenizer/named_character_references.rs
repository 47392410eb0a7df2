//! Named character reference lookup table.
//!
//! Covers the references that show up in hand-written and bot-generated
//! message markup: the markup escapes, typographic punctuation, common
//! symbols, arrows, Greek letters, and Latin-1 accented letters. Names are
//! case-sensitive (`&Delta;` and `&delta;` differ) and are stored without the
//! surrounding `&` and `;`.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Maps reference names to their replacement text.
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Markup escapes
        ("amp", "&"),
        ("lt", "<"),
        ("gt", ">"),
        ("quot", "\""),
        ("apos", "'"),
        // Spaces and invisible formatting
        ("nbsp", "\u{00A0}"),
        ("ensp", "\u{2002}"),
        ("emsp", "\u{2003}"),
        ("thinsp", "\u{2009}"),
        ("shy", "\u{00AD}"),
        ("zwnj", "\u{200C}"),
        ("zwj", "\u{200D}"),
        ("lrm", "\u{200E}"),
        ("rlm", "\u{200F}"),
        // Punctuation
        ("mdash", "\u{2014}"),  // —
        ("ndash", "\u{2013}"),  // –
        ("hellip", "\u{2026}"), // …
        ("bull", "\u{2022}"),   // •
        ("middot", "\u{00B7}"), // ·
        ("lsquo", "\u{2018}"),  // ‘
        ("rsquo", "\u{2019}"),  // ’
        ("sbquo", "\u{201A}"),  // ‚
        ("ldquo", "\u{201C}"),  // “
        ("rdquo", "\u{201D}"),  // ”
        ("bdquo", "\u{201E}"),  // „
        ("laquo", "\u{00AB}"),  // «
        ("raquo", "\u{00BB}"),  // »
        ("lsaquo", "\u{2039}"), // ‹
        ("rsaquo", "\u{203A}"), // ›
        ("iexcl", "\u{00A1}"),  // ¡
        ("iquest", "\u{00BF}"), // ¿
        ("dagger", "\u{2020}"), // †
        ("Dagger", "\u{2021}"), // ‡
        ("sect", "\u{00A7}"),   // §
        ("para", "\u{00B6}"),   // ¶
        ("prime", "\u{2032}"),  // ′
        ("Prime", "\u{2033}"),  // ″
        // Symbols
        ("copy", "\u{00A9}"),   // ©
        ("reg", "\u{00AE}"),    // ®
        ("trade", "\u{2122}"),  // ™
        ("deg", "\u{00B0}"),    // °
        ("plusmn", "\u{00B1}"), // ±
        ("times", "\u{00D7}"),  // ×
        ("divide", "\u{00F7}"), // ÷
        ("minus", "\u{2212}"),  // −
        ("micro", "\u{00B5}"),  // µ
        ("permil", "\u{2030}"), // ‰
        ("infin", "\u{221E}"),  // ∞
        ("ne", "\u{2260}"),     // ≠
        ("le", "\u{2264}"),     // ≤
        ("ge", "\u{2265}"),     // ≥
        ("asymp", "\u{2248}"),  // ≈
        ("sum", "\u{2211}"),    // ∑
        ("frac12", "\u{00BD}"), // ½
        ("frac14", "\u{00BC}"), // ¼
        ("frac34", "\u{00BE}"), // ¾
        ("sup1", "\u{00B9}"),   // ¹
        ("sup2", "\u{00B2}"),   // ²
        ("sup3", "\u{00B3}"),   // ³
        ("hearts", "\u{2665}"), // ♥
        ("spades", "\u{2660}"), // ♠
        ("clubs", "\u{2663}"),  // ♣
        ("diams", "\u{2666}"),  // ♦
        // Currency
        ("euro", "\u{20AC}"),  // €
        ("pound", "\u{00A3}"), // £
        ("yen", "\u{00A5}"),   // ¥
        ("cent", "\u{00A2}"),  // ¢
        ("curren", "\u{00A4}"), // ¤
        // Arrows
        ("larr", "\u{2190}"), // ←
        ("uarr", "\u{2191}"), // ↑
        ("rarr", "\u{2192}"), // →
        ("darr", "\u{2193}"), // ↓
        ("harr", "\u{2194}"), // ↔
        ("lArr", "\u{21D0}"), // ⇐
        ("rArr", "\u{21D2}"), // ⇒
        ("hArr", "\u{21D4}"), // ⇔
        // Greek letters
        ("Alpha", "\u{0391}"),
        ("Beta", "\u{0392}"),
        ("Gamma", "\u{0393}"),
        ("Delta", "\u{0394}"),
        ("Theta", "\u{0398}"),
        ("Lambda", "\u{039B}"),
        ("Pi", "\u{03A0}"),
        ("Sigma", "\u{03A3}"),
        ("Phi", "\u{03A6}"),
        ("Omega", "\u{03A9}"),
        ("alpha", "\u{03B1}"),
        ("beta", "\u{03B2}"),
        ("gamma", "\u{03B3}"),
        ("delta", "\u{03B4}"),
        ("epsilon", "\u{03B5}"),
        ("theta", "\u{03B8}"),
        ("lambda", "\u{03BB}"),
        ("mu", "\u{03BC}"),
        ("pi", "\u{03C0}"),
        ("sigma", "\u{03C3}"),
        ("tau", "\u{03C4}"),
        ("phi", "\u{03C6}"),
        ("omega", "\u{03C9}"),
        // Latin-1 letters
        ("Agrave", "\u{00C0}"),
        ("Aacute", "\u{00C1}"),
        ("Auml", "\u{00C4}"),
        ("Aring", "\u{00C5}"),
        ("AElig", "\u{00C6}"),
        ("Ccedil", "\u{00C7}"),
        ("Eacute", "\u{00C9}"),
        ("Ntilde", "\u{00D1}"),
        ("Ouml", "\u{00D6}"),
        ("Oslash", "\u{00D8}"),
        ("Uuml", "\u{00DC}"),
        ("szlig", "\u{00DF}"),
        ("agrave", "\u{00E0}"),
        ("aacute", "\u{00E1}"),
        ("acirc", "\u{00E2}"),
        ("atilde", "\u{00E3}"),
        ("auml", "\u{00E4}"),
        ("aring", "\u{00E5}"),
        ("aelig", "\u{00E6}"),
        ("ccedil", "\u{00E7}"),
        ("egrave", "\u{00E8}"),
        ("eacute", "\u{00E9}"),
        ("ecirc", "\u{00EA}"),
        ("euml", "\u{00EB}"),
        ("iacute", "\u{00ED}"),
        ("iuml", "\u{00EF}"),
        ("ntilde", "\u{00F1}"),
        ("oacute", "\u{00F3}"),
        ("ocirc", "\u{00F4}"),
        ("ouml", "\u{00F6}"),
        ("oslash", "\u{00F8}"),
        ("uacute", "\u{00FA}"),
        ("uuml", "\u{00FC}"),
        ("yuml", "\u{00FF}"),
    ])
});

/// Look up a named character reference.
///
/// `name` is the text between `&` and `;`. Returns `None` for unknown names.
///
/// ```
/// use tgfmt_html::tokenizer::named_character_references::lookup_entity;
///
/// assert_eq!(lookup_entity("amp"), Some("&"));
/// assert_eq!(lookup_entity("AMP"), None);
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}
