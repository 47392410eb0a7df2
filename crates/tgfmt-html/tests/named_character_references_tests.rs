//! Tests for named character reference lookup.

use tgfmt_html::tokenizer::named_character_references::lookup_entity;

#[test]
fn test_markup_escapes() {
    assert_eq!(lookup_entity("amp"), Some("&"));
    assert_eq!(lookup_entity("lt"), Some("<"));
    assert_eq!(lookup_entity("gt"), Some(">"));
    assert_eq!(lookup_entity("quot"), Some("\""));
    assert_eq!(lookup_entity("apos"), Some("'"));
    assert_eq!(lookup_entity("nbsp"), Some("\u{00A0}"));
}

#[test]
fn test_typographic_entities() {
    assert_eq!(lookup_entity("copy"), Some("©"));
    assert_eq!(lookup_entity("reg"), Some("®"));
    assert_eq!(lookup_entity("trade"), Some("™"));
    assert_eq!(lookup_entity("mdash"), Some("—"));
    assert_eq!(lookup_entity("ndash"), Some("–"));
    assert_eq!(lookup_entity("hellip"), Some("…"));
    assert_eq!(lookup_entity("laquo"), Some("«"));
    assert_eq!(lookup_entity("rdquo"), Some("\u{201D}"));
    assert_eq!(lookup_entity("bull"), Some("•"));
}

#[test]
fn test_symbols_and_fractions() {
    assert_eq!(lookup_entity("deg"), Some("°"));
    assert_eq!(lookup_entity("plusmn"), Some("±"));
    assert_eq!(lookup_entity("times"), Some("×"));
    assert_eq!(lookup_entity("divide"), Some("÷"));
    assert_eq!(lookup_entity("frac12"), Some("½"));
    assert_eq!(lookup_entity("frac34"), Some("¾"));
    assert_eq!(lookup_entity("euro"), Some("€"));
    assert_eq!(lookup_entity("rarr"), Some("→"));
}

#[test]
fn test_names_are_case_sensitive() {
    assert_eq!(lookup_entity("Delta"), Some("Δ"));
    assert_eq!(lookup_entity("delta"), Some("δ"));
    assert_eq!(lookup_entity("Eacute"), Some("É"));
    assert_eq!(lookup_entity("eacute"), Some("é"));
    assert_eq!(lookup_entity("LT"), None);
}

#[test]
fn test_unknown_names() {
    assert_eq!(lookup_entity(""), None);
    assert_eq!(lookup_entity("unknown"), None);
    assert_eq!(lookup_entity("amp;"), None);
}
