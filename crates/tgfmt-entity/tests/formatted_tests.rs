//! Integration tests for formatted text validation and concatenation.

use tgfmt_entity::{EntityError, EntityKind, EntityType, FormattedText, MessageEntity, utf16_len};

#[test]
fn test_utf16_len_counts_surrogate_pairs() {
    assert_eq!(utf16_len("abc"), 3);
    assert_eq!(utf16_len("é"), 1);
    assert_eq!(utf16_len("😀"), 2);
    assert_eq!(utf16_len("a😀b"), 4);
}

#[test]
fn test_validate_accepts_in_bounds() {
    let formatted = FormattedText::new(
        "😀 hi",
        vec![MessageEntity::new(EntityKind::Bold, 3, 2)],
    );
    assert_eq!(formatted.validate(), Ok(()));
}

#[test]
fn test_validate_rejects_out_of_bounds() {
    let formatted = FormattedText::new("hi", vec![MessageEntity::new(EntityKind::Italic, 1, 5)]);
    assert_eq!(
        formatted.validate(),
        Err(EntityError::OutOfBounds {
            index: 0,
            entity_type: EntityType::Italic,
            end: 6,
            text_len: 2,
        })
    );
}

#[test]
fn test_validate_rejects_empty_range() {
    let formatted = FormattedText::new(
        "hello",
        vec![
            MessageEntity::new(EntityKind::Bold, 0, 1),
            MessageEntity::new(EntityKind::Code, 2, 0),
        ],
    );
    let error = formatted.validate().expect_err("zero length must fail");
    assert_eq!(error.to_string(), "entity #1 (code) at offset 2 has zero length");
}

#[test]
fn test_append_shifts_by_utf16_length() {
    let mut formatted = FormattedText::new("😀 ", vec![MessageEntity::new(EntityKind::Bold, 0, 2)]);
    formatted.append(FormattedText::new(
        "x",
        vec![MessageEntity::new(EntityKind::Italic, 0, 1)],
    ));

    assert_eq!(formatted.text, "😀 x");
    assert_eq!(
        formatted.entities,
        vec![
            MessageEntity::new(EntityKind::Bold, 0, 2),
            MessageEntity::new(EntityKind::Italic, 3, 1),
        ]
    );
}

#[test]
fn test_concat_with_separator() {
    let parts = vec![
        FormattedText::new("First", vec![MessageEntity::new(EntityKind::Bold, 0, 5)]),
        FormattedText::new("Second", vec![MessageEntity::new(EntityKind::Italic, 0, 6)]),
    ];
    let joined = FormattedText::concat(parts, " - ");

    assert_eq!(joined.text, "First - Second");
    assert_eq!(
        joined.entities,
        vec![
            MessageEntity::new(EntityKind::Bold, 0, 5),
            MessageEntity::new(EntityKind::Italic, 8, 6),
        ]
    );
}

#[test]
fn test_concat_nothing() {
    let joined = FormattedText::concat(Vec::new(), ", ");
    assert!(joined.is_empty());
    assert_eq!(FormattedText::from("plain"), FormattedText::plain("plain".to_string()));
}
