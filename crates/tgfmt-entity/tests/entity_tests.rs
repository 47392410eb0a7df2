//! Integration tests for entity comparison, copying, and serialization.

use tgfmt_entity::{
    EntityKind, EntityType, MessageEntity, User, deep_copy_entity, is_entity_equal,
    is_entity_similar, is_user_equal,
};

/// Helper to build a text link entity
fn link(url: &str, offset: usize, length: usize) -> MessageEntity {
    MessageEntity::new(
        EntityKind::TextLink {
            url: url.to_string(),
        },
        offset,
        length,
    )
}

/// Helper to build a user with a full set of optional fields
fn john() -> User {
    User {
        last_name: Some("Doe".to_string()),
        username: Some("johndoe".to_string()),
        language_code: Some("en".to_string()),
        ..User::new(123_456, false, "John")
    }
}

#[test]
fn test_basic_equality() {
    let a = MessageEntity::new(EntityKind::Bold, 0, 5);
    let b = MessageEntity::new(EntityKind::Bold, 0, 5);
    let moved = MessageEntity::new(EntityKind::Bold, 10, 5);
    let shorter = MessageEntity::new(EntityKind::Bold, 0, 3);

    assert!(is_entity_equal(&a, &b));
    assert!(!is_entity_equal(&a, &moved));
    assert!(!is_entity_equal(&a, &shorter));
    assert!(is_entity_similar(&a, &moved));
}

#[test]
fn test_text_link_payload() {
    let a = link("https://example.com", 0, 5);
    let same = link("https://example.com", 0, 5);
    let other_url = link("https://different.com", 0, 5);
    let other_place = link("https://example.com", 10, 5);

    assert!(is_entity_equal(&a, &same));
    assert!(!is_entity_equal(&a, &other_url));
    assert!(!is_entity_similar(&a, &other_url));
    assert!(!is_entity_equal(&a, &other_place));
    assert!(is_entity_similar(&a, &other_place));
}

#[test]
fn test_custom_emoji_payload() {
    let emoji = |id: &str, offset, length| {
        MessageEntity::new(
            EntityKind::CustomEmoji {
                custom_emoji_id: id.to_string(),
            },
            offset,
            length,
        )
    };
    assert!(is_entity_equal(&emoji("123456", 0, 2), &emoji("123456", 0, 2)));
    assert!(!is_entity_equal(&emoji("123456", 0, 2), &emoji("789012", 0, 2)));
    assert!(!is_entity_equal(&emoji("123456", 0, 2), &emoji("123456", 5, 2)));
    assert!(!is_entity_equal(&emoji("123456", 0, 2), &emoji("123456", 0, 3)));
}

#[test]
fn test_different_kinds_are_never_similar() {
    let bold = MessageEntity::new(EntityKind::Bold, 0, 5);
    let italic = MessageEntity::new(EntityKind::Italic, 0, 5);
    assert!(!is_entity_similar(&bold, &italic));
    assert!(!is_entity_equal(&bold, &italic));
}

#[test]
fn test_user_equality() {
    let a = User::new(123, false, "John");
    let b = User::new(123, false, "John");
    let bot = User::new(123, true, "John");
    let other = User::new(456, false, "Jane");

    assert!(is_user_equal(&a, &b));
    assert!(!is_user_equal(&a, &bot));
    assert!(!is_user_equal(&a, &other));
}

#[test]
fn test_user_null_and_absent_fields_are_equal() {
    let explicit: User = serde_json::from_str(
        r#"{"id":123,"is_bot":false,"first_name":"John","last_name":null,"username":"johndoe","language_code":null}"#,
    )
    .expect("valid user JSON");
    let omitted: User =
        serde_json::from_str(r#"{"id":123,"is_bot":false,"first_name":"John","username":"johndoe"}"#)
            .expect("valid user JSON");

    assert!(is_user_equal(&explicit, &omitted));
}

#[test]
fn test_user_present_field_breaks_equality() {
    let bare = User::new(123, false, "John");
    let with_username = User {
        username: Some("johndoe".to_string()),
        ..User::new(123, false, "John")
    };
    let with_last_name = User {
        last_name: Some("Doe".to_string()),
        ..User::new(123, false, "John")
    };

    assert!(!is_user_equal(&bare, &with_username));
    assert!(!is_user_equal(&with_username, &with_last_name));
}

#[test]
fn test_text_mention_compares_users_structurally() {
    let mention = |user: User, offset, length| {
        MessageEntity::new(EntityKind::TextMention { user }, offset, length)
    };
    let a = mention(User::new(123, false, "John"), 0, 5);
    let b = mention(User::new(123, false, "John"), 0, 5);
    let c = mention(User::new(456, false, "Jane"), 0, 5);

    assert!(is_entity_equal(&a, &b));
    assert!(!is_entity_equal(&a, &c));
}

#[test]
fn test_deep_copy_is_independent() {
    let original = MessageEntity::new(EntityKind::TextMention { user: john() }, 0, 4);
    let mut copy = deep_copy_entity(&original);

    assert!(is_entity_equal(&original, &copy));

    if let EntityKind::TextMention { user } = &mut copy.kind {
        user.first_name = "Jane".to_string();
    }
    copy.offset = 10;

    match &original.kind {
        EntityKind::TextMention { user } => assert_eq!(user.first_name, "John"),
        other => panic!("Expected text_mention, got {other}"),
    }
    assert_eq!(original.offset, 0);
    assert!(!is_entity_equal(&original, &copy));
}

#[test]
fn test_deep_copy_minimal_user_keeps_absent_fields() {
    let original = MessageEntity::new(
        EntityKind::TextMention {
            user: User::new(789, true, "Bot"),
        },
        5,
        3,
    );
    let copy = deep_copy_entity(&original);
    match copy.kind {
        EntityKind::TextMention { user } => {
            assert_eq!(user.last_name, None);
            assert_eq!(user.username, None);
            assert!(user.is_bot);
        }
        other => panic!("Expected text_mention, got {other}"),
    }
}

#[test]
fn test_deep_copy_every_simple_kind() {
    let kinds = [
        EntityKind::Bold,
        EntityKind::Italic,
        EntityKind::Underline,
        EntityKind::Strikethrough,
        EntityKind::Spoiler,
        EntityKind::Code,
        EntityKind::Mention,
        EntityKind::Hashtag,
        EntityKind::Cashtag,
        EntityKind::BotCommand,
        EntityKind::Url,
        EntityKind::Email,
        EntityKind::PhoneNumber,
        EntityKind::Blockquote,
        EntityKind::ExpandableBlockquote,
    ];
    for kind in kinds {
        let entity = MessageEntity::new(kind, 1, 5);
        let copy = deep_copy_entity(&entity);
        assert!(is_entity_equal(&entity, &copy));
        assert_eq!(copy.entity_type(), entity.entity_type());
    }
}

#[test]
fn test_serialize_bot_api_shape() {
    let entity = link("https://t.me", 6, 8);
    let json = serde_json::to_value(&entity).expect("serializable");
    assert_eq!(
        json,
        serde_json::json!({
            "type": "text_link",
            "offset": 6,
            "length": 8,
            "url": "https://t.me"
        })
    );

    let pre = MessageEntity::new(EntityKind::Pre { language: None }, 0, 3);
    let json = serde_json::to_value(&pre).expect("serializable");
    assert_eq!(json, serde_json::json!({"type": "pre", "offset": 0, "length": 3}));
}

#[test]
fn test_deserialize_bot_api_shape() {
    let entity: MessageEntity = serde_json::from_str(
        r#"{"type":"pre","offset":2,"length":7,"language":"python"}"#,
    )
    .expect("valid entity JSON");
    assert_eq!(entity.entity_type(), EntityType::Pre);
    assert_eq!(
        entity.kind,
        EntityKind::Pre {
            language: Some("python".to_string())
        }
    );

    let mention: MessageEntity = serde_json::from_str(
        r#"{"type":"text_mention","offset":0,"length":4,"user":{"id":1,"is_bot":false,"first_name":"Ann"}}"#,
    )
    .expect("valid entity JSON");
    assert_eq!(
        mention.kind,
        EntityKind::TextMention {
            user: User::new(1, false, "Ann")
        }
    );
}
