//! The tag vocabulary of the dialect.
//!
//! | Kind | Tags |
//! |---|---|
//! | bold | `b`, `strong` |
//! | italic | `i`, `em` |
//! | underline | `u`, `ins` |
//! | strikethrough | `s`, `strike`, `del` |
//! | spoiler | `tg-spoiler`; `span class="tg-spoiler"` |
//! | code | `code` |
//! | pre | `pre` |
//! | blockquote | `blockquote`; `expandable_blockquote` with `expandable` |
//! | text link | `a href="..."` |
//! | custom emoji | `tg-emoji emoji-id="..."` |

use tgfmt_entity::{EntityKind, EntityType};

use crate::tokenizer::{Attribute, attribute_value};

/// The alias group a tag name belongs to, named by the entity type its plain
/// form produces. Tags in the same group close each other.
#[must_use]
pub fn tag_group(name: &str) -> Option<EntityType> {
    let group = match name {
        "b" | "strong" => EntityType::Bold,
        "i" | "em" => EntityType::Italic,
        "u" | "ins" => EntityType::Underline,
        "s" | "strike" | "del" => EntityType::Strikethrough,
        "tg-spoiler" | "span" => EntityType::Spoiler,
        "code" => EntityType::Code,
        "pre" => EntityType::Pre,
        "blockquote" => EntityType::Blockquote,
        "a" => EntityType::TextLink,
        "tg-emoji" => EntityType::CustomEmoji,
        _ => return None,
    };
    Some(group)
}

/// Resolve an open tag to the entity kind it produces.
///
/// Returns `None` when the tag is unknown or when a conditionally supported
/// tag lacks what it needs: `span` without `class="tg-spoiler"`, `a` without
/// a non-empty `href`, `tg-emoji` without a non-empty `emoji-id`.
///
/// The `code`-inside-`pre` case depends on the open tags and is handled by
/// the resolver before this is consulted.
#[must_use]
pub fn resolve_tag(name: &str, attributes: &[Attribute]) -> Option<EntityKind> {
    let kind = match tag_group(name)? {
        EntityType::Spoiler => {
            if name == "span" && attribute_value(attributes, "class") != Some("tg-spoiler") {
                return None;
            }
            EntityKind::Spoiler
        }
        EntityType::Blockquote => {
            if attribute_value(attributes, "expandable").is_some() {
                EntityKind::ExpandableBlockquote
            } else {
                EntityKind::Blockquote
            }
        }
        EntityType::TextLink => EntityKind::TextLink {
            url: non_empty_attribute(attributes, "href")?,
        },
        EntityType::CustomEmoji => EntityKind::CustomEmoji {
            custom_emoji_id: non_empty_attribute(attributes, "emoji-id")?,
        },
        EntityType::Pre => EntityKind::Pre { language: None },
        EntityType::Bold => EntityKind::Bold,
        EntityType::Italic => EntityKind::Italic,
        EntityType::Underline => EntityKind::Underline,
        EntityType::Strikethrough => EntityKind::Strikethrough,
        EntityType::Code => EntityKind::Code,
        _ => return None,
    };
    Some(kind)
}

/// The language named by a `class="language-X"` attribute on `code`.
///
/// Returns `None` when the class does not have that form, and `Some("")` for
/// a bare `language-`.
#[must_use]
pub fn code_language(attributes: &[Attribute]) -> Option<&str> {
    attribute_value(attributes, "class")?.strip_prefix("language-")
}

fn non_empty_attribute(attributes: &[Attribute], name: &str) -> Option<String> {
    attribute_value(attributes, name)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
