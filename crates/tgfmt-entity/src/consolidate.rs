//! Consolidation of fragmented entities.
//!
//! Overlap repair in the parser splits a crossing tag into several pieces of
//! the same kind. This module merges them back: entities whose kind and
//! payload are equal and whose ranges overlap or touch become one entity
//! covering the union of their ranges.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::entity::{EntityKind, MessageEntity};

/// Merge every group of similar entities whose ranges overlap or touch.
///
/// Two similar entities `a` and `b` (with `a.offset <= b.offset`) merge when
/// `b.offset <= a.offset + a.length`. Merging repeats until no pair in a group
/// qualifies, so a chain of overlapping ranges collapses to one entity.
/// Entities of different kinds or payloads never merge, even on identical
/// ranges. Zero-length entries are dropped.
///
/// The result is sorted by offset, then length, then kind.
#[must_use]
pub fn consolidate_entities(entities: &[MessageEntity]) -> Vec<MessageEntity> {
    let mut groups: BTreeMap<&EntityKind, Vec<(usize, usize)>> = BTreeMap::new();
    for entity in entities.iter().filter(|entity| entity.length > 0) {
        groups
            .entry(&entity.kind)
            .or_default()
            .push((entity.offset, entity.end()));
    }

    let mut merged = Vec::with_capacity(entities.len());
    for (kind, mut spans) in groups {
        spans.sort_unstable();
        let mut spans = spans.into_iter();
        let Some((mut start, mut end)) = spans.next() else {
            continue;
        };
        for (next_start, next_end) in spans {
            if next_start <= end {
                end = end.max(next_end);
            } else {
                merged.push(MessageEntity::new(kind.clone(), start, end - start));
                start = next_start;
                end = next_end;
            }
        }
        merged.push(MessageEntity::new(kind.clone(), start, end - start));
    }

    merged.sort_by(entity_order);
    merged
}

/// Output order: ascending offset, then ascending length, then kind.
fn entity_order(a: &MessageEntity, b: &MessageEntity) -> Ordering {
    a.offset
        .cmp(&b.offset)
        .then(a.length.cmp(&b.length))
        .then_with(|| a.kind.cmp(&b.kind))
}
