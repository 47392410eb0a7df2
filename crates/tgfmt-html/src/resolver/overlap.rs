//! Overlap repair for crossing tags.
//!
//! In `<b>bold <i>overlap</b> italic</i>` the `</b>` closes a frame that is not
//! on top of the stack. Every frame above it is cut at the current offset and
//! reopened right after, so each piece is a contiguous range and nothing
//! crosses. The pieces share kind and payload, so consolidation later joins
//! them back into one entity.

use tgfmt_entity::MessageEntity;
use tracing::debug;

use super::frame::Frame;

/// Close `stack[index]` while frames above it are still open.
///
/// Frames above the match are closed at `cut` topmost first, then the match
/// itself; every piece with content is pushed to `drafts`. The stack is cut
/// back to `index` and the frames that were above are reopened at `cut` in
/// their original order, keeping their roles.
pub fn repair_overlap(
    stack: &mut Vec<Frame>,
    index: usize,
    cut: usize,
    drafts: &mut Vec<MessageEntity>,
) {
    let Some(matched) = stack.get(index) else {
        return;
    };
    debug!(
        tag = %matched.tag_name,
        crossed = stack.len() - index - 1,
        offset = cut,
        "closing tag crosses open tags; splitting them"
    );

    drafts.extend(stack[index + 1..].iter().rev().filter_map(|frame| frame.close(cut)));
    drafts.extend(matched.close(cut));

    let above: Vec<Frame> = stack.drain(index + 1..).collect();
    stack.truncate(index);
    stack.extend(above.into_iter().map(|frame| frame.reopened(cut)));
}
