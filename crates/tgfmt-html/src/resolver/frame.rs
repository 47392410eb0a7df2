use tgfmt_entity::{EntityKind, EntityType, MessageEntity};

/// What an open tag contributes when it closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameRole {
    /// Produces an entity of this kind.
    Live(EntityKind),
    /// `code` directly inside `pre` that handed its language to the `pre`.
    /// Matched and popped like any frame, but produces nothing.
    Suppressed,
    /// An unsupported tag, kept only so its own closing tag finds it.
    Inert,
}

/// An open tag awaiting its closing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Lowercased name of the tag that opened the frame.
    pub tag_name: String,
    /// Alias group of the tag; `None` for unknown tags.
    pub group: Option<EntityType>,
    /// Start of the frame's content, in UTF-16 code units of the output text.
    pub start: usize,
    /// Byte offset of the opening tag in the input.
    pub position: usize,
    /// What the frame produces.
    pub role: FrameRole,
}

impl Frame {
    /// Close the frame at output offset `end`.
    ///
    /// Only live frames with non-empty content produce an entity.
    #[must_use]
    pub fn close(&self, end: usize) -> Option<MessageEntity> {
        match &self.role {
            FrameRole::Live(kind) if end > self.start => {
                Some(MessageEntity::new(kind.clone(), self.start, end - self.start))
            }
            _ => None,
        }
    }

    /// The same tag reopened at output offset `start`, keeping its role.
    #[must_use]
    pub fn reopened(self, start: usize) -> Self {
        Self { start, ..self }
    }

    /// True if the frame was opened by an unsupported tag.
    #[must_use]
    pub const fn is_inert(&self) -> bool {
        matches!(self.role, FrameRole::Inert)
    }
}
