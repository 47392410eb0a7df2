//! Tag resolution: turns the token stream into text and entities.

/// The resolver that consumes tokens and tracks open tags.
pub mod core;
/// Open-tag records kept on the resolver's stack.
pub mod frame;
/// Splitting of tags that close out of nesting order.
pub mod overlap;
/// Tag names, alias groups, and attribute-dependent kinds.
pub mod tags;

pub use self::core::TagResolver;
pub use frame::{Frame, FrameRole};
pub use overlap::repair_overlap;
pub use tags::{code_language, resolve_tag, tag_group};
