//! # Tag Vocabularies
//!
//! The closed sets of block and inline kinds a token's integer `tag` can
//! name. Integers outside a set map to the generic fallback rather than
//! failing.
//!
//! ## Modules
//!
//! - **`kinds`**: per-kind capture-group layouts (`Header`, `CodeFence`,
//!   `Image`). Group indices live there, never in the renderer.

pub mod kinds;

pub use kinds::{CodeFence, Header, Image};

/// Block-level kinds, as carried by `BlockStart` / `BlockEnd` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockTag {
    Header,
    List,
    TodoList,
    Code,
    Image,
    /// Paragraphs and any tag value not listed above.
    Generic,
}

impl BlockTag {
    pub const PARAGRAPH: i64 = 0;
    pub const HEADER: i64 = 1;
    pub const LIST: i64 = 2;
    pub const TODO_LIST: i64 = 3;
    pub const CODE: i64 = 4;
    pub const IMAGE: i64 = 5;

    pub fn from_raw(tag: i64) -> Self {
        match tag {
            Self::HEADER => BlockTag::Header,
            Self::LIST => BlockTag::List,
            Self::TODO_LIST => BlockTag::TodoList,
            Self::CODE => BlockTag::Code,
            Self::IMAGE => BlockTag::Image,
            _ => BlockTag::Generic,
        }
    }

    /// The wire value; `Generic` maps to the paragraph tag.
    pub fn raw(self) -> i64 {
        match self {
            BlockTag::Header => Self::HEADER,
            BlockTag::List => Self::LIST,
            BlockTag::TodoList => Self::TODO_LIST,
            BlockTag::Code => Self::CODE,
            BlockTag::Image => Self::IMAGE,
            BlockTag::Generic => Self::PARAGRAPH,
        }
    }
}

/// Inline-level kinds, as carried by `Inline` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineTag {
    /// Strong emphasis.
    Blob,
    Code,
    Tag,
    /// Plain text and any tag value not listed above.
    Text,
}

impl InlineTag {
    pub const TEXT: i64 = 0;
    pub const BLOB: i64 = 1;
    pub const CODE: i64 = 2;
    pub const TAG: i64 = 3;

    pub fn from_raw(tag: i64) -> Self {
        match tag {
            Self::BLOB => InlineTag::Blob,
            Self::CODE => InlineTag::Code,
            Self::TAG => InlineTag::Tag,
            _ => InlineTag::Text,
        }
    }

    pub fn raw(self) -> i64 {
        match self {
            InlineTag::Blob => Self::BLOB,
            InlineTag::Code => Self::CODE,
            InlineTag::Tag => Self::TAG,
            InlineTag::Text => Self::TEXT,
        }
    }
}
