//! # Token Model
//!
//! The wire form of the annotation stream produced by the external tokenizer.
//!
//! A [`Token`] carries a structural [`Role`], an integer tag, an absolute
//! anchor into the source buffer and anchor-relative offsets: the flat
//! [`Captures`] list for block tokens and a `text` pair for inline tokens.
//! Nothing here is interpreted; see [`crate::event`] for the typed view.

pub mod captures;
pub mod span;

pub use captures::Captures;
pub use span::Span;

use serde::{Deserialize, Serialize};

/// Which rendering path handles a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "block-start")]
    BlockStart,
    #[serde(rename = "block-end")]
    BlockEnd,
    #[serde(rename = "inline")]
    Inline,
    /// Any role string this engine does not know. Rendered as nothing.
    #[serde(other)]
    Unknown,
}

/// A single annotation token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub role: Role,
    pub tag: i64,
    /// Absolute byte offset every other offset in this token is relative to.
    #[serde(rename = "blockStartIndex", alias = "block_start_index")]
    pub block_start_index: usize,
    #[serde(default)]
    pub matches: Captures,
    /// Inline content range; only meaningful for [`Role::Inline`].
    #[serde(default = "absent_pair")]
    pub text: [i64; 2],
}

fn absent_pair() -> [i64; 2] {
    [Captures::ABSENT, Captures::ABSENT]
}

impl Token {
    pub fn block_start(tag: i64, block_start_index: usize, matches: Captures) -> Self {
        Self {
            role: Role::BlockStart,
            tag,
            block_start_index,
            matches,
            text: absent_pair(),
        }
    }

    pub fn block_end(tag: i64, block_start_index: usize, matches: Captures) -> Self {
        Self {
            role: Role::BlockEnd,
            ..Self::block_start(tag, block_start_index, matches)
        }
    }

    pub fn inline(tag: i64, block_start_index: usize, text: Span) -> Self {
        Self {
            role: Role::Inline,
            tag,
            block_start_index,
            matches: Captures::default(),
            text: [text.start as i64, text.end as i64],
        }
    }

    /// The inline text span, or `None` when the token carries the sentinel.
    pub fn text_span(&self) -> Option<Span> {
        Span::from_raw(self.text[0], self.text[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_token() {
        let json = r#"{"type":"block-start","tag":1,"blockStartIndex":4,"matches":[0,2,-1,-1]}"#;
        let token: Token = serde_json::from_str(json).unwrap();

        assert_eq!(token.role, Role::BlockStart);
        assert_eq!(token.tag, 1);
        assert_eq!(token.block_start_index, 4);
        assert_eq!(token.matches.group(0), Some(Span::new(0, 2)));
        assert_eq!(token.matches.group(1), None);
        assert_eq!(token.text_span(), None);
    }

    #[test]
    fn accepts_snake_case_anchor() {
        let json = r#"{"type":"inline","tag":0,"block_start_index":3,"text":[1,4]}"#;
        let token: Token = serde_json::from_str(json).unwrap();

        assert_eq!(token.block_start_index, 3);
        assert_eq!(token.text_span(), Some(Span::new(1, 4)));
        assert_eq!(token.matches.arity(), 0);
    }

    #[test]
    fn unknown_role_deserializes() {
        let json = r#"{"type":"paragraph-break","tag":0,"blockStartIndex":0}"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.role, Role::Unknown);
    }

    #[test]
    fn block_end_mirrors_block_start() {
        let captures = Captures::from_groups([Some((0, 1))]);
        let end = Token::block_end(1, 7, captures.clone());
        assert_eq!(end.role, Role::BlockEnd);
        assert_eq!(end.block_start_index, 7);
        assert_eq!(end.matches, captures);
    }
}
