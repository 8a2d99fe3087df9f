//! # Resolved Events
//!
//! Typed view of the token stream. Each raw [`Token`] is resolved once into
//! an [`Event`] whose fields are already-sliced source text, so the renderer
//! matches on named variants instead of reading offsets by position.
//!
//! Resolution is where every bounds check happens: a token whose offsets
//! do not fit the buffer, or that lacks a group its kind requires, yields
//! [`RenderError::MalformedToken`] carrying the token's stream position.

use std::borrow::Cow;

use crate::error::{CaptureError, RenderError};
use crate::source::Source;
use crate::token::{Role, Token};
use crate::vocab::{BlockTag, CodeFence, Header, Image, InlineTag};

/// Opening side of a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Header {
        marker: Cow<'a, str>,
    },
    ListItem,
    TodoItem,
    Code {
        lang: Option<Cow<'a, str>>,
    },
    Image {
        path: Cow<'a, str>,
        /// Present only together with `height`.
        width: Option<Cow<'a, str>>,
        height: Option<Cow<'a, str>>,
    },
    Generic,
}

/// Closing side of a block. Only the header needs captured text to close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEnd<'a> {
    Header { marker: Cow<'a, str> },
    ListItem,
    TodoItem,
    Code,
    Image,
    Generic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline<'a> {
    Blob(Cow<'a, str>),
    Code(Cow<'a, str>),
    Tag(Cow<'a, str>),
    Text(Cow<'a, str>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'a> {
    Start(Block<'a>),
    End(BlockEnd<'a>),
    Inline(Inline<'a>),
    /// A token with an unknown role; contributes no output.
    Skip,
}

/// Heading level: the number of characters in the marker run.
pub fn header_level(marker: &str) -> usize {
    marker.chars().count()
}

impl<'a> Event<'a> {
    /// Resolves one token against the source.
    pub fn resolve(source: Source<'a>, token: &Token) -> Result<Self, CaptureError> {
        let groups = Groups { source, token };
        match token.role {
            Role::BlockStart => groups.block_start().map(Event::Start),
            Role::BlockEnd => groups.block_end().map(Event::End),
            Role::Inline => groups.inline().map(Event::Inline),
            Role::Unknown => Ok(Event::Skip),
        }
    }
}

/// One token's capture groups, bound to the source they index into.
struct Groups<'a, 't> {
    source: Source<'a>,
    token: &'t Token,
}

impl<'a> Groups<'a, '_> {
    fn optional(&self, group: usize) -> Result<Option<Cow<'a, str>>, CaptureError> {
        self.token
            .matches
            .group(group)
            .map(|span| self.source.slice(self.token.block_start_index, span))
            .transpose()
    }

    fn required(&self, group: usize) -> Result<Cow<'a, str>, CaptureError> {
        self.optional(group)?
            .ok_or(CaptureError::Missing { group })
    }

    fn block_start(&self) -> Result<Block<'a>, CaptureError> {
        Ok(match BlockTag::from_raw(self.token.tag) {
            BlockTag::Header => Block::Header {
                marker: self.required(Header::MARKER)?,
            },
            BlockTag::List => Block::ListItem,
            BlockTag::TodoList => Block::TodoItem,
            BlockTag::Code => Block::Code {
                lang: self.optional(CodeFence::LANG)?,
            },
            BlockTag::Image => {
                let path = self.required(Image::PATH)?;
                // Width and height only count as a pair; neither is sliced alone.
                let (width, height) = if self
                    .token
                    .matches
                    .all_present(&[Image::WIDTH, Image::HEIGHT])
                {
                    (self.optional(Image::WIDTH)?, self.optional(Image::HEIGHT)?)
                } else {
                    (None, None)
                };
                Block::Image {
                    path,
                    width,
                    height,
                }
            }
            BlockTag::Generic => Block::Generic,
        })
    }

    fn block_end(&self) -> Result<BlockEnd<'a>, CaptureError> {
        Ok(match BlockTag::from_raw(self.token.tag) {
            BlockTag::Header => BlockEnd::Header {
                marker: self.required(Header::MARKER)?,
            },
            BlockTag::List => BlockEnd::ListItem,
            BlockTag::TodoList => BlockEnd::TodoItem,
            BlockTag::Code => BlockEnd::Code,
            BlockTag::Image => BlockEnd::Image,
            BlockTag::Generic => BlockEnd::Generic,
        })
    }

    fn inline(&self) -> Result<Inline<'a>, CaptureError> {
        let span = self.token.text_span().ok_or(CaptureError::MissingText)?;
        let text = self.source.slice(self.token.block_start_index, span)?;
        Ok(match InlineTag::from_raw(self.token.tag) {
            InlineTag::Blob => Inline::Blob(text),
            InlineTag::Code => Inline::Code(text),
            InlineTag::Tag => Inline::Tag(text),
            InlineTag::Text => Inline::Text(text),
        })
    }
}

/// Iterator over the resolved events of a token stream.
///
/// Stops being useful after the first error; callers are expected to abort.
pub struct Events<'a, 't> {
    source: Source<'a>,
    tokens: std::iter::Enumerate<std::slice::Iter<'t, Token>>,
}

impl<'a> Iterator for Events<'a, '_> {
    type Item = Result<Event<'a>, RenderError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (position, token) = self.tokens.next()?;
        Some(
            Event::resolve(self.source, token).map_err(|source| RenderError::MalformedToken {
                position,
                role: token.role,
                tag: token.tag,
                source,
            }),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

/// Resolves `tokens` against `buffer`, lazily and in stream order.
pub fn resolve<'a, 't>(buffer: &'a [u8], tokens: &'t [Token]) -> Events<'a, 't> {
    Events {
        source: Source::new(buffer),
        tokens: tokens.iter().enumerate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Captures, Span};

    fn resolve_one(buffer: &[u8], token: Token) -> Result<Event<'_>, CaptureError> {
        Event::resolve(Source::new(buffer), &token)
    }

    #[test]
    fn header_start_and_end_carry_marker() {
        let captures = Captures::from_groups([Some((0, 3))]);
        let start = resolve_one(b"### Deep", Token::block_start(BlockTag::HEADER, 0, captures.clone()));
        let end = resolve_one(b"### Deep", Token::block_end(BlockTag::HEADER, 0, captures));

        assert_eq!(start, Ok(Event::Start(Block::Header { marker: "###".into() })));
        assert_eq!(end, Ok(Event::End(BlockEnd::Header { marker: "###".into() })));
    }

    #[test]
    fn header_without_marker_is_malformed() {
        let token = Token::block_start(BlockTag::HEADER, 0, Captures::from_groups([None]));
        assert_eq!(
            resolve_one(b"# x", token),
            Err(CaptureError::Missing { group: Header::MARKER })
        );
    }

    #[test]
    fn code_without_language_resolves() {
        let token = Token::block_start(BlockTag::CODE, 0, Captures::from_groups([None]));
        assert_eq!(
            resolve_one(b"```", token),
            Ok(Event::Start(Block::Code { lang: None }))
        );
    }

    #[test]
    fn image_needs_both_dimensions() {
        let buffer = b"![](a.png){50x}";
        let captures = Captures::from_groups([
            Some((0, 15)),
            Some((4, 9)),
            None,
            Some((11, 13)),
            None,
        ]);
        let event = resolve_one(buffer, Token::block_start(BlockTag::IMAGE, 0, captures));
        assert_eq!(
            event,
            Ok(Event::Start(Block::Image {
                path: "a.png".into(),
                width: None,
                height: None,
            }))
        );
    }

    #[test]
    fn image_width_is_not_sliced_without_height() {
        // The width group points past the buffer but must never be read.
        let captures = Captures::from_groups([Some((0, 5)), Some((0, 5)), None, Some((90, 99))]);
        let event = resolve_one(b"a.png", Token::block_start(BlockTag::IMAGE, 0, captures));
        assert!(matches!(event, Ok(Event::Start(Block::Image { width: None, .. }))));
    }

    #[test]
    fn image_without_path_is_malformed() {
        let captures = Captures::from_groups([Some((0, 3)), None]);
        assert_eq!(
            resolve_one(b"![]", Token::block_start(BlockTag::IMAGE, 0, captures)),
            Err(CaptureError::Missing { group: Image::PATH })
        );
    }

    #[test]
    fn image_end_needs_no_captures() {
        let token = Token::block_end(BlockTag::IMAGE, 0, Captures::default());
        assert_eq!(resolve_one(b"", token), Ok(Event::End(BlockEnd::Image)));
    }

    #[test]
    fn inline_without_text_is_malformed() {
        let mut token = Token::inline(InlineTag::BLOB, 0, Span::new(0, 1));
        token.text = [-1, -1];
        assert_eq!(resolve_one(b"x", token), Err(CaptureError::MissingText));
    }

    #[test]
    fn errors_report_stream_position() {
        let tokens = vec![
            Token::inline(InlineTag::TEXT, 0, Span::new(0, 2)),
            Token::inline(InlineTag::TEXT, 0, Span::new(0, 20)),
        ];
        let results: Vec<_> = resolve(b"hi", &tokens).collect();

        assert!(results[0].is_ok());
        let err = results[1].clone().unwrap_err();
        assert_eq!(err.position(), 1);
        assert!(err.to_string().contains("position 1"));
    }

    #[test]
    fn unknown_role_is_skipped() {
        let mut token = Token::inline(InlineTag::TEXT, 0, Span::new(0, 1));
        token.role = Role::Unknown;
        assert_eq!(resolve_one(b"x", token), Ok(Event::Skip));
    }

    #[test]
    fn header_level_counts_characters() {
        assert_eq!(header_level("#"), 1);
        assert_eq!(header_level("####"), 4);
        assert_eq!(header_level("＃＃"), 2);
    }
}
