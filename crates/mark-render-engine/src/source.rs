use std::borrow::Cow;

use crate::error::CaptureError;
use crate::token::Span;

/// Read-only view of the document bytes the tokenizer scanned.
///
/// The engine only ever slices it; every slice is resolved against a
/// token's anchor and bounds-checked.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    bytes: &'a [u8],
}

impl<'a> Source<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `bytes[anchor + span.start .. anchor + span.end]` as text.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
    pub fn slice(&self, anchor: usize, span: Span) -> Result<Cow<'a, str>, CaptureError> {
        let len = self.bytes.len();
        let (Some(start), Some(end)) = (
            anchor.checked_add(span.start),
            anchor.checked_add(span.end),
        ) else {
            return Err(CaptureError::OutOfBounds {
                start: anchor.saturating_add(span.start),
                end: anchor.saturating_add(span.end),
                len,
            });
        };

        if start > end {
            return Err(CaptureError::Inverted { start, end });
        }
        if end > len {
            return Err(CaptureError::OutOfBounds { start, end, len });
        }

        Ok(String::from_utf8_lossy(&self.bytes[start..end]))
    }
}
