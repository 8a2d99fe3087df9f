/// A byte range `[start, end)` relative to a token's block anchor.
///
/// Spans never carry the absence sentinel: a group that did not participate
/// is represented by `None` at the [`Captures`](super::Captures) level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start offset, relative to the anchor.
    pub start: usize,
    /// Exclusive end offset, relative to the anchor.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Builds a span from a raw wire pair, or `None` if either side is the
    /// `-1` sentinel (or any other negative value).
    pub fn from_raw(start: i64, end: i64) -> Option<Self> {
        let start = usize::try_from(start).ok()?;
        let end = usize::try_from(end).ok()?;
        Some(Self { start, end })
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}
