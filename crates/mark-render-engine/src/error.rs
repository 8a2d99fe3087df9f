use thiserror::Error;

use crate::token::Role;

/// Failure to turn one token's offsets into source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("capture {start}..{end} lies outside the {len}-byte source")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("capture starts at {start} but ends at {end}")]
    Inverted { start: usize, end: usize },

    #[error("required capture group {group} did not participate")]
    Missing { group: usize },

    #[error("inline token carries no text range")]
    MissingText,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A token whose offsets could not be resolved. Aborts the whole render.
    #[error("malformed {role:?} token at position {position} (tag {tag}): {source}")]
    MalformedToken {
        /// Zero-based index of the token in the stream.
        position: usize,
        role: Role,
        tag: i64,
        source: CaptureError,
    },
}

impl RenderError {
    /// Stream position of the offending token.
    pub fn position(&self) -> usize {
        match self {
            RenderError::MalformedToken { position, .. } => *position,
        }
    }
}
