use serde::{Deserialize, Serialize};

use super::span::Span;

/// The tokenizer's flat capture-group offsets.
///
/// Group `g` occupies entries `2g` (start) and `2g + 1` (end), both relative
/// to the token's anchor. `-1` in either entry means the group did not
/// participate in the match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Captures(Vec<i64>);

impl Captures {
    /// The absence sentinel used by the tokenizer.
    pub const ABSENT: i64 = -1;

    pub fn new(raw: Vec<i64>) -> Self {
        Self(raw)
    }

    /// Builds captures from per-group pairs; `None` becomes the sentinel pair.
    pub fn from_groups<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = Option<(usize, usize)>>,
    {
        let mut raw = Vec::new();
        for group in groups {
            match group {
                Some((start, end)) => {
                    raw.push(start as i64);
                    raw.push(end as i64);
                }
                None => {
                    raw.push(Self::ABSENT);
                    raw.push(Self::ABSENT);
                }
            }
        }
        Self(raw)
    }

    /// Returns the span for group `g`, or `None` if it is absent or lies past
    /// the end of the offset list.
    pub fn group(&self, g: usize) -> Option<Span> {
        let start = *self.0.get(g.checked_mul(2)?)?;
        let end = *self.0.get(g * 2 + 1)?;
        Span::from_raw(start, end)
    }

    /// Returns true only if every listed group participated.
    pub fn all_present(&self, groups: &[usize]) -> bool {
        groups.iter().all(|&g| self.group(g).is_some())
    }

    /// Number of groups (pairs) carried.
    pub fn arity(&self) -> usize {
        self.0.len() / 2
    }

    pub fn as_raw(&self) -> &[i64] {
        &self.0
    }
}
