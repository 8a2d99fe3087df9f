//! Capture-group layouts per block kind.
//!
//! Indices are group numbers (pairs), not flat offsets: group `g` sits at
//! flat entries `2g` and `2g + 1` of a token's `matches`.

/// Heading block. The marker run (`#`, `##`, ...) sets the level.
pub struct Header;

impl Header {
    pub const MARKER: usize = 0;
}

/// Fenced code block.
pub struct CodeFence;

impl CodeFence {
    /// Language identifier after the fence. Optional.
    pub const LANG: usize = 0;
}

/// Image block.
pub struct Image;

impl Image {
    /// Resource path. Required.
    pub const PATH: usize = 1;
    /// Width text; only used when `HEIGHT` is present too.
    pub const WIDTH: usize = 3;
    /// Height text; only used when `WIDTH` is present too.
    pub const HEIGHT: usize = 4;
    /// Presentation URL prefix for resource paths.
    pub const RESOURCE_PREFIX: &'static str = "/api/resource/";
}
