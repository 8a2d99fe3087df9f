//! # mark-render-engine
//!
//! Renders a lightweight markup document to HTML from the document bytes
//! and the annotation tokens an external tokenizer produced for them.
//!
//! ## Pipeline
//!
//! 1. **`token`**: wire model (`Token`, `Role`, flat `Captures`, `Span`)
//! 2. **`source`**: bounds-checked, anchor-relative slicing of the buffer
//! 3. **`event`**: each token resolved once into a typed `Event`
//! 4. **`render`**: one fragment per event, concatenated in stream order
//!
//! `vocab` holds the tag vocabularies and capture layouts, `geometry` the
//! image style derivation.

pub mod error;
pub mod event;
pub mod geometry;
pub mod render;
pub mod source;
pub mod token;
pub mod vocab;

// Re-export key types for easier usage
pub use error::{CaptureError, RenderError};
pub use event::{Block, BlockEnd, Event, Events, Inline, resolve};
pub use geometry::image_style;
pub use render::{Escape, RenderOptions, Renderer, render};
pub use source::Source;
pub use token::{Captures, Role, Span, Token};
pub use vocab::{BlockTag, InlineTag};
