//! # HTML Rendering
//!
//! Single left-to-right pass over the resolved event stream. Each event
//! produces one fragment, appended in stream order; there is no lookahead
//! and no nesting state, so block start and end fragments are computed
//! independently from their own tokens.
//!
//! A malformed token aborts the render: the caller gets the error and no
//! partial output.
//!
//! ## Modules
//!
//! - **`block`**: open/close fragments per block kind
//! - **`inline`**: fragments for inline spans
//! - **`escape`**: the [`Escape`] policy applied to captured text

mod block;
mod escape;
mod inline;

pub use escape::Escape;

use crate::error::RenderError;
use crate::event::{Event, resolve};
use crate::token::Token;
use crate::vocab::Image;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub escape: Escape,
    /// Prepended verbatim to every image resource path.
    pub resource_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape: Escape::Html,
            resource_prefix: Image::RESOURCE_PREFIX.to_string(),
        }
    }
}

impl RenderOptions {
    /// Inserts captured text unescaped, byte for byte.
    pub fn verbatim() -> Self {
        Self {
            escape: Escape::None,
            ..Self::default()
        }
    }
}

/// Renders token streams to HTML with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders `tokens` against the `buffer` they were scanned from.
    pub fn render(&self, buffer: &[u8], tokens: &[Token]) -> Result<String, RenderError> {
        let mut html = String::with_capacity(buffer.len() + tokens.len() * 16);
        for event in resolve(buffer, tokens) {
            let event = event?;
            log::trace!("{event:?}");
            html.push_str(&self.fragment(&event));
        }
        log::debug!(
            "rendered {} tokens from {} bytes into {} bytes of html",
            tokens.len(),
            buffer.len(),
            html.len()
        );
        Ok(html)
    }

    /// The HTML fragment for a single resolved event.
    pub fn fragment(&self, event: &Event<'_>) -> String {
        match event {
            Event::Start(b) => block::open(b, &self.options),
            Event::End(b) => block::close(b),
            Event::Inline(span) => inline::inline(span, self.options.escape),
            Event::Skip => String::new(),
        }
    }
}

/// Renders with [`RenderOptions::default`].
pub fn render(buffer: &[u8], tokens: &[Token]) -> Result<String, RenderError> {
    Renderer::default().render(buffer, tokens)
}
