use crate::event::{Block, BlockEnd, header_level};
use crate::geometry::image_style;

use super::RenderOptions;

/// Opening fragment for a block.
pub(crate) fn open(block: &Block<'_>, options: &RenderOptions) -> String {
    let escape = options.escape;
    match block {
        Block::Header { marker } => format!("<h{}>", header_level(marker)),
        Block::ListItem => r#"<li class="list-item">"#.to_string(),
        Block::TodoItem => r#"<li class="todo-item">"#.to_string(),
        Block::Code { lang } => {
            let lang = lang.as_deref().unwrap_or_default();
            format!(r#"<pre class="{}"><code>"#, escape.attribute(lang))
        }
        Block::Image {
            path,
            width,
            height,
        } => format!(
            r#"<div class="img"><img src="{}{}" style="{}" />"#,
            options.resource_prefix,
            escape.attribute(path),
            image_style(width.as_deref(), height.as_deref()),
        ),
        Block::Generic => "<div>".to_string(),
    }
}

/// Closing fragment for a block, computed from the end token alone.
pub(crate) fn close(end: &BlockEnd<'_>) -> String {
    match end {
        BlockEnd::Header { marker } => format!("</h{}>", header_level(marker)),
        BlockEnd::ListItem | BlockEnd::TodoItem => "</li>".to_string(),
        BlockEnd::Code => "</code></pre>".to_string(),
        BlockEnd::Image | BlockEnd::Generic => "</div>".to_string(),
    }
}
