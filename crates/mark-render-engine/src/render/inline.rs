use crate::event::Inline;

use super::Escape;

/// Fragment for an inline span.
pub(crate) fn inline(span: &Inline<'_>, escape: Escape) -> String {
    match span {
        Inline::Blob(text) => format!("<strong>{}</strong>", escape.text(text)),
        Inline::Code(text) => format!(r#"<span class="inline-code">{}</span>"#, escape.text(text)),
        Inline::Tag(text) => format!(r#"<span class="tag">{}</span>"#, escape.text(text)),
        Inline::Text(text) => escape.text(text).into_owned(),
    }
}
