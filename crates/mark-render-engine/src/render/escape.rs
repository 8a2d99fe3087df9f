use std::borrow::Cow;

/// How captured source text is made safe before it lands in HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escape {
    /// Entity-encode text content and attribute values.
    #[default]
    Html,
    /// Insert captured text verbatim. Only for trusted documents.
    None,
}

impl Escape {
    /// Escapes text placed between tags.
    pub fn text<'a>(self, s: &'a str) -> Cow<'a, str> {
        match self {
            Escape::Html => html_escape::encode_text(s),
            Escape::None => Cow::Borrowed(s),
        }
    }

    /// Escapes a value placed inside a double-quoted attribute.
    pub fn attribute<'a>(self, s: &'a str) -> Cow<'a, str> {
        match self {
            Escape::Html => html_escape::encode_double_quoted_attribute(s),
            Escape::None => Cow::Borrowed(s),
        }
    }
}
