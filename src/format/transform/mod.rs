mod plain_text;
mod sanitize;
mod strip_tags;

use std::borrow::Cow;

pub use plain_text::plain_text_to_html;
pub use sanitize::sanitize;
pub use strip_tags::strip_tags;

/// Encodes `&`, `<`, `>`, `"` and `'`, which makes the text safe both as
/// element content and inside a quoted attribute.
pub fn encode_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}
