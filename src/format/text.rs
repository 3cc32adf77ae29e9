use crate::services::TextFormatter;

use super::transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormatOptions {
    /// Remove all markup before anything else runs.
    pub strip_tags: bool,
    /// Keep allow-listed markup instead of encoding everything.
    pub allow_html: bool,
    /// Render line breaks and indentation as HTML.
    pub convert_plain_text_to_html: bool,
}
impl Default for TextFormatOptions {
    fn default() -> Self {
        Self {
            strip_tags: false,
            allow_html: false,
            convert_plain_text_to_html: true,
        }
    }
}

/// Formats multiline user input for display inside an HTML page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HtmlTextFormatter {
    pub options: TextFormatOptions,
}
impl HtmlTextFormatter {
    pub fn new(options: TextFormatOptions) -> Self {
        Self { options }
    }
}
impl TextFormatter for HtmlTextFormatter {
    fn format_text(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let TextFormatOptions {
            strip_tags,
            allow_html,
            convert_plain_text_to_html,
        } = self.options;

        let text = if strip_tags {
            transform::strip_tags(text)
        } else {
            text.to_string()
        };

        let text = if allow_html {
            transform::sanitize(&text)
        } else {
            transform::encode_html(&text).into_owned()
        };

        if convert_plain_text_to_html {
            transform::plain_text_to_html(&text)
        } else {
            text
        }
    }
}
