/// Turns line breaks and runs of whitespace into their HTML equivalents so
/// that plain text keeps its shape when rendered.
pub fn plain_text_to_html(text: &str) -> String {
    text.replace("\r\n", "<br />")
        .replace('\r', "<br />")
        .replace('\n', "<br />")
        .replace('\t', "&nbsp;&nbsp;")
        .replace("  ", "&nbsp;&nbsp;")
}
