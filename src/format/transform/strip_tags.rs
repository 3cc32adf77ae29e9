use std::sync::OnceLock;

use regex::Regex;

/// Removes every tag, keeping only the text between them.
pub fn strip_tags(content: &str) -> String {
    static BREAKS_BETWEEN_TAGS: OnceLock<Regex> = OnceLock::new();
    static TAG: OnceLock<Regex> = OnceLock::new();

    let breaks = BREAKS_BETWEEN_TAGS
        .get_or_init(|| Regex::new(r">[\r\n]*<").expect("pattern is valid"));
    let tag = TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("pattern is valid"));

    let content = breaks.replace_all(content, "><");
    tag.replace_all(&content, "").into_owned()
}
