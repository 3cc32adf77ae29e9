use std::{collections::HashSet, sync::OnceLock};

use ammonia::{Builder, UrlRelative};

/// Drops every tag and attribute outside the allow-list below, keeping the
/// text they wrap.
pub fn sanitize(content: &str) -> String {
    static BUILDER: OnceLock<Builder<'static>> = OnceLock::new();

    let builder = BUILDER.get_or_init(|| {
        let mut builder = Builder::default();

        builder.tags(ALLOWED_TAGS.into_iter().collect::<HashSet<_>>());
        builder.url_relative(UrlRelative::Deny);

        builder
    });

    builder.clean(content).to_string()
}

const ALLOWED_TAGS: [&str; 26] = [
    "a",
    "address",
    "b",
    "blockquote",
    "br",
    "cite",
    "div",
    "em",
    "font",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "i",
    "img",
    "li",
    "ol",
    "p",
    "pre",
    "span",
    "strong",
    "u",
    "ul",
];
