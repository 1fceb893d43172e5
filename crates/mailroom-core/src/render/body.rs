//! Sanitizing boundary for server-supplied message bodies.
//!
//! Bodies are never shown as live markup. HTML is converted to
//! Markdown-flavoured plain text; scripts and styles are dropped.

use std::sync::LazyLock;

use htmd::HtmlToMarkdown;

/// Shared converter; building one registers every element handler.
static CONVERTER: LazyLock<HtmlToMarkdown> = LazyLock::new(|| {
    HtmlToMarkdown::builder()
        .skip_tags(vec!["script", "style", "head", "iframe", "object"])
        .build()
});

/// Converts a stored body to display text.
#[must_use]
pub fn body_text(raw: &str) -> String {
    if !looks_like_markup(raw) {
        return raw.to_string();
    }

    match CONVERTER.convert(raw) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Failed to convert message body: {}", e);
            strip_tags(raw)
        }
    }
}

/// Whether `text` contains something shaped like an HTML tag.
#[must_use]
pub fn looks_like_markup(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'<'
            && bytes
                .get(i + 1)
                .is_some_and(|&next| next.is_ascii_alphabetic() || next == b'/' || next == b'!')
            && bytes[i + 1..].contains(&b'>')
    })
}

/// Last-resort tag removal when conversion fails.
fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
