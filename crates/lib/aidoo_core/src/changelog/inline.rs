//! Inline markup for bullet entries.
//!
//! Escaping runs first so the tags introduced by the substitutions are never
//! escaped themselves. Substitutions then run in a fixed order: bold, links,
//! inline code.

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid bold pattern"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"));

static CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid code pattern"));

/// Escapes the HTML-significant characters `& < > " '`.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders bold, link and inline-code markup to HTML.
pub fn render_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let bolded = BOLD.replace_all(&escaped, "<strong>${1}</strong>");
    let linked = LINK.replace_all(
        &bolded,
        r#"<a href="${2}" target="_blank" rel="noopener">${1}</a>"#,
    );
    CODE.replace_all(&linked, "<code>${1}</code>").into_owned()
}
