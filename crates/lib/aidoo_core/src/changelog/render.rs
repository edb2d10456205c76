//! Line-oriented changelog renderer.
//!
//! Each line is classified into a [`Line`] and fed to a two-state machine
//! ([`ListState`]) that owns all `<ul>` open/close decisions.

use std::sync::LazyLock;

use regex::Regex;

use super::inline::{escape_html, render_inline};

/// Joins emitted nodes so they line up with the page's indentation.
pub const NODE_SEPARATOR: &str = "\n      ";

/// Header and preamble lines of a Keep-a-Changelog document.
const BOILERPLATE_PREFIXES: &[&str] = &[
    "# Changelog",
    "All notable changes",
    "The format is based",
    "and this project adheres",
];

static VERSION_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[[0-9.]+\]:").expect("valid version link pattern"));

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("valid bracket pattern"));

/// A classified changelog line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line<'a> {
    /// Boilerplate, link-reference footers and free text.
    Ignored,
    Blank,
    Release(&'a str),
    Section(&'a str),
    Bullet(&'a str),
}

impl<'a> Line<'a> {
    /// First match wins.
    fn classify(line: &'a str) -> Self {
        if BOILERPLATE_PREFIXES.iter().any(|p| line.starts_with(p)) {
            return Line::Ignored;
        }
        if VERSION_LINK.is_match(line) || line.starts_with("[Unreleased]:") {
            return Line::Ignored;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Line::Blank;
        }
        if let Some(text) = line.strip_prefix("## ") {
            return Line::Release(text);
        }
        if let Some(text) = line.strip_prefix("### ") {
            return Line::Section(text);
        }
        if let Some(text) = trimmed.strip_prefix("- ") {
            return Line::Bullet(text);
        }
        Line::Ignored
    }
}

/// Whether a `<ul>` is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    NotInList,
    InList,
}

/// Accumulates HTML nodes while walking the document.
struct Renderer {
    state: ListState,
    nodes: Vec<String>,
}

impl Renderer {
    fn new() -> Self {
        Self {
            state: ListState::NotInList,
            nodes: Vec::new(),
        }
    }

    fn open_list(&mut self) {
        if self.state == ListState::NotInList {
            self.nodes.push("<ul>".to_string());
            self.state = ListState::InList;
        }
    }

    fn close_list(&mut self) {
        if self.state == ListState::InList {
            self.nodes.push("</ul>".to_string());
            self.state = ListState::NotInList;
        }
    }

    fn feed(&mut self, line: Line<'_>) {
        match line {
            Line::Ignored => {}
            Line::Blank => self.close_list(),
            Line::Release(text) => {
                self.close_list();
                let plain = BRACKETED.replace_all(text, "${1}");
                self.nodes.push(format!("<h2>{}</h2>", escape_html(&plain)));
            }
            Line::Section(text) => {
                self.close_list();
                self.nodes.push(format!("<h3>{}</h3>", escape_html(text)));
            }
            Line::Bullet(text) => {
                self.open_list();
                self.nodes.push(format!("<li>{}</li>", render_inline(text)));
            }
        }
    }

    fn finish(mut self) -> String {
        self.close_list();
        self.nodes.join(NODE_SEPARATOR)
    }
}

/// Splits on every line boundary a text editor may have written: `\n`,
/// `\r\n`, a lone `\r`, and the Unicode separators (`\x0b`, `\x0c`,
/// `\x1c`-`\x1e`, `\u{85}`, `\u{2028}`, `\u{2029}`).
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some((idx, c)) = rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
            let line = rest;
            rest = "";
            return Some(line);
        };
        let line = &rest[..idx];
        let mut next = idx + c.len_utf8();
        if c == '\r' && rest[next..].starts_with('\n') {
            next += 1;
        }
        rest = &rest[next..];
        Some(line)
    })
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Converts changelog markdown into an HTML fragment.
///
/// Nodes are joined with [`NODE_SEPARATOR`]. Lines outside the grammar are
/// dropped.
pub fn render_changelog(markdown: &str) -> String {
    let mut renderer = Renderer::new();
    for line in split_lines(markdown) {
        renderer.feed(Line::classify(line));
    }
    let html = renderer.finish();
    tracing::debug!(bytes = html.len(), "rendered changelog");
    html
}
