// src/render/markdown.rs — Minimal inline markdown
//
// Exactly two substitutions: `**x**` then `*x*`. Nested or unbalanced
// markers give partial output. Content is not HTML-escaped.

use crossterm::style::Stylize;
use regex::{Captures, Regex};
use std::sync::LazyLock;

// Spans stop at any line terminator: \n, \r, U+2028, U+2029.
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^\n\r\x{2028}\x{2029}]*?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^\n\r\x{2028}\x{2029}]*?)\*").unwrap());

pub fn to_html(text: &str) -> String {
    let text = BOLD.replace_all(text, "<b>$1</b>");
    ITALIC.replace_all(&text, "<i>$1</i>").into_owned()
}

/// Same pass, emitting terminal bold/italic instead of tags.
pub fn to_ansi(text: &str) -> String {
    let text = BOLD.replace_all(text, |c: &Captures| c[1].bold().to_string());
    ITALIC
        .replace_all(&text, |c: &Captures| c[1].italic().to_string())
        .into_owned()
}
