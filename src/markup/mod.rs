//! Restricted inline markup: `**bold**` and newlines, nothing else.
//!
//! Text is parsed into typed [`Segment`]s. Callers compose output from the
//! segments, escaping each text run exactly once, so there is no path for
//! raw markup in the source text to reach the page.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::helpers::escape_text;

lazy_static! {
    /// Non-greedy, non-empty, single-line bold span
    static ref BOLD: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
}

/// A run of inline text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Segment {
    Plain(String),
    Bold(String),
    LineBreak,
}

/// Split `text` into plain, bold and line-break segments.
///
/// Bold spans never cross a line break and never nest; unmatched
/// delimiters stay as literal asterisks.
pub fn render(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            segments.push(Segment::LineBreak);
        }
        render_line(line, &mut segments);
    }

    segments
}

fn render_line(line: &str, segments: &mut Vec<Segment>) {
    let mut last = 0;

    for caps in BOLD.captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            segments.push(Segment::Plain(line[last..whole.start()].to_string()));
        }
        segments.push(Segment::Bold(inner.as_str().to_string()));
        last = whole.end();
    }

    if last < line.len() {
        segments.push(Segment::Plain(line[last..].to_string()));
    }
}

/// Compose segments into HTML, escaping `&`, `<` and `>` in every text run
pub fn to_html(segments: &[Segment]) -> String {
    let mut html = String::new();
    for segment in segments {
        match segment {
            Segment::Plain(text) => html.push_str(&escape_text(text)),
            Segment::Bold(text) => {
                html.push_str("<strong>");
                html.push_str(&escape_text(text));
                html.push_str("</strong>");
            }
            Segment::LineBreak => html.push_str("<br/>"),
        }
    }
    html
}

/// Render restricted markup straight to HTML
pub fn render_html(text: &str) -> String {
    to_html(&render(text))
}
