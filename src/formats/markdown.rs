//! Line-based markdown heading recognition.
//!
//! A heading is a line of one to six `#` characters, whitespace, then text. Anything
//! else, including `#Title` and `####### Title`, is ordinary body text.

use crate::formats::{Format, Heading};
use regex::Regex;
use std::sync::OnceLock;

/// Scans each line for an ATX-style heading (# syntax).
pub struct MarkdownFormat;

fn heading_pattern() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| Regex::new(r"^(#{1,6})[ \t]+(\S.*)$").expect("valid heading pattern"))
}

#[must_use]
/// Parse a single line as a heading, returning its level and text.
pub fn parse_heading_line(line: &str) -> Option<(u8, &str)> {
    let caps = heading_pattern().captures(line)?;
    let marker = caps.get(1)?;
    let text = caps.get(2)?.as_str().trim_end();
    let level = u8::try_from(marker.as_str().len()).ok()?;
    Some((level, text))
}

impl Format for MarkdownFormat {
    fn headings(&self, content: &str) -> Vec<Heading> {
        content
            .split('\n')
            .enumerate()
            .filter_map(|(line, text)| {
                parse_heading_line(text).map(|(level, raw)| Heading {
                    line,
                    level,
                    raw_text: raw.to_string(),
                })
            })
            .collect()
    }
}
