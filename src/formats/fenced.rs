//! Markdown heading recognition using tree-sitter-md.
//!
//! This format parses the block structure of the document, so a `# comment` inside a
//! fenced shell snippet is not mistaken for a section boundary. Only ATX headings
//! (# syntax) with non-blank text are reported, matching what the line-based format
//! accepts outside code.

use crate::formats::markdown::MarkdownFormat;
use crate::formats::{Format, Heading};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

/// Tree-sitter queries for ATX-style markdown headings (# syntax).
pub struct FencedMarkdownFormat;

impl FencedMarkdownFormat {
    #[must_use]
    /// The tree-sitter-md block grammar.
    pub fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    #[must_use]
    /// Query capturing every ATX heading node.
    pub fn section_query(&self) -> &'static str {
        "(atx_heading) @heading"
    }

    fn parse(&self, content: &str) -> Option<Vec<Heading>> {
        let language = self.language();
        let mut parser = Parser::new();
        parser.set_language(&language).ok()?;
        let tree = parser.parse(content, None)?;
        let query = Query::new(&language, self.section_query()).ok()?;

        let source = content.as_bytes();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), source);

        let mut headings = Vec::new();
        while let Some(m) = matches.next() {
            for capture in m.captures {
                if let Some(heading) = heading_from_node(capture.node, source) {
                    headings.push(heading);
                }
            }
        }
        headings.sort_by_key(|h| h.line);
        headings.dedup_by_key(|h| h.line);
        Some(headings)
    }
}

fn heading_from_node(node: Node<'_>, source: &[u8]) -> Option<Heading> {
    let mut level = None;
    let mut text = None;

    let mut walker = node.walk();
    for child in node.children(&mut walker) {
        let kind = child.kind();
        if let Some(digit) = kind
            .strip_prefix("atx_h")
            .and_then(|rest| rest.strip_suffix("_marker"))
        {
            level = digit.parse::<u8>().ok();
        } else if kind == "inline" {
            text = child.utf8_text(source).ok();
        }
    }

    let raw_text = text?.trim();
    if raw_text.is_empty() {
        return None;
    }
    Some(Heading {
        line: node.start_position().row,
        level: level?,
        raw_text: raw_text.to_string(),
    })
}

impl Format for FencedMarkdownFormat {
    fn headings(&self, content: &str) -> Vec<Heading> {
        if let Some(headings) = self.parse(content) {
            headings
        } else {
            tracing::warn!("tree-sitter-md parse failed, falling back to line scan");
            MarkdownFormat.headings(content)
        }
    }
}
