//! Immutable document handle.
//!
//! A `Document` is a snapshot of draft text plus its lazily derived [`SectionTree`].
//! Nothing mutates a document in place: every patch yields new text, and wrapping
//! that text in a new `Document` discards the old tree along with the old snapshot.

use crate::formats::FormatKind;
use crate::locate::{self, ResolvedRange};
use crate::patch::PatchResult;
use crate::section::{HeaderNode, SectionTree};
use std::sync::OnceLock;

#[derive(Debug)]
/// Draft text with a section tree computed on first use.
pub struct Document {
    content: String,
    format: FormatKind,
    tree: OnceLock<SectionTree>,
}

impl Document {
    #[must_use]
    /// Wrap draft text, parsing headings line by line.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_format(content, FormatKind::Markdown)
    }

    #[must_use]
    /// Wrap draft text, parsing headings with the given format.
    pub fn with_format(content: impl Into<String>, format: FormatKind) -> Self {
        Self {
            content: content.into(),
            format,
            tree: OnceLock::new(),
        }
    }

    #[must_use]
    /// The document text.
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    /// The heading format this document is parsed with.
    pub fn format(&self) -> FormatKind {
        self.format
    }

    #[must_use]
    /// Number of `\n`-separated lines, always at least one.
    pub fn total_lines(&self) -> usize {
        self.tree().total_lines
    }

    #[must_use]
    /// Section tree, parsed once per document.
    pub fn tree(&self) -> &SectionTree {
        self.tree.get_or_init(|| parse_with(&self.content, self.format))
    }

    #[must_use]
    /// Header nodes in document order.
    pub fn headers(&self) -> &[HeaderNode] {
        &self.tree().nodes
    }

    #[must_use]
    /// Every header whose normalized text contains the normalized label.
    ///
    /// `locate` takes the first of these; more than one means the label is ambiguous.
    pub fn matching_headers(&self, label: &str) -> Vec<&HeaderNode> {
        self.headers()
            .iter()
            .filter(|node| locate::header_matches(node, label))
            .collect()
    }

    #[must_use]
    /// Resolve a section label against this document.
    pub fn locate(&self, label: &str) -> ResolvedRange {
        self.locate_with_sentinel(label, locate::FULL_DOCUMENT)
    }

    #[must_use]
    /// Resolve a section label, with a custom full-document label.
    pub fn locate_with_sentinel(&self, label: &str, sentinel: &str) -> ResolvedRange {
        locate::locate_in(self.tree(), label, sentinel)
    }

    #[must_use]
    /// Current text of a section's content range, or `None` if the section is absent.
    pub fn extract_section_content(&self, label: &str) -> Option<String> {
        let range = self.locate(label);
        if !range.exists {
            return None;
        }
        if range.is_full_document {
            return Some(self.content.clone());
        }
        Some(range_text(&self.content, range.start_line, range.end_line))
    }

    #[must_use]
    /// Replace the text, keeping the parse format.
    pub fn successor(&self, content: String) -> Self {
        Self::with_format(content, self.format)
    }
}

/// Always parses with the default [`FormatKind::Markdown`]; use
/// [`Document::successor`] to keep a document's format across patches.
impl From<PatchResult> for Document {
    fn from(result: PatchResult) -> Self {
        Self::new(result.new_content)
    }
}

impl Clone for Document {
    fn clone(&self) -> Self {
        Self::with_format(self.content.clone(), self.format)
    }
}

#[must_use]
/// Parse content into a section tree.
pub fn parse(content: &str) -> SectionTree {
    parse_with(content, FormatKind::Markdown)
}

#[must_use]
/// Parse content into a section tree with a specific format.
pub fn parse_with(content: &str, format: FormatKind) -> SectionTree {
    let total_lines = content.split('\n').count();
    let headings = format.format().headings(content);
    tracing::trace!(total_lines, headings = headings.len(), "parsed document");
    SectionTree::build(headings, total_lines)
}

/// Lines `[start, end)` joined with `\n`.
pub(crate) fn range_text(content: &str, start: usize, end: usize) -> String {
    content
        .split('\n')
        .skip(start)
        .take(end.saturating_sub(start))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
