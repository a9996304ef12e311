//! Resolve a section label to the line range it occupies.
//!
//! Labels are matched loosely: both the label and each heading are normalized, and
//! the first heading (in document order) whose text contains the label wins. This
//! lets a plain `Overview` address `## 🎯 Overview`. A missing section is not an
//! error; the returned range says `exists: false` and points at the end of the
//! document, and callers switch to cursor insertion.

use crate::document;
use crate::normalize::{contains_normalized, eq_normalized, normalize};
use crate::section::{HeaderNode, SectionTree};
use serde::{Deserialize, Serialize};

/// Label addressing the whole document rather than a section.
pub const FULL_DOCUMENT: &str = "Full Document";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Half-open line range targeted by a section patch.
pub struct ResolvedRange {
    /// First content line (the line after the heading).
    pub start_line: usize,
    /// Line where the section ends (exclusive).
    pub end_line: usize,
    /// Whether the section was found.
    pub exists: bool,
    /// Whether the range is the whole document.
    pub is_full_document: bool,
}

impl ResolvedRange {
    #[must_use]
    /// Range covering every line of a document.
    pub fn full_document(total_lines: usize) -> Self {
        Self {
            start_line: 0,
            end_line: total_lines,
            exists: true,
            is_full_document: true,
        }
    }

    #[must_use]
    /// Zero-width hint at the end of the document for a section that is absent.
    pub fn missing(total_lines: usize) -> Self {
        Self {
            start_line: total_lines,
            end_line: total_lines,
            exists: false,
            is_full_document: false,
        }
    }

    #[must_use]
    /// Content range of a header node, excluding the heading line.
    pub fn of_node(node: &HeaderNode) -> Self {
        Self {
            start_line: node.content_start(),
            end_line: node.end_line,
            exists: true,
            is_full_document: false,
        }
    }

    #[must_use]
    /// Number of lines in the range.
    pub fn len(&self) -> usize {
        self.end_line.saturating_sub(self.start_line)
    }

    #[must_use]
    /// True for a zero-width range.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[must_use]
/// Whether a label is the full-document sentinel, ignoring decorations and case.
pub fn is_full_document(label: &str, sentinel: &str) -> bool {
    eq_normalized(label, sentinel)
}

#[must_use]
/// Whether a header answers to a label.
pub fn header_matches(node: &HeaderNode, label: &str) -> bool {
    !normalize(label).is_empty() && contains_normalized(&node.normalized_text, label)
}

#[must_use]
/// Resolve a label against document text.
pub fn locate(content: &str, label: &str) -> ResolvedRange {
    locate_in(&document::parse(content), label, FULL_DOCUMENT)
}

#[must_use]
/// Resolve a label against an already parsed tree.
///
/// `sentinel` is the label meaning "the whole document".
pub fn locate_in(tree: &SectionTree, label: &str, sentinel: &str) -> ResolvedRange {
    if is_full_document(label, sentinel) {
        return ResolvedRange::full_document(tree.total_lines);
    }

    let mut candidates = tree.nodes.iter().filter(|node| header_matches(node, label));
    let Some(node) = candidates.next() else {
        tracing::debug!(label, "section not found");
        return ResolvedRange::missing(tree.total_lines);
    };

    let others = candidates.count();
    if others > 0 {
        tracing::debug!(
            label,
            heading = %node.raw_text,
            others,
            "ambiguous section label, using first match"
        );
    }
    ResolvedRange::of_node(node)
}

#[must_use]
/// Text currently occupying a section, `None` if it is absent.
pub fn extract_section_content(content: &str, label: &str) -> Option<String> {
    let range = locate(content, label);
    match (range.exists, range.is_full_document) {
        (false, _) => None,
        (true, true) => Some(content.to_string()),
        (true, false) => Some(document::range_text(
            content,
            range.start_line,
            range.end_line,
        )),
    }
}

#[cfg(test)]
#[path = "tests/locate.rs"]
mod tests;
