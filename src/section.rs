//! Section representation for parsed documents.
//!
//! A section represents a hierarchical division of a document, introduced by a
//! heading. Sections end implicitly at the next heading of equal or higher rank
//! (lower or equal level number), or at the end of the document. Header nodes track
//! their position in the hierarchy through parent/child indices and keep line
//! coordinates so content can be extracted and replaced without touching anything
//! else.

use crate::formats::Heading;
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Heading with the half-open line range of the section it introduces.
pub struct HeaderNode {
    /// Nesting depth in the document hierarchy (1 for top-level).
    pub level: u8,
    /// Heading text as written, decorations included.
    pub raw_text: String,
    /// Heading text with decorations stripped, used only for matching.
    pub normalized_text: String,
    /// Line of the heading itself.
    pub start_line: usize,
    /// Line where the next heading of equal or higher rank begins, or the line count.
    pub end_line: usize,
    /// Index of the containing section in the hierarchy.
    pub parent_index: Option<usize>,
    /// Indices of directly nested subsections.
    pub children_indices: Vec<usize>,
}

impl HeaderNode {
    #[must_use]
    /// The heading as a markdown line, e.g. `## 🎯 Overview`.
    pub fn heading_line(&self) -> String {
        format!("{} {}", "#".repeat(usize::from(self.level)), self.raw_text)
    }

    #[must_use]
    /// First line of section content (the line after the heading).
    pub fn content_start(&self) -> usize {
        self.start_line + 1
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Ordered header nodes of one document plus its line count.
pub struct SectionTree {
    /// Header nodes in document order.
    pub nodes: Vec<HeaderNode>,
    /// Number of `\n`-separated lines in the document.
    pub total_lines: usize,
}

impl SectionTree {
    #[must_use]
    /// Resolve section boundaries and hierarchy from a format's headings.
    ///
    /// Headings are expected in document order. Boundaries are found in one pass with
    /// a stack of open sections: a heading closes every open section of equal or
    /// deeper level, and whatever is left on the stack becomes its parent.
    pub fn build(headings: Vec<Heading>, total_lines: usize) -> Self {
        let mut nodes: Vec<HeaderNode> = Vec::with_capacity(headings.len());
        let mut open: Vec<usize> = Vec::new();

        for heading in headings {
            let index = nodes.len();
            while let Some(&top) = open.last() {
                if nodes[top].level < heading.level {
                    break;
                }
                nodes[top].end_line = heading.line;
                open.pop();
            }

            let parent_index = open.last().copied();
            if let Some(parent) = parent_index {
                nodes[parent].children_indices.push(index);
            }

            nodes.push(HeaderNode {
                level: heading.level,
                normalized_text: normalize(&heading.raw_text),
                raw_text: heading.raw_text,
                start_line: heading.line,
                end_line: total_lines,
                parent_index,
                children_indices: Vec::new(),
            });
            open.push(index);
        }

        Self { nodes, total_lines }
    }

    #[must_use]
    /// True when the document has no headings and is one implicit section.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    /// Moves to the containing section in the document hierarchy.
    pub fn parent(&self, index: usize) -> Option<usize> {
        self.nodes.get(index)?.parent_index
    }

    #[must_use]
    /// Directly nested subsections of a node.
    pub fn children(&self, index: usize) -> &[usize] {
        self.nodes
            .get(index)
            .map_or(&[], |node| node.children_indices.as_slice())
    }

    #[must_use]
    /// Finds the next section at the same hierarchy level.
    pub fn next_sibling(&self, index: usize) -> Option<usize> {
        let level = self.nodes.get(index)?.level;
        for (i, node) in self.nodes.iter().enumerate().skip(index + 1) {
            if node.level == level {
                return Some(i);
            }
            // Stop once we climb out of the parent
            if node.level < level {
                break;
            }
        }
        None
    }

    #[must_use]
    /// Finds the previous section at the same hierarchy level.
    pub fn prev_sibling(&self, index: usize) -> Option<usize> {
        let level = self.nodes.get(index)?.level;
        for (i, node) in self.nodes[..index].iter().enumerate().rev() {
            if node.level == level {
                return Some(i);
            }
            if node.level < level {
                break;
            }
        }
        None
    }

    #[must_use]
    /// Flat, non-overlapping line ranges covering the whole document.
    ///
    /// The first entry is the preamble before the first heading (omitted when empty);
    /// every node then owns the lines from its heading up to the next heading of any
    /// level.
    pub fn segments(&self) -> Vec<(usize, usize)> {
        let mut segments = Vec::with_capacity(self.nodes.len() + 1);
        let first = self.nodes.first().map_or(self.total_lines, |n| n.start_line);
        if first > 0 {
            segments.push((0, first));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            let end = self
                .nodes
                .get(i + 1)
                .map_or(self.total_lines, |next| next.start_line);
            segments.push((node.start_line, end));
        }
        segments
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
