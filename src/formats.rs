//! Format trait and implementations for heading recognition.
//!
//! This module defines the `Format` trait which abstracts over how headings are
//! recognised in a document. The default `MarkdownFormat` scans lines for ATX
//! headings; `FencedMarkdownFormat` asks tree-sitter-md instead, so `#` lines inside
//! fenced code blocks are left alone.

pub mod fenced;
pub mod markdown;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading as recognised by a format, before section boundaries are known.
pub struct Heading {
    /// Zero-based line index of the heading.
    pub line: usize,
    /// Heading depth, 1 through 6.
    pub level: u8,
    /// Heading text after the `#` marker, trailing whitespace removed.
    pub raw_text: String,
}

/// Recognises headings in a document.
pub trait Format {
    /// All headings in document order. Never fails; unrecognised lines are body text.
    fn headings(&self, content: &str) -> Vec<Heading>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Selects which [`Format`] a document is parsed with.
pub enum FormatKind {
    #[default]
    /// Line-based ATX heading scan.
    Markdown,
    /// tree-sitter-md parse that skips fenced code.
    Fenced,
}

impl FormatKind {
    #[must_use]
    /// The format implementation for this kind.
    pub fn format(self) -> &'static dyn Format {
        match self {
            Self::Markdown => &markdown::MarkdownFormat,
            Self::Fenced => &fenced::FencedMarkdownFormat,
        }
    }
}
