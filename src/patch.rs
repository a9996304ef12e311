//! The patch engine: scoped replacement of one section, the whole document, or a
//! cursor selection.
//!
//! Every patch returns a fresh string; the input is never modified. A section patch
//! rewrites only the lines of the resolved range, so the heading and everything
//! outside the range come back byte-for-byte. Patching a section with its own
//! current content returns the input unchanged, and re-applying the same text after
//! re-resolving the section changes nothing further.

use crate::document::Document;
use crate::locate::ResolvedRange;
use crate::offsets::{byte_to_utf16, clamp, utf16_len, utf16_to_byte};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Span of inserted text in the new content, in UTF-16 code units.
pub struct OffsetRange {
    /// Offset of the first inserted code unit.
    pub start_offset: usize,
    /// Offset just past the inserted text.
    pub end_offset: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// New document text plus where the replacement landed.
pub struct PatchResult {
    /// Full document after the patch.
    pub new_content: String,
    /// Where the replacement text sits in `new_content`.
    pub inserted_range: OffsetRange,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Cursor or selection reported by the editing surface, in UTF-16 code units.
pub struct Selection {
    /// Selection anchor.
    pub start: i64,
    /// Selection head; equal to `start` for a bare cursor.
    pub end: i64,
}

impl Selection {
    #[must_use]
    /// A bare cursor at `offset`.
    pub fn cursor(offset: i64) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Where a patch applies.
pub enum PatchTarget {
    /// A resolved section (or the whole document).
    Section(ResolvedRange),
    /// Raw UTF-16 offsets into the content.
    Cursor {
        /// Selection start.
        start: i64,
        /// Selection end.
        end: i64,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// How generated text should be placed.
pub enum InsertMode {
    #[default]
    /// Replace the named section, falling back to the cursor if it is absent.
    ReplaceSection,
    /// Insert at the selection regardless of sections.
    AtCursor,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// What a piece of generated text is aimed at.
pub struct GenerationTarget {
    /// Section label, or the full-document label.
    pub section: String,
    /// Placement strategy.
    #[serde(default)]
    pub mode: InsertMode,
    /// Selection used for cursor placement.
    #[serde(default)]
    pub selection: Selection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Concrete target chosen for a generation request.
pub struct PlannedTarget {
    /// Target the patch will be applied to.
    pub target: PatchTarget,
    /// True when a section was requested but missing, so the cursor was used instead.
    pub fell_back: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Outcome of applying generated text to a document.
pub struct AppliedEdit {
    /// Patched text and inserted span.
    pub result: PatchResult,
    /// Target that was actually used.
    pub target: PatchTarget,
    /// True when the requested section was missing.
    pub fell_back: bool,
}

#[must_use]
/// Replace the lines of a resolved range with `replacement`.
///
/// The range excludes the heading, so the heading is kept. A full-document range
/// swaps in `replacement` wholesale; a range that does not exist inserts at its
/// (zero-width) hint line.
pub fn apply_section_patch(content: &str, range: &ResolvedRange, replacement: &str) -> PatchResult {
    if range.is_full_document {
        return PatchResult {
            new_content: replacement.to_string(),
            inserted_range: OffsetRange {
                start_offset: 0,
                end_offset: utf16_len(replacement),
            },
        };
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let start = range.start_line.min(lines.len());
    let end = range.end_line.clamp(start, lines.len());
    let prefix: usize = lines[..start].iter().map(|line| utf16_len(line) + 1).sum();

    if start == end && replacement.is_empty() {
        let at = prefix.min(utf16_len(content));
        return PatchResult {
            new_content: content.to_string(),
            inserted_range: OffsetRange {
                start_offset: at,
                end_offset: at,
            },
        };
    }

    let mut patched: Vec<&str> = Vec::with_capacity(lines.len() - (end - start) + 1);
    patched.extend_from_slice(&lines[..start]);
    patched.extend(replacement.split('\n'));
    patched.extend_from_slice(&lines[end..]);

    PatchResult {
        new_content: patched.join("\n"),
        inserted_range: OffsetRange {
            start_offset: prefix,
            end_offset: prefix + utf16_len(replacement),
        },
    }
}

#[must_use]
/// Splice `replacement` between two UTF-16 offsets.
///
/// Equal offsets insert; differing offsets replace the selection. Offsets are
/// clamped to the content and a reversed pair is reordered.
pub fn apply_cursor_patch(content: &str, start: i64, end: i64, replacement: &str) -> PatchResult {
    let (mut start, mut end) = (clamp(content, start), clamp(content, end));
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }
    let start_byte = utf16_to_byte(content, start);
    let end_byte = utf16_to_byte(content, end);

    let mut new_content = String::with_capacity(content.len() + replacement.len());
    new_content.push_str(&content[..start_byte]);
    new_content.push_str(replacement);
    new_content.push_str(&content[end_byte..]);

    let start_offset = byte_to_utf16(content, start_byte);
    PatchResult {
        new_content,
        inserted_range: OffsetRange {
            start_offset,
            end_offset: start_offset + utf16_len(replacement),
        },
    }
}

#[must_use]
/// Apply `replacement` at any target.
pub fn apply_patch(content: &str, target: &PatchTarget, replacement: &str) -> PatchResult {
    match target {
        PatchTarget::Section(range) => apply_section_patch(content, range, replacement),
        PatchTarget::Cursor { start, end } => apply_cursor_patch(content, *start, *end, replacement),
    }
}

#[must_use]
/// Choose the concrete target for a generation request.
///
/// Section mode resolves the label; when the section is missing the request falls
/// back to the selection. `sentinel` is the full-document label.
pub fn plan_target(doc: &Document, request: &GenerationTarget, sentinel: &str) -> PlannedTarget {
    let cursor = PatchTarget::Cursor {
        start: request.selection.start,
        end: request.selection.end,
    };
    if request.mode == InsertMode::AtCursor {
        return PlannedTarget {
            target: cursor,
            fell_back: false,
        };
    }

    let range = doc.locate_with_sentinel(&request.section, sentinel);
    if range.exists {
        PlannedTarget {
            target: PatchTarget::Section(range),
            fell_back: false,
        }
    } else {
        tracing::warn!(
            section = %request.section,
            "section not found, falling back to cursor insertion"
        );
        PlannedTarget {
            target: cursor,
            fell_back: true,
        }
    }
}

#[must_use]
/// Place generated text into a document according to a request.
pub fn apply_generated(
    doc: &Document,
    request: &GenerationTarget,
    text: &str,
    sentinel: &str,
) -> AppliedEdit {
    let planned = plan_target(doc, request, sentinel);
    AppliedEdit {
        result: apply_patch(doc.content(), &planned.target, text),
        target: planned.target,
        fell_back: planned.fell_back,
    }
}

#[cfg(test)]
#[path = "tests/patch.rs"]
mod tests;
