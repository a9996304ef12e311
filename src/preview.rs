//! Before/after pairs for diff rendering.
//!
//! The preview never diffs anything itself. It runs the patch engine and hands the
//! untouched original plus the patched text to whatever renders the diff.

use crate::document::Document;
use crate::patch::{self, GenerationTarget, PatchTarget};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Original text and the text a patch would produce.
pub struct Preview {
    /// Input document, unchanged.
    pub original: String,
    /// Document after the patch.
    pub modified: String,
    /// True when a requested section was missing and the cursor was used.
    #[serde(default)]
    pub fell_back: bool,
}

impl Preview {
    #[must_use]
    /// True when the patch would not change anything.
    pub fn is_unchanged(&self) -> bool {
        self.original == self.modified
    }
}

#[must_use]
/// Preview a patch at an explicit target.
pub fn build_preview(original: &str, target: &PatchTarget, replacement: &str) -> Preview {
    Preview {
        original: original.to_string(),
        modified: patch::apply_patch(original, target, replacement).new_content,
        fell_back: false,
    }
}

#[must_use]
/// Preview generated text placed by a request, including the cursor fallback.
pub fn preview_generated(
    doc: &Document,
    request: &GenerationTarget,
    text: &str,
    sentinel: &str,
) -> Preview {
    let planned = patch::plan_target(doc, request, sentinel);
    Preview {
        fell_back: planned.fell_back,
        ..build_preview(doc.content(), &planned.target, text)
    }
}

#[cfg(test)]
#[path = "tests/preview.rs"]
mod tests;
