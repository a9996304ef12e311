//! The edit plan batches generated-text placements across drafts.
//!
//! A plan is a serialisable list of edits, each naming a draft, a target section (or
//! cursor selection) and the text to place there. Edits are grouped by draft and
//! applied in plan order, re-resolving sections against each intermediate document
//! so earlier edits never leave later ones pointing at stale lines.

use crate::document::Document;
use crate::error::Result;
use crate::formats::FormatKind;
use crate::patch::{self, AppliedEdit, GenerationTarget};
use crate::store::DraftStore;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
/// Serialisable collection of draft modifications.
pub struct EditPlan {
    /// Individual placements in application order.
    pub edits: Vec<Edit>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
/// Target and content for one placement of generated text.
pub struct Edit {
    /// Draft id (a file path for `FsStore`).
    pub file_name: String,
    /// Section, mode and selection to place the text at.
    #[serde(flatten)]
    pub target: GenerationTarget,
    /// Generated text.
    pub replacement: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
/// Every edit applied to one draft, and its final text.
pub struct FileOutcome {
    /// Draft id.
    pub file_name: String,
    /// Per-edit outcomes in plan order.
    pub applied: Vec<AppliedEdit>,
    /// Draft text after all of its edits.
    pub new_content: String,
    /// Draft text before the plan ran.
    pub original: String,
}

impl FileOutcome {
    #[must_use]
    /// True when the edits left the draft untouched.
    pub fn is_unchanged(&self) -> bool {
        self.original == self.new_content
    }
}

impl EditPlan {
    /// Decode a plan from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a plan.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Run every edit in memory without saving.
    ///
    /// Drafts are listed in the order they first appear in the plan.
    ///
    /// # Errors
    ///
    /// Returns an error if a draft cannot be loaded.
    pub fn compute(
        &self,
        store: &dyn DraftStore,
        format: FormatKind,
        sentinel: &str,
    ) -> Result<Vec<FileOutcome>> {
        let mut file_groups: Vec<(&str, Vec<&Edit>)> = Vec::new();
        for edit in &self.edits {
            match file_groups.iter_mut().find(|(name, _)| *name == edit.file_name) {
                Some((_, group)) => group.push(edit),
                None => file_groups.push((edit.file_name.as_str(), vec![edit])),
            }
        }

        let mut outcomes = Vec::with_capacity(file_groups.len());
        for (file_name, edits) in file_groups {
            let original = store.load(file_name)?;
            let mut doc = Document::with_format(original.clone(), format);
            let mut applied = Vec::with_capacity(edits.len());

            for edit in edits {
                let outcome = patch::apply_generated(&doc, &edit.target, &edit.replacement, sentinel);
                tracing::debug!(
                    file = file_name,
                    section = %edit.target.section,
                    fell_back = outcome.fell_back,
                    "applied edit"
                );
                doc = doc.successor(outcome.result.new_content.clone());
                applied.push(outcome);
            }

            outcomes.push(FileOutcome {
                file_name: file_name.to_string(),
                applied,
                new_content: doc.content().to_string(),
                original,
            });
        }
        Ok(outcomes)
    }

    /// Apply all edits and save every changed draft.
    ///
    /// All drafts are computed before any is written, so a load failure leaves every
    /// draft untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a draft cannot be loaded or saved.
    pub fn apply(
        &self,
        store: &dyn DraftStore,
        format: FormatKind,
        sentinel: &str,
    ) -> Result<Vec<FileOutcome>> {
        let outcomes = self.compute(store, format, sentinel)?;
        for outcome in &outcomes {
            if !outcome.is_unchanged() {
                store.save(&outcome.file_name, &outcome.new_content)?;
            }
        }
        Ok(outcomes)
    }
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
