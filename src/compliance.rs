//! Template compliance: which expected sections a document has.
//!
//! Only presence is checked, not order. The completeness percentage is driven by
//! required sections alone; recommended ones are listed when missing but never move
//! the score.

use crate::section::HeaderNode;
use crate::template::{SectionDescriptor, Template};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Result of checking a document against a template.
pub struct ComplianceReport {
    /// Labels of every template section found, in template order.
    pub present_labels: Vec<String>,
    /// Required sections that are missing.
    pub missing_required: Vec<SectionDescriptor>,
    /// Recommended sections that are missing.
    pub missing_recommended: Vec<SectionDescriptor>,
    /// `round(100 * required present / required total)`, 0 when nothing is required.
    pub completeness_percent: u32,
}

impl ComplianceReport {
    #[must_use]
    /// True once every required section is present.
    pub fn is_compliant(&self) -> bool {
        self.missing_required.is_empty()
    }
}

#[must_use]
/// Check header nodes against a template.
pub fn check(nodes: &[HeaderNode], template: &Template) -> ComplianceReport {
    let mut present_labels = Vec::new();
    let mut missing_required = Vec::new();
    let mut missing_recommended = Vec::new();
    let mut required_total = 0_usize;
    let mut required_present = 0_usize;

    for descriptor in &template.sections {
        let present = nodes.iter().any(|node| descriptor.matches(node));
        if descriptor.is_required() {
            required_total += 1;
        }
        match (present, descriptor.is_required()) {
            (true, required) => {
                if required {
                    required_present += 1;
                }
                present_labels.push(descriptor.label.clone());
            }
            (false, true) => missing_required.push(descriptor.clone()),
            (false, false) => missing_recommended.push(descriptor.clone()),
        }
    }

    ComplianceReport {
        present_labels,
        missing_required,
        missing_recommended,
        completeness_percent: percent(required_present, required_total),
    }
}

/// Integer percentage rounded half up; zero when `total` is zero.
fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (200 * part + total) / (2 * total);
    u32::try_from(rounded).unwrap_or(100)
}

#[cfg(test)]
#[path = "tests/compliance.rs"]
mod tests;
