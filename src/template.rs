//! The canonical PRD section template.
//!
//! A template is plain configuration: an ordered list of section descriptors that a
//! compliant document should contain. It is passed explicitly to the compliance
//! check and can be swapped wholesale from the config file.

use crate::normalize::contains_normalized;
use crate::section::HeaderNode;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Whether a missing section lowers the completeness score.
pub enum Criticality {
    /// Counts toward the completeness percentage.
    Required,
    /// Reported when missing, never scored.
    Recommended,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One expected section of the template.
pub struct SectionDescriptor {
    /// Heading text the section is recognised by.
    pub token: String,
    /// Human-readable name used in reports.
    pub label: String,
    /// Whether the section is scored.
    pub criticality: Criticality,
    /// Only headers of this level satisfy the descriptor, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    /// Decoration placed before the token when rendering a skeleton.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SectionDescriptor {
    #[must_use]
    /// A required section, matched at any heading level.
    pub fn required(token: &str, label: &str) -> Self {
        Self {
            token: token.to_string(),
            label: label.to_string(),
            criticality: Criticality::Required,
            level: None,
            icon: None,
        }
    }

    #[must_use]
    /// A recommended section.
    pub fn recommended(token: &str, label: &str) -> Self {
        Self {
            criticality: Criticality::Recommended,
            ..Self::required(token, label)
        }
    }

    #[must_use]
    /// Restrict matching to one heading level.
    pub fn at_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use]
    /// Attach a skeleton decoration.
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    #[must_use]
    /// True for required descriptors.
    pub fn is_required(&self) -> bool {
        self.criticality == Criticality::Required
    }

    #[must_use]
    /// Whether a header satisfies this descriptor.
    ///
    /// The raw heading may contain the token verbatim, or the normalized heading may
    /// contain the normalized token ignoring case.
    pub fn matches(&self, node: &HeaderNode) -> bool {
        if self.level.is_some_and(|level| level != node.level) {
            return false;
        }
        node.raw_text.contains(&self.token) || contains_normalized(&node.normalized_text, &self.token)
    }

    #[must_use]
    /// Heading line for a skeleton document.
    pub fn heading_line(&self) -> String {
        let level = usize::from(self.level.unwrap_or(2));
        let text = if self.token.is_empty() {
            &self.label
        } else {
            &self.token
        };
        match &self.icon {
            Some(icon) => format!("{} {icon} {text}", "#".repeat(level)),
            None => format!("{} {text}", "#".repeat(level)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Ordered list of expected sections.
pub struct Template {
    /// Descriptors in canonical order.
    pub sections: Vec<SectionDescriptor>,
}

impl Template {
    #[must_use]
    /// Wrap a descriptor list.
    pub fn new(sections: Vec<SectionDescriptor>) -> Self {
        Self { sections }
    }

    #[must_use]
    /// The built-in PRD template: nine required sections and a recommended appendix.
    pub fn prd() -> Self {
        Self::new(vec![
            SectionDescriptor::required("", "Document title").at_level(1),
            SectionDescriptor::required("Overview", "Overview section").with_icon("🎯"),
            SectionDescriptor::required("Operational Targets", "Operational Targets section")
                .with_icon("📊"),
            SectionDescriptor::required("P0 – Must ship for viability", "P0 checklist")
                .with_icon("🔴"),
            SectionDescriptor::required("P1 – Should ship for launch", "P1 checklist")
                .with_icon("🟠"),
            SectionDescriptor::required("P2 – Nice to have", "P2 checklist")
                .with_icon("🟢"),
            SectionDescriptor::required("Tech Direction Snapshot", "Tech Direction Snapshot")
                .with_icon("🛠"),
            SectionDescriptor::required("Dependencies & Launch Plan", "Dependencies & Launch Plan")
                .with_icon("🚀"),
            SectionDescriptor::required("UX & Branding", "UX & Branding").with_icon("🎨"),
            SectionDescriptor::recommended("Appendix", "Appendix").with_icon("📎"),
        ])
    }

    /// Required descriptors in order.
    pub fn required(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.sections.iter().filter(|d| d.is_required())
    }

    #[must_use]
    /// An empty document with every template heading, in order.
    pub fn skeleton(&self, title: &str) -> String {
        let mut out = String::new();
        for descriptor in &self.sections {
            if descriptor.token.is_empty() {
                let level = usize::from(descriptor.level.unwrap_or(1));
                let _ = write!(out, "{} {title}\n\n", "#".repeat(level));
            } else {
                let _ = write!(out, "{}\n\n", descriptor.heading_line());
            }
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
        out
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::prd()
    }
}

#[cfg(test)]
#[path = "tests/template.rs"]
mod tests;
