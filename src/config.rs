//! Configuration to acknowledge author preferences as well as set defaults.
//!
//! Specifically, we try to find a prdpatch.toml, and if present we load settings from there.
//! This provides file extensions, the full-document label, the heading format, backup
//! behaviour and optionally a replacement section template.

use crate::error::{Error, Result};
use crate::formats::FormatKind;
use crate::template::{Criticality, SectionDescriptor, Template};
use facet::Facet;
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "prdpatch.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from prdpatch.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = "Full Document".to_string())]
    /// Section label meaning the whole document.
    pub full_document_label: String,
    #[facet(default = false)]
    /// Parse headings with tree-sitter-md so fenced code is skipped.
    pub fence_aware: bool,
    #[facet(default = true)]
    /// Keep a `.bak` copy when overwriting a draft.
    pub backup: bool,
    #[facet(default = Vec::new())]
    /// Replacement section template; empty keeps the built-in PRD template.
    pub template: Vec<TemplateEntry>,
}

#[derive(Facet, Clone, Debug)]
/// One `[[template]]` table in the config file.
pub struct TemplateEntry {
    /// Heading text the section is recognised by.
    pub token: String,
    /// Name used in reports.
    pub label: String,
    #[facet(default = true)]
    /// Whether the section counts toward completeness.
    pub required: bool,
    #[facet(default = None)]
    /// Restrict matching to one heading level.
    pub level: Option<u8>,
    #[facet(default = None)]
    /// Decoration used when rendering a skeleton.
    pub icon: Option<String>,
}

impl From<&TemplateEntry> for SectionDescriptor {
    fn from(entry: &TemplateEntry) -> Self {
        Self {
            token: entry.token.clone(),
            label: entry.label.clone(),
            criticality: if entry.required {
                Criticality::Required
            } else {
                Criticality::Recommended
            },
            level: entry.level,
            icon: entry.icon.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_extensions: vec!["md".to_string()],
            full_document_label: crate::locate::FULL_DOCUMENT.to_string(),
            fence_aware: false,
            backup: true,
            template: Vec::new(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from prdpatch.toml if present.
    ///
    /// A missing file gives the defaults; an unreadable or invalid one is reported
    /// and also gives the defaults.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.is_file() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid config TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse config TOML, every field optional.
    ///
    /// # Errors
    ///
    /// Returns the parser diagnostic if the TOML does not describe a config.
    pub fn parse(contents: &str) -> std::result::Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }

    #[must_use]
    /// The section template to check against.
    pub fn template(&self) -> Template {
        if self.template.is_empty() {
            Template::prd()
        } else {
            Template::new(self.template.iter().map(SectionDescriptor::from).collect())
        }
    }

    #[must_use]
    /// The heading format to parse drafts with.
    pub fn format(&self) -> FormatKind {
        if self.fence_aware {
            FormatKind::Fenced
        } else {
            FormatKind::Markdown
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
