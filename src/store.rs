//! Draft persistence contract.
//!
//! The core only needs to load a draft's text and save new text back. `FsStore`
//! keeps drafts as files and can leave a `.bak` copy of the previous version behind
//! before each overwrite.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Load/save contract for draft text.
pub trait DraftStore {
    /// Current text of a draft.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is missing or unreadable.
    fn load(&self, id: &str) -> Result<String>;

    /// Replace a draft's text.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft cannot be written.
    fn save(&self, id: &str, content: &str) -> Result<()>;
}

#[derive(Clone, Debug)]
/// Drafts stored as files, ids resolved against a root directory.
pub struct FsStore {
    root: PathBuf,
    backup: bool,
}

impl FsStore {
    #[must_use]
    /// Store rooted at `root`; absolute ids bypass the root.
    pub fn new(root: impl Into<PathBuf>, backup: bool) -> Self {
        Self {
            root: root.into(),
            backup,
        }
    }

    #[must_use]
    /// File backing a draft id.
    pub fn path_of(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }

    #[must_use]
    /// Where the previous version of a draft is kept.
    pub fn backup_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".bak");
        path.with_file_name(name)
    }
}

impl DraftStore for FsStore {
    fn load(&self, id: &str) -> Result<String> {
        let path = self.path_of(id);
        if !path.is_file() {
            return Err(Error::NotFound(id.to_string()));
        }
        Ok(fs::read_to_string(path)?)
    }

    fn save(&self, id: &str, content: &str) -> Result<()> {
        let path = self.path_of(id);
        if self.backup && path.is_file() {
            let backup = Self::backup_path(&path);
            fs::copy(&path, &backup)?;
            tracing::debug!(backup = %backup.display(), "wrote backup");
        }
        fs::write(&path, content)?;
        tracing::info!(path = %path.display(), bytes = content.len(), "saved draft");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/store.rs"]
mod tests;
