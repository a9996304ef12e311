//! Error types for the I/O-facing layers.
//!
//! Parsing, locating, patching and previewing are total functions and never
//! return these. Only configuration loading, the draft store, edit plans and
//! JSON output can fail, and they all report through [`Error`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Failures raised while reading or writing drafts, configs and plans.
pub enum Error {
    #[error("IO error: {0}")]
    /// Underlying filesystem failure.
    Io(#[from] std::io::Error),

    #[error("Invalid config {path}: {message}")]
    /// The TOML config exists but could not be parsed.
    Config {
        /// Config file that failed to parse.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    #[error("Invalid edit plan: {0}")]
    /// An edit plan could not be decoded.
    Plan(#[from] serde_json::Error),

    #[error("Could not serialise output: {0}")]
    /// A report or result could not be written as JSON.
    Output(#[source] serde_json::Error),

    #[error("Draft not found: {0}")]
    /// The store has no draft under this id.
    NotFound(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
