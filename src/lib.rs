//! A section-aware markdown PRD editor core.
//!
//! prdpatch decomposes a draft into its heading hierarchy, checks it against a
//! canonical section template, and places generated text into exactly one section
//! (or the whole document, or a cursor selection) while leaving every other byte
//! alone.
#![allow(clippy::multiple_crate_versions)]

pub mod compliance;
pub mod config;
pub mod document;
pub mod edit_plan;
pub mod error;
pub mod formats;
pub mod input;
pub mod locate;
pub mod normalize;
pub mod offsets;
pub mod patch;
pub mod preview;
pub mod section;
pub mod store;
pub mod template;

pub use document::Document;
pub use error::{Error, Result};
