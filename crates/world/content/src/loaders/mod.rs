//! Loaders for reading content descriptions from disk.
//!
//! JSON is the canonical format; RON is accepted for hand-edited content.

pub mod content;

pub use content::{ContentFormat, ContentLoader};

use std::path::Path;

use crate::error::{ContentError, Result};

/// Reads a whole file, attaching the path to any I/O failure.
pub(crate) fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })
}
