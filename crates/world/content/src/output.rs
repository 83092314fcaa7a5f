//! Writes finalized tables into a data directory.

use std::path::{Path, PathBuf};

use world_core::WorldTables;

use crate::error::{ContentError, Result};

/// Renders the four artifacts and writes them into `dir`, creating it if
/// needed. Existing files are overwritten. Returns the written paths in
/// `items`, `locations`, `categories`, `options` order.
pub fn write_artifacts(tables: &WorldTables, dir: &Path) -> Result<Vec<PathBuf>> {
    let artifacts = tables.artifacts().map_err(|source| ContentError::Render {
        file_name: "tables",
        source,
    })?;

    std::fs::create_dir_all(dir).map_err(|source| ContentError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in &artifacts {
        let rendered = artifact.render().map_err(|source| ContentError::Render {
            file_name: artifact.file_name,
            source,
        })?;
        let path = dir.join(artifact.file_name);
        std::fs::write(&path, rendered).map_err(|source| ContentError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
