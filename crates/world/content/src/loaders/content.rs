//! Content description loader.

use std::path::Path;

use crate::description::ContentDescription;
use crate::error::{ContentError, Result};
use crate::loaders::read_file;

/// File names probed, in order, when only a directory is known.
pub const DEFAULT_CONTENT_FILES: [&str; 2] = ["content.json", "content.ron"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentFormat {
    Json,
    Ron,
}

impl ContentFormat {
    /// Picks the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "ron" => Some(Self::Ron),
            _ => None,
        }
    }
}

/// Loader for content descriptions from JSON or RON files.
pub struct ContentLoader;

impl ContentLoader {
    /// Load a content description, dispatching on the file extension.
    pub fn load(path: &Path) -> Result<ContentDescription> {
        let format =
            ContentFormat::from_path(path).ok_or_else(|| ContentError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;
        let text = read_file(path)?;
        let content = Self::parse(&text, format, path)?;

        tracing::debug!(
            "loaded content from {}: {} campaigns, {} extra episodes, {} characters, {} cards",
            path.display(),
            content.campaigns.len(),
            content.extra_episodes.len(),
            content.characters.len(),
            content.cards.len(),
        );
        Ok(content)
    }

    /// Parse content text already in memory. `path` is only used for errors.
    pub fn parse(text: &str, format: ContentFormat, path: &Path) -> Result<ContentDescription> {
        match format {
            ContentFormat::Json => serde_json::from_str(text).map_err(|source| ContentError::Json {
                path: path.to_path_buf(),
                source,
            }),
            ContentFormat::Ron => ron::from_str(text).map_err(|source| ContentError::Ron {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Finds the first default content file present in `dir`.
    pub fn find_in(dir: &Path) -> Option<std::path::PathBuf> {
        DEFAULT_CONTENT_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }
}
