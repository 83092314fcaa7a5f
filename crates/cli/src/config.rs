//! Build configuration from environment variables and command-line flags.
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use world_content::ContentLoader;

use crate::dirs;

/// Project-local data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "src/data";

/// Where content is read from and where the tables are written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildConfig {
    /// Directory holding the content file and receiving the artifacts.
    pub data_dir: Option<PathBuf>,
    /// Content file; relative paths resolve against the data directory.
    pub content_file: Option<PathBuf>,
    /// Run the reference validation pass during `generate`.
    pub strict: bool,
}

impl BuildConfig {
    /// Construct build configuration from environment variables.
    ///
    /// Environment variables:
    /// - `WORLD_DATA_DIR` - Data directory (default: `src/data`)
    /// - `WORLD_CONTENT_FILE` - Content file (default: `content.json`, then `content.ron`)
    /// - `WORLD_STRICT` - Validate references before writing: `true`/`1`/`yes` (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("WORLD_DATA_DIR") {
            config.data_dir = Some(dir);
        }
        if let Some(file) = read_env::<PathBuf>("WORLD_CONTENT_FILE") {
            config.content_file = Some(file);
        }
        if let Some(strict) = env::var("WORLD_STRICT").ok().and_then(|v| parse_flag(&v)) {
            config.strict = strict;
        }

        config
    }

    /// Applies command-line values on top of the environment. The strict flag
    /// only ever enables validation.
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        content_file: Option<PathBuf>,
        strict: bool,
    ) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        if content_file.is_some() {
            self.content_file = content_file;
        }
        self.strict |= strict;
        self
    }

    /// The data directory, falling back to `src/data` when it exists and to
    /// the platform data directory otherwise.
    pub fn resolved_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        let local = PathBuf::from(DEFAULT_DATA_DIR);
        if local.is_dir() {
            return local;
        }
        dirs::fallback_data_dir()
    }

    /// The content file to compile.
    pub fn content_path(&self) -> Result<PathBuf> {
        let data_dir = self.resolved_data_dir();
        match &self.content_file {
            Some(file) => Ok(resolve_against(&data_dir, file)),
            None => match ContentLoader::find_in(&data_dir) {
                Some(path) => Ok(path),
                None => bail!(
                    "No content.json or content.ron in {}\n\
                     Set WORLD_DATA_DIR or pass --data-dir / --content.",
                    data_dir.display()
                ),
            },
        }
    }
}

fn resolve_against(dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        dir.join(file)
    }
}

/// Parses a boolean environment value, accepting the usual spellings.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
