//! Platform-specific directory utilities

use std::path::PathBuf;

/// Data directory used when no project-local `src/data` exists.
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/world-builder`
/// - Linux: `~/.local/share/world-builder` (or `$XDG_DATA_HOME/world-builder`)
/// - Windows: `%APPDATA%\world-builder`
/// - Fallback: `./data`
pub fn fallback_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "world-builder")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}
