//! Command implementations for world-builder
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check;
mod generate;
mod stats;

pub use check::Check;
pub use generate::Generate;
pub use stats::Stats;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use world_content::ContentLoader;
use world_core::WorldTables;

use crate::config::BuildConfig;

/// Location arguments shared by every command.
#[derive(Args, Debug, Default)]
pub struct ContentArgs {
    /// Data directory (overrides WORLD_DATA_DIR)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Content file, relative to the data directory unless absolute
    /// (overrides WORLD_CONTENT_FILE)
    #[arg(long, value_name = "FILE")]
    pub content: Option<PathBuf>,
}

impl ContentArgs {
    pub fn config(&self, strict: bool) -> BuildConfig {
        BuildConfig::from_env().with_overrides(self.data_dir.clone(), self.content.clone(), strict)
    }
}

/// Loads and compiles the configured content file.
pub fn compile_content(config: &BuildConfig) -> Result<WorldTables> {
    let path = config.content_path()?;
    tracing::info!("compiling {}", path.display());

    let content = ContentLoader::load(&path)
        .with_context(|| format!("Failed to load content: {}", path.display()))?;
    world_content::compile(&content)
        .with_context(|| format!("Failed to compile content: {}", path.display()))
}
