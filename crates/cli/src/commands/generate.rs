//! Generate the four table files from the content description.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use super::{ContentArgs, compile_content};

/// Compile content and write the four table files
#[derive(Parser, Debug)]
pub struct Generate {
    #[command(flatten)]
    pub content: ContentArgs,

    /// Fail if any reference does not resolve (also enabled by WORLD_STRICT=1)
    #[arg(long)]
    pub strict: bool,

    /// Compile and report without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Generate {
    pub fn execute(self) -> Result<()> {
        let config = self.content.config(self.strict);
        let tables = compile_content(&config)?;

        if config.strict {
            tables
                .validate()
                .context("Reference validation failed (run `check` for the full list)")?;
        }

        println!(
            "{} {} items, {} locations, {} categories, {} options",
            style("Compiled").green().bold(),
            tables.item_count(),
            tables.locations.len(),
            tables.categories.len(),
            tables.options.len(),
        );

        let data_dir = config.resolved_data_dir();
        if self.dry_run {
            println!(
                "{}",
                style(format!("Dry run: nothing written to {}", data_dir.display())).dim()
            );
            return Ok(());
        }

        let written = world_content::write_artifacts(&tables, &data_dir)
            .with_context(|| format!("Failed to write tables to {}", data_dir.display()))?;
        for path in written {
            println!("  {} {}", style("→").cyan(), path.display());
        }

        Ok(())
    }
}
