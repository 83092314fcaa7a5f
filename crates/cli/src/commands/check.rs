//! Report unresolved references in the compiled tables.

use anyhow::Result;
use clap::Parser;
use console::style;

use super::{ContentArgs, compile_content};

/// Compile content and report unresolved references
#[derive(Parser, Debug)]
pub struct Check {
    #[command(flatten)]
    pub content: ContentArgs,
}

impl Check {
    pub fn execute(self) -> Result<()> {
        let config = self.content.config(true);
        let tables = compile_content(&config)?;
        let missing = tables.unresolved_references();

        if missing.is_empty() {
            println!("{}", style("✓ All references resolve").green().bold());
            return Ok(());
        }

        for err in &missing {
            println!("  {} {}", style("✗").red().bold(), err);
        }
        anyhow::bail!("{} unresolved reference(s)", missing.len())
    }
}
