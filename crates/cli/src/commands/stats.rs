//! Print table sizes and option help for the compiled content.

use anyhow::Result;
use clap::Parser;
use console::style;
use strum::IntoEnumIterator;
use world_core::{Table, WorldTables};

use super::{ContentArgs, compile_content};

/// Print table sizes and option help for the compiled content
#[derive(Parser, Debug)]
pub struct Stats {
    #[command(flatten)]
    pub content: ContentArgs,
}

impl Stats {
    pub fn execute(self) -> Result<()> {
        let config = self.content.config(false);
        let tables = compile_content(&config)?;

        println!("{}", style("World tables").bold());
        for table in Table::iter() {
            println!(
                "  {} {:>6}",
                style(format!("{table:<12}")).cyan(),
                entries(&tables, table)
            );
        }
        println!(
            "  {} {:>6}",
            style(format!("{:<12}", "item pool")).cyan(),
            tables.item_count()
        );

        let help = option_help(&tables);
        if !help.is_empty() {
            println!();
            println!("{}", style("Options").bold());
        }
        for (heading, lines) in help {
            println!("  {}", style(heading).cyan());
            for line in lines {
                println!("      {}", style(line).dim());
            }
        }

        Ok(())
    }
}

fn entries(tables: &WorldTables, table: Table) -> usize {
    match table {
        Table::Items => tables.items.len(),
        Table::Locations => tables.locations.len(),
        Table::Categories => tables.categories.len(),
        Table::Options => tables.options.len(),
    }
}

/// One `name (default: ..)` heading per option with its help text lines.
fn option_help(tables: &WorldTables) -> Vec<(String, Vec<String>)> {
    tables
        .options
        .iter()
        .map(|(name, option)| {
            let heading = format!("{name} (default: {})", option.default_value());
            let lines = option
                .description()
                .to_help_text()
                .lines()
                .map(str::to_owned)
                .collect();
            (heading, lines)
        })
        .collect()
}
