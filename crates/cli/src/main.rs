//! Content build tool for Manual worlds.
//!
//! Compiles `content.json` (or `content.ron`) from the data directory into
//! `items.json`, `locations.json`, `categories.json`, and `options.json`.
//! Run with: `cargo run -p world-builder -- <command>`

mod commands;
mod config;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Check, Generate, Stats};

/// Content build tool for Manual worlds
#[derive(Parser)]
#[command(name = "world-builder")]
#[command(about = "Compile world content into Manual tables", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Compile content and write the four table files
    Generate(Generate),

    /// Compile content and report unresolved references
    Check(Check),

    /// Print table sizes and option help for the compiled content
    Stats(Stats),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for WORLD_DATA_DIR and friends)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate(cmd) => cmd.execute(),
        Command::Check(cmd) => cmd.execute(),
        Command::Stats(cmd) => cmd.execute(),
    }
}
