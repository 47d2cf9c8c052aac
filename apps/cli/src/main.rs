//! docdex CLI — markdown tutorial index generator.
//!
//! Scans markdown tutorial sections and a JSON component catalog, then
//! renders cross-referenced markdown index pages.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
