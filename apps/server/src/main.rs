//! docrouter: documentation context endpoints for coding agents.
//!
//! Serves per-library documentation snippets resolved from live docs sites,
//! static tables, or reference pages.

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
