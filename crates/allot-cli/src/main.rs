//! Allot CLI - Command-line interface for constrained portfolio allocation.
//!
//! # Usage
//!
//! ```bash
//! # Allocate a total across instruments
//! allot compute --input request.json
//!
//! # Same request with a custom solver configuration, as JSON
//! allot --format json compute --input request.json --config engine.toml
//!
//! # List the region labels
//! allot categories --dimension region
//!
//! # Equal-weight constraints for a set of instruments
//! allot defaults --input instruments.json --dimension region --dimension size
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so that json and csv output stay parseable
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("allot_math=debug,allot_portfolio=debug,allot_cli=debug")
        })
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Compute(args) => commands::compute::execute(args, format, quiet)?,
        Commands::Categories(args) => commands::categories::execute(args, format)?,
        Commands::Defaults(args) => commands::defaults::execute(args, format, quiet)?,
    }

    Ok(())
}
