//! navgen CLI - Sidebar navigation generator.
//!
//! Provides commands for:
//! - `build`: Build the sidebar and print it as JSON
//! - `summary`: Show discovered groups and item counts

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, SummaryArgs};
use output::Output;

/// navgen - Sidebar navigation generator.
#[derive(Parser)]
#[command(name = "navgen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sidebar as JSON.
    Build(BuildArgs),
    /// Show sidebar groups and item counts.
    Summary(SummaryArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Build(args) => args.source.verbose,
        Commands::Summary(args) => args.source.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Summary(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
