//! docnav CLI - navigation descriptor tooling for documentation sites.
//!
//! Provides commands for:
//! - `check`: Validate the navigation descriptor
//! - `resolve`: Show which sidebar a route gets
//! - `export`: Write the configuration in the site host's shape

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, ResolveArgs};
use output::Output;

/// docnav - navigation descriptor tooling for documentation sites.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the navigation descriptor.
    Check(CheckArgs),
    /// Show the sidebar section selected for a route.
    Resolve(ResolveArgs),
    /// Write the site configuration in the host's format.
    Export(ExportArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
        Commands::Export(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
