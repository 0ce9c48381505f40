//! # spincorr CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spincorr_cli::generate::{run_generate, GenerateArgs};
use spincorr_cli::query::{run_query, QueryArgs};
use spincorr_cli::serve::{run_serve, ServeArgs};
use spincorr_cli::validate::{run_validate, ValidateArgs};

/// Spin Correlation Stack CLI.
///
/// Generates, validates, serves, and queries the precomputed spin
/// correlation grids consumed by the interactive explorer.
#[derive(Parser, Debug)]
#[command(name = "spincorr", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate precomputed grid artifacts for every parameter combination.
    Generate(GenerateArgs),

    /// Validate an artifact directory against the grid shape invariants.
    Validate(ValidateArgs),

    /// Interpolate one grid at given angles and print the matrix and axes.
    Query(QueryArgs),

    /// Serve grid artifacts over HTTP.
    Serve(ServeArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Generate(args) => run_generate(&args),
        Commands::Validate(args) => run_validate(&args),
        Commands::Query(args) => run_query(&args).await,
        Commands::Serve(args) => run_serve(&args).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
