//! # Serve — run the artifact HTTP service
//!
//! Provides the `spincorr serve` subcommand, a thin wrapper over
//! [`spincorr_api::serve`].

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use spincorr_api::state::AppState;

/// Serve subcommand arguments.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Directory holding the generated grid artifacts.
    #[arg(long)]
    pub data_dir: PathBuf,

    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

/// Execute the serve subcommand. Runs until the process is stopped.
pub async fn run_serve(args: &ServeArgs) -> Result<u8> {
    if !args.data_dir.is_dir() {
        anyhow::bail!(
            "data dir {} does not exist; run `spincorr generate` first",
            args.data_dir.display()
        );
    }

    spincorr_api::serve(AppState::new(&args.data_dir), args.port)
        .await
        .context("artifact service terminated")?;
    Ok(0)
}
