//! # Query — interpolate one grid at given angles
//!
//! Provides the `spincorr query` subcommand: loads a grid from a local
//! artifact directory or a deployed HTTP endpoint, interpolates at the
//! requested angles, and prints the correlation matrix and estimated
//! spin axes — or the full JSON export bundle with `--json`.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use spincorr_client::{FsGridSource, GridSource, HttpGridSource, HttpGridSourceConfig};
use spincorr_core::{CorrelationMatrix, ExportBundle, SpinParameters};
use spincorr_grid::SpinGrid;
use spincorr_interp::{correlation_matrix, spin_axes};
use url::Url;

/// Query subcommand arguments.
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Local artifact directory to load from.
    #[arg(long, conflicts_with = "url")]
    pub dir: Option<PathBuf>,

    /// Base URL of a deployed artifact endpoint to load from.
    #[arg(long)]
    pub url: Option<String>,

    /// Production mode (gg, qqbar).
    #[arg(long)]
    pub mode: String,

    /// Spin basis (helicity, beam, off-diagonal).
    #[arg(long)]
    pub basis: String,

    /// Energy preset (7TeV, 8TeV, 13TeV, 14TeV).
    #[arg(long)]
    pub energy: String,

    /// Polar angle in radians, [0, pi].
    #[arg(long)]
    pub theta: f64,

    /// Azimuthal angle in radians, [0, 2*pi].
    #[arg(long)]
    pub phi: f64,

    /// Emit the JSON export bundle instead of the text rendering.
    #[arg(long)]
    pub json: bool,
}

/// Execute the query subcommand.
pub async fn run_query(args: &QueryArgs) -> Result<u8> {
    let params = SpinParameters::new(
        args.mode.parse()?,
        args.basis.parse()?,
        args.energy.parse()?,
        args.theta,
        args.phi,
    )?;
    let key = params.grid_key();

    let grid: SpinGrid = match (&args.dir, &args.url) {
        (Some(dir), None) => FsGridSource::new(dir).fetch(&key).await?,
        (None, Some(url)) => {
            let base = Url::parse(url).with_context(|| format!("invalid base URL {url:?}"))?;
            HttpGridSource::new(HttpGridSourceConfig::new(base))?
                .fetch(&key)
                .await?
        }
        _ => bail!("exactly one of --dir or --url is required"),
    };

    let matrix = correlation_matrix(&grid, params.theta, params.phi);
    let axes = spin_axes(&matrix, params.theta, params.phi);

    if args.json {
        let bundle = ExportBundle::new(params, matrix);
        println!("{}", serde_json::to_string_pretty(&bundle)?);
        return Ok(0);
    }

    println!(
        "{} @ theta={:.3} phi={:.3}",
        key, params.theta, params.phi
    );
    println!();
    print_matrix(&matrix);
    println!();
    println!(
        "top     [{:>8.4} {:>8.4} {:>8.4}]",
        axes.top[0], axes.top[1], axes.top[2]
    );
    println!(
        "antitop [{:>8.4} {:>8.4} {:>8.4}]",
        axes.anti_top[0], axes.anti_top[1], axes.anti_top[2]
    );

    Ok(0)
}

/// Print the matrix with axis labels around the fixed-width cells.
fn print_matrix(matrix: &CorrelationMatrix) {
    println!("   {:>8} {:>8} {:>8}", "x", "y", "z");
    for (row, label) in ["x", "y", "z"].iter().enumerate() {
        println!(
            "{label}  {:>8.4} {:>8.4} {:>8.4}",
            matrix.get(row, 0),
            matrix.get(row, 1),
            matrix.get(row, 2)
        );
    }
}
