//! # Generate — build the precomputed grid artifacts
//!
//! Provides the `spincorr generate` subcommand.
//!
//! ## Usage
//!
//! ```bash
//! # All 24 combinations at the default 91x91 resolution:
//! spincorr generate --output-dir public/data/spin-grids
//!
//! # One production mode only, coarser mesh:
//! spincorr generate --output-dir grids --mode gg --theta-steps 31 --phi-steps 31
//!
//! # Resolution and output directory from a config file:
//! spincorr generate --config spincorr.yaml
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use spincorr_core::{EnergyPreset, GridKey, ProductionMode, SpinBasis};
use spincorr_grid::generate_into;

use crate::config::{resolve, GenerateConfig};

/// Generate subcommand arguments.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Artifact output directory. Defaults to `data/spin-grids`.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Theta mesh resolution (nodes, >= 2). Default 91.
    #[arg(long)]
    pub theta_steps: Option<usize>,

    /// Phi mesh resolution (nodes, >= 2). Default 91.
    #[arg(long)]
    pub phi_steps: Option<usize>,

    /// Restrict to one production mode (gg, qqbar).
    #[arg(long)]
    pub mode: Option<String>,

    /// Restrict to one basis (helicity, beam, off-diagonal).
    #[arg(long)]
    pub basis: Option<String>,

    /// Restrict to one energy preset (7TeV, 8TeV, 13TeV, 14TeV).
    #[arg(long)]
    pub energy: Option<String>,

    /// YAML config file for resolution and output directory. Flags
    /// override file values.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Execute the generate subcommand.
pub fn run_generate(args: &GenerateArgs) -> Result<u8> {
    let file = match &args.config {
        Some(path) => GenerateConfig::from_file(path)?,
        None => GenerateConfig::default(),
    };
    let config = resolve(
        &file,
        args.theta_steps,
        args.phi_steps,
        args.output_dir.clone(),
    );

    let mode: Option<ProductionMode> = args.mode.as_deref().map(str::parse).transpose()?;
    let basis: Option<SpinBasis> = args.basis.as_deref().map(str::parse).transpose()?;
    let energy: Option<EnergyPreset> = args.energy.as_deref().map(str::parse).transpose()?;

    let keys: Vec<GridKey> = GridKey::all()
        .filter(|k| mode.map_or(true, |m| k.production_mode == m))
        .filter(|k| basis.map_or(true, |b| k.basis == b))
        .filter(|k| energy.map_or(true, |e| k.energy == e))
        .collect();

    println!(
        "Generating {} grid(s) at {}x{} into {}",
        keys.len(),
        config.theta_steps,
        config.phi_steps,
        config.output_dir.display()
    );

    let outcomes = generate_into(
        &config.output_dir,
        config.theta_steps,
        config.phi_steps,
        keys,
    );

    let mut failed = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(path) => println!("  {:<28} -> {}", outcome.key.to_string(), path.display()),
            Err(e) => {
                failed += 1;
                println!("  {:<28} FAILED: {e}", outcome.key.to_string());
            }
        }
    }

    println!();
    println!(
        "Generated {} of {} grid file(s) in {}",
        outcomes.len() - failed,
        outcomes.len(),
        config.output_dir.display()
    );

    Ok(if failed > 0 { 1 } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output_dir: PathBuf) -> GenerateArgs {
        GenerateArgs {
            output_dir: Some(output_dir),
            theta_steps: Some(3),
            phi_steps: Some(3),
            mode: None,
            basis: None,
            energy: None,
            config: None,
        }
    }

    #[test]
    fn generates_all_24_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let code = run_generate(&args(dir.path().to_path_buf())).unwrap();
        assert_eq!(code, 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 24);
    }

    #[test]
    fn filters_restrict_the_key_set() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = args(dir.path().to_path_buf());
        a.mode = Some("qqbar".into());
        a.basis = Some("beam".into());
        let code = run_generate(&a).unwrap();
        assert_eq!(code, 0);
        // 1 mode x 1 basis x 4 energies.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 4);
    }

    #[test]
    fn unknown_filter_value_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut a = args(dir.path().to_path_buf());
        a.mode = Some("ee".into());
        assert!(run_generate(&a).is_err());
    }
}
