//! # Generation Config
//!
//! Optional YAML configuration for `spincorr generate`. Command-line
//! flags take precedence over file values; file values over defaults.
//!
//! ```yaml
//! # spincorr.yaml
//! thetaSteps: 91
//! phiSteps: 91
//! outputDir: public/data/spin-grids
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use spincorr_grid::{DEFAULT_PHI_STEPS, DEFAULT_THETA_STEPS};

/// Generation settings read from a config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GenerateConfig {
    /// Theta mesh resolution.
    pub theta_steps: Option<usize>,
    /// Phi mesh resolution.
    pub phi_steps: Option<usize>,
    /// Artifact output directory.
    pub output_dir: Option<PathBuf>,
}

impl GenerateConfig {
    /// Read a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))
    }
}

/// Fully resolved generation settings after precedence is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGenerateConfig {
    pub theta_steps: usize,
    pub phi_steps: usize,
    pub output_dir: PathBuf,
}

/// Apply precedence: flag → config file → default.
pub fn resolve(
    file: &GenerateConfig,
    theta_steps: Option<usize>,
    phi_steps: Option<usize>,
    output_dir: Option<PathBuf>,
) -> ResolvedGenerateConfig {
    ResolvedGenerateConfig {
        theta_steps: theta_steps
            .or(file.theta_steps)
            .unwrap_or(DEFAULT_THETA_STEPS),
        phi_steps: phi_steps.or(file.phi_steps).unwrap_or(DEFAULT_PHI_STEPS),
        output_dir: output_dir
            .or_else(|| file.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("data/spin-grids")),
    }
}
