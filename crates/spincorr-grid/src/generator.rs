//! # Grid Generator
//!
//! Offline batch construction of the 24 grid artifacts. Each key is
//! independent: its evaluation and write share no mutable state with any
//! other key, and a failure for one key never aborts the rest.
//!
//! ## Mesh
//!
//! `theta_range[i] = i·π/(steps−1)` and `phi_range[j] = j·2π/(steps−1)`:
//! endpoints inclusive, uniform spacing. The default 91×91 resolution
//! gives roughly 2° node spacing.

use std::path::{Path, PathBuf};

use spincorr_core::GridKey;

use crate::analytic::correlation_components;
use crate::error::GridError;
use crate::model::SpinGrid;
use crate::store::write_artifact;

/// Default theta mesh resolution.
pub const DEFAULT_THETA_STEPS: usize = 91;

/// Default phi mesh resolution.
pub const DEFAULT_PHI_STEPS: usize = 91;

/// Uniform inclusive mesh over `[0, span]` with the given node count.
fn mesh(steps: usize, span: f64) -> Vec<f64> {
    (0..steps)
        .map(|i| i as f64 * span / (steps - 1) as f64)
        .collect()
}

/// Generate the grid for one key at the given mesh resolution.
///
/// Deterministic: identical inputs produce an identical grid, and the
/// serialized artifact is byte-for-byte reproducible across runs.
///
/// # Errors
///
/// Returns [`GridError::MeshTooSmall`] if either step count is below 2.
pub fn generate_grid(
    key: GridKey,
    theta_steps: usize,
    phi_steps: usize,
) -> Result<SpinGrid, GridError> {
    if theta_steps < 2 {
        return Err(GridError::MeshTooSmall {
            axis: "theta",
            steps: theta_steps,
        });
    }
    if phi_steps < 2 {
        return Err(GridError::MeshTooSmall {
            axis: "phi",
            steps: phi_steps,
        });
    }

    let theta_range = mesh(theta_steps, std::f64::consts::PI);
    let phi_range = mesh(phi_steps, 2.0 * std::f64::consts::PI);

    let grids = theta_range
        .iter()
        .map(|&theta| {
            phi_range
                .iter()
                .map(|&phi| {
                    correlation_components(
                        key.production_mode,
                        key.basis,
                        key.energy,
                        theta,
                        phi,
                    )
                })
                .collect()
        })
        .collect();

    Ok(SpinGrid {
        production_mode: key.production_mode,
        basis: key.basis,
        energy: key.energy,
        theta_steps,
        phi_steps,
        theta_range,
        phi_range,
        grids,
    })
}

/// Result of one key's generation within a batch run.
#[derive(Debug)]
pub struct BatchOutcome {
    /// The key this outcome belongs to.
    pub key: GridKey,
    /// Path of the written artifact, or the error local to this key.
    pub result: Result<PathBuf, GridError>,
}

/// Generate and write artifacts for the given keys into `output_dir`.
///
/// Keys are processed sequentially; each write is independent and
/// idempotent. A failing key is logged and recorded in its
/// [`BatchOutcome`] while the remaining keys continue.
pub fn generate_into(
    output_dir: &Path,
    theta_steps: usize,
    phi_steps: usize,
    keys: impl IntoIterator<Item = GridKey>,
) -> Vec<BatchOutcome> {
    keys.into_iter()
        .map(|key| {
            let result = generate_grid(key, theta_steps, phi_steps)
                .and_then(|grid| write_artifact(output_dir, &grid));
            match &result {
                Ok(path) => {
                    tracing::info!(key = %key, path = %path.display(), "generated grid artifact");
                }
                Err(e) => {
                    tracing::error!(key = %key, error = %e, "grid generation failed");
                }
            }
            BatchOutcome { key, result }
        })
        .collect()
}
