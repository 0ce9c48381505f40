//! # SpinGrid — the stored artifact
//!
//! One precomputed grid per [`GridKey`]: the mesh resolution, the two
//! node ranges, and the 2D array of flattened 3×3 matrices. Immutable
//! once generated.
//!
//! ## Shape Invariants
//!
//! - `grids.len() == theta_steps` and every row length `== phi_steps`.
//! - `theta_range`/`phi_range` have `theta_steps`/`phi_steps` entries,
//!   strictly increasing, spanning `[0, π]` and `[0, 2π]` inclusive.
//! - Every cell has exactly 9 entries — enforced structurally by the
//!   `[f64; 9]` cell type; a JSON artifact with a different cell length
//!   fails deserialization before validation runs.
//!
//! The generator guarantees these by construction; [`SpinGrid::validate`]
//! re-checks them defensively for artifacts from untrusted sources.

use serde::{Deserialize, Serialize};
use spincorr_core::{EnergyPreset, GridKey, ProductionMode, SpinBasis};

use crate::error::GridError;

/// Tolerance for the range endpoint checks. The mesh is built in one
/// multiplication per node, so endpoints are exact in practice; the
/// tolerance only absorbs artifacts re-serialized through shorter float
/// text forms.
const ENDPOINT_TOL: f64 = 1e-9;

/// A precomputed correlation grid for one parameter combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinGrid {
    /// Production process category.
    pub production_mode: ProductionMode,
    /// Spin basis frame.
    pub basis: SpinBasis,
    /// Center-of-mass energy preset.
    pub energy: EnergyPreset,
    /// Number of theta mesh nodes.
    pub theta_steps: usize,
    /// Number of phi mesh nodes.
    pub phi_steps: usize,
    /// Theta node values in radians, `[0, π]` inclusive.
    pub theta_range: Vec<f64>,
    /// Phi node values in radians, `[0, 2π]` inclusive.
    pub phi_range: Vec<f64>,
    /// Precomputed matrices indexed `[thetaIdx][phiIdx]`, each cell a
    /// flattened row-major 3×3 matrix.
    pub grids: Vec<Vec<[f64; 9]>>,
}

impl SpinGrid {
    /// The key addressing this grid.
    pub fn key(&self) -> GridKey {
        GridKey::new(self.production_mode, self.basis, self.energy)
    }

    /// Cell accessor: the flattened matrix at mesh node `(i, j)`.
    pub fn cell(&self, theta_idx: usize, phi_idx: usize) -> &[f64; 9] {
        &self.grids[theta_idx][phi_idx]
    }

    /// Check every shape invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: mesh size, range length,
    /// monotonicity, endpoint span, row count, or row length.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.theta_steps < 2 {
            return Err(GridError::MeshTooSmall {
                axis: "theta",
                steps: self.theta_steps,
            });
        }
        if self.phi_steps < 2 {
            return Err(GridError::MeshTooSmall {
                axis: "phi",
                steps: self.phi_steps,
            });
        }

        validate_range(
            "theta",
            &self.theta_range,
            self.theta_steps,
            std::f64::consts::PI,
        )?;
        validate_range(
            "phi",
            &self.phi_range,
            self.phi_steps,
            2.0 * std::f64::consts::PI,
        )?;

        if self.grids.len() != self.theta_steps {
            return Err(GridError::RowCount {
                expected: self.theta_steps,
                actual: self.grids.len(),
            });
        }
        for (row, cells) in self.grids.iter().enumerate() {
            if cells.len() != self.phi_steps {
                return Err(GridError::RowLength {
                    row,
                    expected: self.phi_steps,
                    actual: cells.len(),
                });
            }
        }
        Ok(())
    }
}

/// Check one node range: declared length, strict monotonicity, and the
/// `[0, span]` endpoints.
fn validate_range(
    axis: &'static str,
    range: &[f64],
    steps: usize,
    span: f64,
) -> Result<(), GridError> {
    if range.len() != steps {
        return Err(GridError::RangeLength {
            axis,
            expected: steps,
            actual: range.len(),
        });
    }
    for i in 1..range.len() {
        if range[i] <= range[i - 1] {
            return Err(GridError::NonMonotonic { axis, index: i });
        }
    }
    let first = range[0];
    if first.abs() > ENDPOINT_TOL {
        return Err(GridError::Endpoint {
            axis,
            end: "first",
            expected: 0.0,
            actual: first,
        });
    }
    let last = range[range.len() - 1];
    if (last - span).abs() > ENDPOINT_TOL {
        return Err(GridError::Endpoint {
            axis,
            end: "last",
            expected: span,
            actual: last,
        });
    }
    Ok(())
}
