//! # Grid Errors
//!
//! Shape-invariant violations, serialization failures, and artifact I/O
//! errors. Shape errors name the violated field and the offending index
//! so a corrupt artifact is diagnosable from the message alone.

use thiserror::Error;

/// Error producing, validating, or storing a grid artifact.
#[derive(Error, Debug)]
pub enum GridError {
    /// Mesh resolution below the minimum of 2 steps per axis.
    #[error("{axis} mesh needs at least 2 steps, got {steps}")]
    MeshTooSmall {
        /// Which axis: `"theta"` or `"phi"`.
        axis: &'static str,
        /// The rejected step count.
        steps: usize,
    },

    /// `grids` row count does not match `thetaSteps`.
    #[error("grid has {actual} theta rows, expected {expected}")]
    RowCount {
        /// Declared `thetaSteps`.
        expected: usize,
        /// Actual `grids.len()`.
        actual: usize,
    },

    /// A `grids` row length does not match `phiSteps`.
    #[error("grid row {row} has {actual} phi columns, expected {expected}")]
    RowLength {
        /// Index of the offending theta row.
        row: usize,
        /// Declared `phiSteps`.
        expected: usize,
        /// Actual row length.
        actual: usize,
    },

    /// A declared range length does not match its step count.
    #[error("{axis} range has {actual} values, expected {expected}")]
    RangeLength {
        /// Which axis: `"theta"` or `"phi"`.
        axis: &'static str,
        /// Declared step count.
        expected: usize,
        /// Actual range length.
        actual: usize,
    },

    /// A range is not strictly increasing.
    #[error("{axis} range is not strictly increasing at index {index}")]
    NonMonotonic {
        /// Which axis: `"theta"` or `"phi"`.
        axis: &'static str,
        /// First index at which `range[index] <= range[index - 1]`.
        index: usize,
    },

    /// A range endpoint deviates from its required value.
    #[error("{axis} range {end} endpoint is {actual}, expected {expected}")]
    Endpoint {
        /// Which axis: `"theta"` or `"phi"`.
        axis: &'static str,
        /// Which endpoint: `"first"` or `"last"`.
        end: &'static str,
        /// Required endpoint value.
        expected: f64,
        /// Observed endpoint value.
        actual: f64,
    },

    /// Artifact serialization or parse failure.
    #[error("artifact serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Artifact file I/O failure.
    #[error("artifact io error: {0}")]
    Io(#[from] std::io::Error),
}
