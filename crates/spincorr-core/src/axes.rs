//! # Spin Axes
//!
//! The derived visual representation: two 3D vectors approximating the
//! top and anti-top spin directions. Derived per computation, never
//! persisted.

use serde::{Deserialize, Serialize};

/// Approximate spin directions for the two particles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinAxes {
    /// Top quark spin axis `[x, y, z]`; unit length by construction.
    pub top: [f64; 3],
    /// Anti-top quark spin axis `[x, y, z]`.
    pub anti_top: [f64; 3],
}

impl SpinAxes {
    /// Euclidean norm of a 3-vector.
    pub fn norm(v: [f64; 3]) -> f64 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }
}
