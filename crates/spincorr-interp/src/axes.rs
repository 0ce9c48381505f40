//! # Spin-Axis Estimation
//!
//! A simplified 3D approximation of the two spin directions for
//! visualization: the top axis is the spherical direction of the
//! production angles, the anti-top axis points opposite in azimuth with
//! its overall sign flipped when `C_zz` is negative.

use spincorr_core::{CorrelationMatrix, SpinAxes};

/// Estimate the spin axes from the interpolated matrix and the
/// production angles.
///
/// `top` is the spherical-to-Cartesian unit vector of `(θ, φ)`;
/// `antiTop` uses azimuth `φ + π` and is negated when the `C_zz`
/// component of the matrix is negative. Pure and deterministic.
pub fn spin_axes(matrix: &CorrelationMatrix, theta: f64, phi: f64) -> SpinAxes {
    let sin_theta = theta.sin();
    let cos_theta = theta.cos();

    let top = [sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta];

    let sign = if matrix.czz() < 0.0 { -1.0 } else { 1.0 };
    let anti_phi = phi + std::f64::consts::PI;
    let anti_top = [
        sign * sin_theta * anti_phi.cos(),
        sign * sin_theta * anti_phi.sin(),
        sign * cos_theta,
    ];

    SpinAxes { top, anti_top }
}
