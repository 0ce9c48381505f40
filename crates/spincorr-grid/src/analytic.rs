//! # Closed-Form Correlation Evaluator
//!
//! The three basis-specific analytic forms evaluated by the generator.
//! These are simplified leading-order approximations for demonstration —
//! real physics would require full NNLO QCD calculations.
//!
//! ## Frozen Contract
//!
//! The coefficients below are fixed constants of the design. Grids are
//! addressed by key and consumed by interpolation tests that expect
//! bit-for-bit reproducible values, so the formulas must not be
//! "corrected" or re-derived. Any change is a new artifact format.

use spincorr_core::{EnergyPreset, ProductionMode, SpinBasis};

/// Correlation-strength coupling for gluon fusion.
pub const GG_COUPLING: f64 = 0.3;

/// Correlation-strength coupling for quark-antiquark annihilation.
/// Stronger than gluon fusion.
pub const QQBAR_COUPLING: f64 = 0.5;

/// Baseline energy the correlation strength is normalized to, in TeV.
pub const REFERENCE_TEV: f64 = 13.0;

/// Mixing angle of the off-diagonal basis.
const MIX_ANGLE: f64 = std::f64::consts::FRAC_PI_4;

/// Production-dependent correlation strength.
pub fn coupling(mode: ProductionMode) -> f64 {
    match mode {
        ProductionMode::GluonFusion => GG_COUPLING,
        ProductionMode::QuarkAntiquark => QQBAR_COUPLING,
    }
}

/// Energy normalization factor relative to the 13 TeV baseline.
pub fn energy_factor(energy: EnergyPreset) -> f64 {
    energy.tev() / REFERENCE_TEV
}

/// Evaluate the 9 components of `C(mode, basis, energy, θ, φ)`,
/// flattened row-major with axes ordered x, y, z.
///
/// Pure function: no randomness, no hidden state. Identical inputs
/// produce identical outputs.
pub fn correlation_components(
    mode: ProductionMode,
    basis: SpinBasis,
    energy: EnergyPreset,
    theta: f64,
    phi: f64,
) -> [f64; 9] {
    let alpha = coupling(mode);
    let f = energy_factor(energy);

    match basis {
        // Helicity basis: aligned with particle momentum, diagonal
        // correlations dominate.
        SpinBasis::Helicity => {
            let c_xz = alpha * theta.sin() * phi.cos() * 0.4;
            let c_yz = alpha * theta.sin() * phi.sin() * 0.4;
            [
                alpha * f * theta.cos() * 0.3,                // C_xx
                0.02,                                         // C_xy (small)
                c_xz,                                         // C_xz
                0.02,                                         // C_yx
                alpha * f * theta.cos() * 0.3,                // C_yy
                c_yz,                                         // C_yz
                c_xz,                                         // C_zx
                c_yz,                                         // C_zy
                alpha * f * (1.0 - 0.3 * theta.sin().powi(2)), // C_zz (strongest)
            ]
        }
        // Beam basis: z along the beam axis.
        SpinBasis::Beam => {
            let c_xy = alpha * 0.25 * (2.0 * phi).sin();
            let c_xz = alpha * 0.15 * theta.sin();
            let c_yz = alpha * 0.15 * theta.cos();
            [
                alpha * 0.25 * (2.0 * phi).cos(),  // C_xx
                c_xy,                              // C_xy
                c_xz,                              // C_xz
                c_xy,                              // C_yx
                -alpha * 0.25 * (2.0 * phi).cos(), // C_yy
                c_yz,                              // C_yz
                c_xz,                              // C_zx
                c_yz,                              // C_zy
                alpha * f * 0.35,                  // C_zz
            ]
        }
        // Off-diagonal basis: frame chosen to enhance the off-diagonal
        // elements.
        SpinBasis::OffDiagonal => {
            let c_xy = alpha * f * 0.45 * (theta - MIX_ANGLE).cos();
            let c_xz = alpha * 0.3 * phi.sin();
            let c_yz = alpha * 0.3 * phi.cos();
            [
                alpha * 0.2,                           // C_xx
                c_xy,                                  // C_xy (enhanced)
                c_xz,                                  // C_xz
                c_xy,                                  // C_yx
                alpha * 0.2,                           // C_yy
                c_yz,                                  // C_yz
                c_xz,                                  // C_zx
                c_yz,                                  // C_zy
                alpha * 0.25 * (1.0 + 0.2 * theta.cos()), // C_zz
            ]
        }
    }
}
