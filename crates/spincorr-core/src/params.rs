//! # Spin Parameters — the user-controlled input state
//!
//! The five-tuple driving the pipeline: the grid key triple plus the
//! continuous angles. A change of the triple requires a new grid fetch;
//! a change of the angles only re-interpolation. The session owning the
//! parameters passes them explicitly into the loader/interpolator/
//! estimator pipeline — there is no ambient state.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::key::{EnergyPreset, GridKey, ProductionMode, SpinBasis};

/// User-controlled input state for the explorer pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinParameters {
    /// Production process category.
    pub production_mode: ProductionMode,
    /// Spin basis frame.
    pub basis: SpinBasis,
    /// Center-of-mass energy preset.
    pub energy: EnergyPreset,
    /// Polar angle in radians, `[0, π]`.
    pub theta: f64,
    /// Azimuthal angle in radians, `[0, 2π]`.
    pub phi: f64,
}

impl SpinParameters {
    /// Create validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ThetaOutOfRange`] or
    /// [`ValidationError::PhiOutOfRange`] if an angle lies outside its
    /// closed interval (non-finite values are rejected by the same
    /// checks).
    pub fn new(
        production_mode: ProductionMode,
        basis: SpinBasis,
        energy: EnergyPreset,
        theta: f64,
        phi: f64,
    ) -> Result<Self, ValidationError> {
        if !(0.0..=std::f64::consts::PI).contains(&theta) {
            return Err(ValidationError::ThetaOutOfRange(theta));
        }
        if !(0.0..=2.0 * std::f64::consts::PI).contains(&phi) {
            return Err(ValidationError::PhiOutOfRange(phi));
        }
        Ok(Self {
            production_mode,
            basis,
            energy,
            theta,
            phi,
        })
    }

    /// The grid key addressed by the current triple.
    pub fn grid_key(&self) -> GridKey {
        GridKey::new(self.production_mode, self.basis, self.energy)
    }
}

/// Initial parameters of an interactive session: gluon fusion in the
/// helicity basis at 13 TeV, θ = 45°, φ = 90°.
impl Default for SpinParameters {
    fn default() -> Self {
        Self {
            production_mode: ProductionMode::GluonFusion,
            basis: SpinBasis::Helicity,
            energy: EnergyPreset::Tev13,
            theta: std::f64::consts::FRAC_PI_4,
            phi: std::f64::consts::FRAC_PI_2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn valid_angles_accepted() {
        let p = SpinParameters::new(
            ProductionMode::GluonFusion,
            SpinBasis::Beam,
            EnergyPreset::Tev8,
            PI,
            2.0 * PI,
        )
        .unwrap();
        assert_eq!(p.theta, PI);
        assert_eq!(p.phi, 2.0 * PI);
    }

    #[test]
    fn out_of_range_angles_rejected() {
        let base = |theta, phi| {
            SpinParameters::new(
                ProductionMode::GluonFusion,
                SpinBasis::Helicity,
                EnergyPreset::Tev13,
                theta,
                phi,
            )
        };
        assert!(matches!(
            base(-0.001, 0.0),
            Err(ValidationError::ThetaOutOfRange(_))
        ));
        assert!(matches!(
            base(PI + 0.001, 0.0),
            Err(ValidationError::ThetaOutOfRange(_))
        ));
        assert!(matches!(
            base(0.0, -0.001),
            Err(ValidationError::PhiOutOfRange(_))
        ));
        assert!(matches!(
            base(0.0, 2.0 * PI + 0.001),
            Err(ValidationError::PhiOutOfRange(_))
        ));
        assert!(base(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn default_matches_session_start() {
        let p = SpinParameters::default();
        assert_eq!(p.grid_key().to_string(), "gg_helicity_13TeV");
        assert_eq!(p.theta, PI / 4.0);
        assert_eq!(p.phi, PI / 2.0);
    }

    #[test]
    fn serde_camel_case() {
        let json = serde_json::to_value(SpinParameters::default()).unwrap();
        assert!(json.get("productionMode").is_some());
        assert!(json.get("production_mode").is_none());
    }

    proptest::proptest! {
        #[test]
        fn any_in_range_angles_accepted(theta in 0.0..=PI, phi in 0.0..=(2.0 * PI)) {
            let p = SpinParameters::new(
                ProductionMode::QuarkAntiquark,
                SpinBasis::OffDiagonal,
                EnergyPreset::Tev14,
                theta,
                phi,
            );
            proptest::prop_assert!(p.is_ok());
        }
    }
}
