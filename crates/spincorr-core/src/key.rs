//! # Grid Addressing — Production Mode, Basis, Energy, and the GridKey
//!
//! The parameter space of precomputed grids is the cartesian product of
//! two production modes, three spin bases, and four collider energy
//! presets — 24 combinations. A [`GridKey`] names exactly one combination
//! and is the sole addressing scheme for stored artifacts: one file per
//! key, filename `{productionMode}_{basis}_{energy}.json`.
//!
//! ## Canonical forms
//!
//! Each axis has a canonical string form used both on the wire (serde)
//! and in filenames (`Display`/`FromStr`): `gg`/`qqbar`,
//! `helicity`/`beam`/`off-diagonal`, `7TeV`/`8TeV`/`13TeV`/`14TeV`.
//! Printing and parsing round-trip exactly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Physical production process category.
///
/// Affects the correlation-strength coupling: quark-antiquark
/// annihilation carries stronger correlations than gluon fusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductionMode {
    /// Gluon fusion.
    #[serde(rename = "gg")]
    GluonFusion,
    /// Quark-antiquark annihilation.
    #[serde(rename = "qqbar")]
    QuarkAntiquark,
}

impl ProductionMode {
    /// All production modes, in canonical enumeration order.
    pub const ALL: [ProductionMode; 2] = [Self::GluonFusion, Self::QuarkAntiquark];

    /// Canonical string form, as used in filenames and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GluonFusion => "gg",
            Self::QuarkAntiquark => "qqbar",
        }
    }
}

impl fmt::Display for ProductionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductionMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gg" => Ok(Self::GluonFusion),
            "qqbar" => Ok(Self::QuarkAntiquark),
            other => Err(ValidationError::UnknownProductionMode(other.to_string())),
        }
    }
}

/// Choice of 3D coordinate frame in which the correlation matrix is
/// expressed. Changes the analytic form evaluated by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpinBasis {
    /// Axes aligned with particle momentum; diagonal correlations dominate.
    #[serde(rename = "helicity")]
    Helicity,
    /// z along the beam axis.
    #[serde(rename = "beam")]
    Beam,
    /// Frame chosen to maximize off-diagonal elements.
    #[serde(rename = "off-diagonal")]
    OffDiagonal,
}

impl SpinBasis {
    /// All bases, in canonical enumeration order.
    pub const ALL: [SpinBasis; 3] = [Self::Helicity, Self::Beam, Self::OffDiagonal];

    /// Canonical string form, as used in filenames and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Helicity => "helicity",
            Self::Beam => "beam",
            Self::OffDiagonal => "off-diagonal",
        }
    }
}

impl fmt::Display for SpinBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpinBasis {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "helicity" => Ok(Self::Helicity),
            "beam" => Ok(Self::Beam),
            "off-diagonal" => Ok(Self::OffDiagonal),
            other => Err(ValidationError::UnknownBasis(other.to_string())),
        }
    }
}

/// Center-of-mass energy preset.
///
/// The presets mirror the LHC run configurations. The generator
/// normalizes correlation strength to the 13 TeV baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyPreset {
    /// 7 TeV (Run 1).
    #[serde(rename = "7TeV")]
    Tev7,
    /// 8 TeV (Run 1).
    #[serde(rename = "8TeV")]
    Tev8,
    /// 13 TeV (Run 2).
    #[serde(rename = "13TeV")]
    Tev13,
    /// 14 TeV (Run 3 / future).
    #[serde(rename = "14TeV")]
    Tev14,
}

impl EnergyPreset {
    /// All energy presets, in canonical enumeration order.
    pub const ALL: [EnergyPreset; 4] = [Self::Tev7, Self::Tev8, Self::Tev13, Self::Tev14];

    /// Canonical string form, as used in filenames and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tev7 => "7TeV",
            Self::Tev8 => "8TeV",
            Self::Tev13 => "13TeV",
            Self::Tev14 => "14TeV",
        }
    }

    /// Numeric value in TeV.
    pub fn tev(self) -> f64 {
        match self {
            Self::Tev7 => 7.0,
            Self::Tev8 => 8.0,
            Self::Tev13 => 13.0,
            Self::Tev14 => 14.0,
        }
    }
}

impl fmt::Display for EnergyPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnergyPreset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7TeV" => Ok(Self::Tev7),
            "8TeV" => Ok(Self::Tev8),
            "13TeV" => Ok(Self::Tev13),
            "14TeV" => Ok(Self::Tev14),
            other => Err(ValidationError::UnknownEnergy(other.to_string())),
        }
    }
}

/// The `(productionMode, basis, energy)` triple identifying one
/// precomputed grid artifact.
///
/// Immutable; 24 valid combinations. The canonical string form
/// `{productionMode}_{basis}_{energy}` addresses the artifact file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridKey {
    /// Production process category.
    pub production_mode: ProductionMode,
    /// Spin basis frame.
    pub basis: SpinBasis,
    /// Center-of-mass energy preset.
    pub energy: EnergyPreset,
}

impl GridKey {
    /// Create a key from its three components.
    pub fn new(production_mode: ProductionMode, basis: SpinBasis, energy: EnergyPreset) -> Self {
        Self {
            production_mode,
            basis,
            energy,
        }
    }

    /// Enumerate all 24 valid keys in deterministic order: production
    /// mode outermost, then basis, then energy.
    pub fn all() -> impl Iterator<Item = GridKey> {
        ProductionMode::ALL.into_iter().flat_map(|mode| {
            SpinBasis::ALL.into_iter().flat_map(move |basis| {
                EnergyPreset::ALL
                    .into_iter()
                    .map(move |energy| GridKey::new(mode, basis, energy))
            })
        })
    }

    /// Total number of valid keys.
    pub const COUNT: usize = 24;

    /// Artifact filename for this key: `{productionMode}_{basis}_{energy}.json`.
    pub fn artifact_filename(&self) -> String {
        format!("{self}.json")
    }

    /// Parse a key back out of an artifact filename.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedKey`] if the name does not end
    /// in `.json` or the stem is not a canonical key string.
    pub fn from_artifact_filename(name: &str) -> Result<Self, ValidationError> {
        let stem = name
            .strip_suffix(".json")
            .ok_or_else(|| ValidationError::MalformedKey(name.to_string()))?;
        stem.parse()
    }
}

impl fmt::Display for GridKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.production_mode, self.basis, self.energy)
    }
}

impl FromStr for GridKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The basis segment may itself contain a hyphen but never an
        // underscore, so splitting on '_' is unambiguous.
        let mut parts = s.split('_');
        let (Some(mode), Some(basis), Some(energy), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ValidationError::MalformedKey(s.to_string()));
        };
        Ok(Self {
            production_mode: mode.parse()?,
            basis: basis.parse()?,
            energy: energy.parse()?,
        })
    }
}
