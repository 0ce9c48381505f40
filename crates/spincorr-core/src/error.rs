//! # Validation Errors
//!
//! Structured errors for constructing the core parameter types. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations; messages identify the offending value.

use thiserror::Error;

/// Error constructing or parsing a core parameter type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Unrecognized production mode string.
    #[error("unknown production mode: {0:?} (expected \"gg\" or \"qqbar\")")]
    UnknownProductionMode(String),

    /// Unrecognized spin basis string.
    #[error("unknown basis: {0:?} (expected \"helicity\", \"beam\", or \"off-diagonal\")")]
    UnknownBasis(String),

    /// Unrecognized energy preset string.
    #[error("unknown energy preset: {0:?} (expected \"7TeV\", \"8TeV\", \"13TeV\", or \"14TeV\")")]
    UnknownEnergy(String),

    /// A grid key string or artifact filename did not have the
    /// `{mode}_{basis}_{energy}` shape.
    #[error("malformed grid key: {0:?}")]
    MalformedKey(String),

    /// Polar angle outside `[0, π]`.
    #[error("theta {0} outside [0, pi]")]
    ThetaOutOfRange(f64),

    /// Azimuthal angle outside `[0, 2π]`.
    #[error("phi {0} outside [0, 2*pi]")]
    PhiOutOfRange(f64),
}
