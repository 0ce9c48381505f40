//! # spincorr-core — Foundational Types for the Spin Correlation Stack
//!
//! This crate is the bedrock of the workspace. It defines the addressing
//! and value types shared by the generator, loader, interpolator, and the
//! service/CLI surfaces. Every other crate in the workspace depends on
//! `spincorr-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enums for the parameter space.** `ProductionMode`,
//!    `SpinBasis`, and `EnergyPreset` are exhaustive enums, not strings.
//!    The 24-point key space is enumerable at compile time and a `match`
//!    on any axis is checked by the compiler.
//!
//! 2. **`GridKey` is the sole addressing scheme.** One artifact per key,
//!    filename derived from the canonical `Display` form. Parsing and
//!    printing round-trip exactly.
//!
//! 3. **Validated constructors.** `SpinParameters::new` rejects angles
//!    outside `[0, π] × [0, 2π]`. No unchecked user input crosses into
//!    the pipeline.
//!
//! 4. **Values are owned, never shared mutably.** `CorrelationMatrix` and
//!    `SpinAxes` are freshly allocated per computation; nothing in this
//!    crate holds interior mutability.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `spincorr-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All wire-facing types serialize with camelCase field names, matching
//!   the artifact and export JSON contracts.

pub mod axes;
pub mod error;
pub mod export;
pub mod key;
pub mod matrix;
pub mod params;

// Re-export primary types for ergonomic imports.
pub use axes::SpinAxes;
pub use error::ValidationError;
pub use export::{ExportBundle, EXPORT_VERSION};
pub use key::{EnergyPreset, GridKey, ProductionMode, SpinBasis};
pub use matrix::CorrelationMatrix;
pub use params::SpinParameters;
