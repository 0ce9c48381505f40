//! # spincorr-grid — Precomputed Grid Artifacts
//!
//! The offline half of the pipeline: evaluate the closed-form correlation
//! function over a dense `(θ, φ)` mesh for every grid key and serialize
//! each result to an addressable JSON artifact.
//!
//! ## Lifecycle
//!
//! Grids are create-once (build time), read-many (request time). The
//! generator is deterministic: for a fixed key and mesh resolution the
//! serialized artifact is byte-for-byte reproducible. Regeneration
//! overwrites idempotently.
//!
//! ## Module Map
//!
//! - [`analytic`] — the frozen basis-specific correlation formulas.
//! - [`model`] — the [`SpinGrid`] artifact type and its shape validation.
//! - [`generator`] — mesh construction and per-key/batch generation.
//! - [`store`] — keyed artifact reads and writes under a data directory.

pub mod analytic;
pub mod error;
pub mod generator;
pub mod model;
pub mod store;

pub use analytic::correlation_components;
pub use error::GridError;
pub use generator::{
    generate_grid, generate_into, BatchOutcome, DEFAULT_PHI_STEPS, DEFAULT_THETA_STEPS,
};
pub use model::SpinGrid;
pub use store::{read_artifact, write_artifact};
