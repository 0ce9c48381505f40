//! # spincorr-interp — Interpolation & Axis Estimation
//!
//! The request-time half of the pipeline: map a continuous `(θ, φ)` pair
//! through a loaded [`SpinGrid`](spincorr_grid::SpinGrid) into a fresh
//! [`CorrelationMatrix`](spincorr_core::CorrelationMatrix), and derive
//! the two spin-axis vectors from it.
//!
//! Everything here is pure, synchronous, and allocation-light — safe to
//! call on every render frame. No locks, no shared mutable state: the
//! grid is read-only and every result is freshly allocated.

pub mod axes;
pub mod bilinear;
pub mod render;

pub use axes::spin_axes;
pub use bilinear::correlation_matrix;
pub use render::heatmap_color;
