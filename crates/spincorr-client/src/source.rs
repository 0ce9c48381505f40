//! The [`GridSource`] abstraction over artifact origins.

use std::future::Future;

use spincorr_core::GridKey;
use spincorr_grid::SpinGrid;

use crate::error::LoadError;

/// An origin that can resolve a [`GridKey`] to a validated [`SpinGrid`].
///
/// Implementations must return grids that pass
/// [`SpinGrid::validate`](spincorr_grid::SpinGrid::validate) — the
/// sources in this crate validate after fetching and surface violations
/// as [`LoadError::Malformed`].
pub trait GridSource: Send + Sync {
    /// Fetch the grid for one key. One attempt; no automatic retry.
    fn fetch(
        &self,
        key: &GridKey,
    ) -> impl Future<Output = Result<SpinGrid, LoadError>> + Send;
}
