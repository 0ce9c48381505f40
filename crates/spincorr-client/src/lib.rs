//! # spincorr-client — Grid Artifact Loader
//!
//! Resolves a [`GridKey`](spincorr_core::GridKey) to a loaded
//! [`SpinGrid`](spincorr_grid::SpinGrid).
//!
//! ## Architecture
//!
//! [`GridSource`] abstracts where artifacts come from: [`HttpGridSource`]
//! fetches `{base_url}/{key}.json` over HTTP (the deployed data
//! directory), [`FsGridSource`] reads the generator's output directly
//! from disk. Every fetched grid is shape-validated before it is handed
//! to the caller.
//!
//! ## Stale Fetch Policy
//!
//! Grids are requested interactively: the user can change parameters
//! faster than a fetch completes. [`GridSession`] resolves overlapping
//! loads with last-request-wins — a fetch that completes after a newer
//! request was issued is reported as superseded rather than letting a
//! stale grid overwrite a fresher one. Failures are not retried
//! automatically; a failed load is local to one key and recoverable by
//! requesting another.

pub mod error;
pub mod fs;
pub mod http;
pub mod session;
pub mod source;

pub use error::LoadError;
pub use fs::FsGridSource;
pub use http::{HttpGridSource, HttpGridSourceConfig};
pub use session::{GridSession, LoadOutcome};
pub use source::GridSource;
