//! # Artifact Store
//!
//! Keyed reads and writes of grid artifacts under a data directory. The
//! filename is derived from the key; writes are idempotent overwrites.

use std::fs;
use std::path::{Path, PathBuf};

use spincorr_core::GridKey;

use crate::error::GridError;
use crate::model::SpinGrid;

/// Path of the artifact for `key` under `dir`.
pub fn artifact_path(dir: &Path, key: &GridKey) -> PathBuf {
    dir.join(key.artifact_filename())
}

/// Serialize and write one grid artifact, creating the directory if
/// needed. Returns the written path.
///
/// The artifact is pretty-printed (2-space indent) so generated data
/// diffs cleanly under version control.
pub fn write_artifact(dir: &Path, grid: &SpinGrid) -> Result<PathBuf, GridError> {
    fs::create_dir_all(dir)?;
    let path = artifact_path(dir, &grid.key());
    let bytes = serde_json::to_vec_pretty(grid)?;
    fs::write(&path, bytes)?;
    Ok(path)
}

/// Read and parse one grid artifact. Does not validate the shape; use
/// [`SpinGrid::validate`] when the source is untrusted.
pub fn read_artifact(dir: &Path, key: &GridKey) -> Result<SpinGrid, GridError> {
    let path = artifact_path(dir, key);
    let bytes = fs::read(&path)?;
    Ok(serde_json::from_slice(&bytes)?)
}
