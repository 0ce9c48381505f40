//! # Filesystem Grid Source
//!
//! Reads artifacts straight from the generator's output directory.
//! Used by the CLI `query`/`validate` paths and by tests; semantics
//! mirror the HTTP source (missing file ⇒ not found, bad content ⇒
//! malformed, validated before return).

use std::path::PathBuf;

use spincorr_core::GridKey;
use spincorr_grid::{GridError, SpinGrid};

use crate::error::LoadError;
use crate::source::GridSource;

/// Grid source backed by a local artifact directory.
#[derive(Debug, Clone)]
pub struct FsGridSource {
    dir: PathBuf,
}

impl FsGridSource {
    /// Create a source reading from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory artifacts are read from.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

impl GridSource for FsGridSource {
    async fn fetch(&self, key: &GridKey) -> Result<SpinGrid, LoadError> {
        let path = self.dir.join(key.artifact_filename());
        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound { key: *key }
            } else {
                LoadError::Io {
                    key: *key,
                    source: e,
                }
            }
        })?;

        let grid: SpinGrid = serde_json::from_slice(&bytes).map_err(|e| LoadError::Malformed {
            key: *key,
            source: GridError::Serialization(e),
        })?;

        grid.validate()
            .map_err(|source| LoadError::Malformed { key: *key, source })?;

        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spincorr_core::{EnergyPreset, ProductionMode, SpinBasis};
    use spincorr_grid::{generate_grid, write_artifact};

    fn key() -> GridKey {
        GridKey::new(
            ProductionMode::GluonFusion,
            SpinBasis::Beam,
            EnergyPreset::Tev8,
        )
    }

    #[tokio::test]
    async fn fetch_reads_written_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let grid = generate_grid(key(), 5, 5).unwrap();
        write_artifact(dir.path(), &grid).unwrap();

        let source = FsGridSource::new(dir.path());
        let loaded = source.fetch(&key()).await.unwrap();
        assert_eq!(loaded, grid);
    }

    #[tokio::test]
    async fn missing_artifact_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsGridSource::new(dir.path());
        assert!(matches!(
            source.fetch(&key()).await,
            Err(LoadError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn corrupt_artifact_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(key().artifact_filename()), b"[]").unwrap();
        let source = FsGridSource::new(dir.path());
        assert!(matches!(
            source.fetch(&key()).await,
            Err(LoadError::Malformed { .. })
        ));
    }

    #[tokio::test]
    async fn shape_violation_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let mut grid = generate_grid(key(), 5, 5).unwrap();
        grid.grids.pop();
        // Write the corrupt grid by hand; write_artifact would happily
        // serialize it, validation happens on the read side.
        std::fs::write(
            dir.path().join(key().artifact_filename()),
            serde_json::to_vec(&grid).unwrap(),
        )
        .unwrap();

        let source = FsGridSource::new(dir.path());
        assert!(matches!(
            source.fetch(&key()).await,
            Err(LoadError::Malformed { .. })
        ));
    }
}
