//! Shared application state.

use std::path::PathBuf;

/// State shared across request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory holding the generated grid artifacts.
    pub data_dir: PathBuf,
}

impl AppState {
    /// Create state serving artifacts from `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}
