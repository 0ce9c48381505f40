//! # Route Handlers
//!
//! The artifact route resolves `{filename}` → [`GridKey`] → file path.
//! Rebuilding the path from the parsed key (rather than the raw request
//! segment) confines reads to the 24 valid artifact names.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use spincorr_core::GridKey;
use spincorr_grid::SpinGrid;

use crate::error::ApiError;
use crate::state::AppState;

/// Process liveness probe.
pub async fn liveness() -> &'static str {
    "ok"
}

/// Serving readiness probe.
pub async fn readiness() -> &'static str {
    "ready"
}

/// Serve one grid artifact by filename.
pub async fn grid_artifact(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let key = GridKey::from_artifact_filename(&filename)
        .map_err(|_| ApiError::NotFound(format!("no grid artifact named {filename:?}")))?;

    let path = state.data_dir.join(key.artifact_filename());
    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ApiError::NotFound(format!("grid artifact not found for key {key}"))
        } else {
            ApiError::Internal(format!("reading {}: {e}", path.display()))
        }
    })?;

    // The artifact directory is trusted generator output, but a corrupt
    // file must surface as a server error, not as garbage JSON handed to
    // the client.
    if let Err(e) = serde_json::from_slice::<SpinGrid>(&bytes) {
        return Err(ApiError::Internal(format!(
            "corrupt artifact {}: {e}",
            path.display()
        )));
    }

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        bytes,
    ))
}
