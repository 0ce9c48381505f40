//! # spincorr-api — Grid Artifact Service
//!
//! Serves the public fetch interface consumed by the interactive
//! explorer:
//!
//! | Route                           | Behavior                          |
//! |---------------------------------|-----------------------------------|
//! | `GET /data/spin-grids/{file}`   | One grid artifact as JSON         |
//! | `GET /health/liveness`          | Process liveness probe            |
//! | `GET /health/readiness`         | Serving readiness probe           |
//!
//! Artifact filenames are parsed back into a [`GridKey`] before any
//! filesystem access — unparseable names are a 404 and path traversal is
//! impossible by construction, since the served path is rebuilt from the
//! parsed key rather than taken from the request.
//!
//! ## Middleware
//!
//! `TraceLayer` request tracing. Health probes are mounted alongside the
//! data route; there is no auth surface — artifacts are public,
//! immutable data.

pub mod error;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health/liveness", get(routes::liveness))
        .route("/health/readiness", get(routes::readiness))
        .route("/data/spin-grids/:filename", get(routes::grid_artifact))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve the app until the process is stopped.
pub async fn serve(state: AppState, port: u16) -> std::io::Result<()> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, data_dir = %state.data_dir.display(), "serving grid artifacts");
    axum::serve(listener, app(state)).await
}
