//! Grid loader error types.

use spincorr_core::GridKey;
use spincorr_grid::GridError;

/// Errors from grid artifact loads.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The artifact for this key does not exist (HTTP 404 or missing
    /// file). Not retried automatically.
    #[error("grid artifact not found for key {key}")]
    NotFound {
        /// The key that could not be resolved.
        key: GridKey,
    },

    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        /// The URL that was being fetched.
        endpoint: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The grid endpoint returned a non-2xx status other than 404.
    #[error("grid endpoint {endpoint} returned {status}: {body}")]
    Upstream {
        /// The URL that was fetched.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body excerpt for diagnostics.
        body: String,
    },

    /// Response deserialization failed.
    #[error("failed to deserialize grid from {endpoint}: {source}")]
    Deserialization {
        /// The URL that was fetched.
        endpoint: String,
        /// Underlying decode error.
        #[source]
        source: reqwest::Error,
    },

    /// The artifact parsed but violates a shape invariant, or its file
    /// content is not valid JSON.
    #[error("malformed grid artifact for key {key}: {source}")]
    Malformed {
        /// The key whose artifact is corrupt.
        key: GridKey,
        /// The violated invariant or parse failure.
        #[source]
        source: GridError,
    },

    /// Filesystem error other than a missing artifact.
    #[error("io error reading artifact for key {key}: {source}")]
    Io {
        /// The key being read.
        key: GridKey,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
