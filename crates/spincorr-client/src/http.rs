//! # HTTP Grid Source
//!
//! Fetches artifacts from a deployed data directory:
//! `GET {base_url}/{productionMode}_{basis}_{energy}.json`.
//!
//! ## Error Handling
//!
//! HTTP errors are mapped to [`LoadError`] with diagnostic context: the
//! endpoint URL, the status code, and a response body excerpt. A 404 is
//! the loader's not-found signal; any other non-2xx is an upstream
//! error. Retries are NOT built into the source — overlapping interactive
//! requests are arbitrated by [`GridSession`](crate::session::GridSession)
//! instead.

use std::time::Duration;

use spincorr_core::GridKey;
use spincorr_grid::SpinGrid;
use url::Url;

use crate::error::LoadError;
use crate::source::GridSource;

/// Longest response body excerpt carried in an upstream error.
const BODY_EXCERPT_LEN: usize = 256;

/// Configuration for the HTTP grid source.
#[derive(Debug, Clone)]
pub struct HttpGridSourceConfig {
    /// Base URL of the data directory, e.g.
    /// `https://example.org/data/spin-grids/`.
    pub base_url: Url,
    /// Request timeout in seconds (default: 30).
    pub timeout_secs: u64,
}

impl HttpGridSourceConfig {
    /// Create a configuration with the default timeout.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: 30,
        }
    }
}

/// HTTP client for the grid artifact endpoint.
#[derive(Debug)]
pub struct HttpGridSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpGridSource {
    /// Build the source from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Http`] if the underlying client cannot be
    /// constructed.
    pub fn new(config: HttpGridSourceConfig) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|source| LoadError::Http {
                endpoint: config.base_url.to_string(),
                source,
            })?;
        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Artifact URL for one key.
    fn endpoint(&self, key: &GridKey) -> Result<Url, LoadError> {
        // A trailing slash on the base URL is required for join() to
        // append rather than replace the last path segment.
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        base.join(&key.artifact_filename())
            .map_err(|_| LoadError::NotFound { key: *key })
    }
}

impl GridSource for HttpGridSource {
    async fn fetch(&self, key: &GridKey) -> Result<SpinGrid, LoadError> {
        let url = self.endpoint(key)?;
        let endpoint = url.to_string();

        tracing::debug!(key = %key, endpoint = %endpoint, "fetching grid artifact");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| LoadError::Http {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LoadError::NotFound { key: *key });
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let excerpt: String = body.chars().take(BODY_EXCERPT_LEN).collect();
            return Err(LoadError::Upstream {
                endpoint,
                status: status.as_u16(),
                body: excerpt,
            });
        }

        let grid: SpinGrid = resp
            .json()
            .await
            .map_err(|source| LoadError::Deserialization {
                endpoint: endpoint.clone(),
                source,
            })?;

        grid.validate()
            .map_err(|source| LoadError::Malformed { key: *key, source })?;

        Ok(grid)
    }
}
