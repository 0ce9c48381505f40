//! # Export Bundle
//!
//! The JSON bundle handed to the presentation layer for download:
//! current parameters, the interpolated matrix, an ISO-8601 UTC
//! timestamp, and the format version.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::matrix::CorrelationMatrix;
use crate::params::SpinParameters;

/// Export format version. Bumped on any breaking change to the bundle
/// shape.
pub const EXPORT_VERSION: &str = "1.0.0";

/// Snapshot of one explorer state, serialized for download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    /// Parameters the matrix was computed from.
    pub parameters: SpinParameters,
    /// The interpolated correlation matrix.
    pub correlation_matrix: CorrelationMatrix,
    /// ISO-8601 UTC timestamp of the export.
    pub timestamp: String,
    /// Bundle format version.
    pub version: String,
}

impl ExportBundle {
    /// Build a bundle stamped with the current time.
    pub fn new(parameters: SpinParameters, correlation_matrix: CorrelationMatrix) -> Self {
        Self::at(parameters, correlation_matrix, Utc::now())
    }

    /// Build a bundle with an explicit timestamp. Keeps the pipeline a
    /// pure function of its inputs for testing.
    pub fn at(
        parameters: SpinParameters,
        correlation_matrix: CorrelationMatrix,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            parameters,
            correlation_matrix,
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            version: EXPORT_VERSION.to_string(),
        }
    }

    /// Default download filename: `spin-params-{YYYY-MM-DD}.json`.
    pub fn suggested_filename(timestamp: DateTime<Utc>) -> String {
        format!("spin-params-{}.json", timestamp.format("%Y-%m-%d"))
    }
}
