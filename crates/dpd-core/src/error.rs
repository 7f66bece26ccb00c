//! Error types for discrete distribution queries

use thiserror::Error;

use crate::types::Support;

/// Distribution error type
#[derive(Error, Debug)]
pub enum Error {
    /// A pmf/cdf argument lies outside the distribution's support
    #[error("{x} is out of range {support}")]
    OutOfSupport {
        /// Offending value
        x: i64,
        /// Valid range
        support: Support,
    },

    /// An inverse-cdf argument lies outside the open interval (0, 1)
    #[error("{a} is out of range (0, 1)")]
    QuantileOutOfRange {
        /// Offending quantile
        a: f64,
    },

    /// Query strategy not applicable to this distribution
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl Error {
    /// `true` for errors caused by querying outside the valid domain.
    pub fn is_range_error(&self) -> bool {
        matches!(self, Error::OutOfSupport { .. } | Error::QuantileOutOfRange { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
