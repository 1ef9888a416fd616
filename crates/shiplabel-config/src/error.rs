//! Error types for configuration parsing.

use thiserror::Error;

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Primary error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Base URL could not be parsed.
    #[error("invalid backend base URL")]
    InvalidBaseUrl {
        /// Raw value supplied by the caller.
        value: String,
        /// Underlying parse failure.
        source: url::ParseError,
    },
    /// Base URL used a scheme other than http or https.
    #[error("unsupported backend URL scheme")]
    UnsupportedScheme {
        /// Raw value supplied by the caller.
        value: String,
        /// Scheme that was rejected.
        scheme: String,
    },
    /// Base URL cannot carry a path (for example `mailto:`).
    #[error("backend URL cannot be used as a base")]
    CannotBeBase {
        /// Raw value supplied by the caller.
        value: String,
    },
    /// Delivery id cannot be carried as a single path segment.
    #[error("delivery id is not a valid path segment")]
    InvalidDeliveryId {
        /// Rejected delivery id.
        value: String,
    },
}
