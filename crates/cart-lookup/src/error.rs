//! Lookup error types.

use thiserror::Error;

/// Errors that can occur when querying the product database.
#[derive(Debug, Error)]
pub enum LookupError {
    /// HTTP transport error (connect failure, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The product database returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The product database has no record for this code.
    #[error("product not found: {code}")]
    NotFound {
        /// The product code that was queried.
        code: String,
    },

    /// Failed to parse a product database response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The server returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Network lookups are turned off.
    #[error("product lookups are disabled")]
    Disabled,
}

impl LookupError {
    /// Expected outcomes that are not worth a warning in the logs.
    #[must_use]
    pub const fn is_expected(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Disabled)
    }
}
