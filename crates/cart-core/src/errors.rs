//! Cross-cutting error types for cartco2.
//!
//! Domain-specific errors (`LookupError`, `FactorError`, `ConfigError`) are
//! defined in their respective crates. They converge into `anyhow` in
//! `cart-cli`.

use thiserror::Error;

/// Errors that can be raised while decoding cart input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation (wrong shape, wrong type).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input was not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
