//! Cross-cutting error types for Veriport.
//!
//! Domain-specific errors (`AuthError`, `ConfigError`) live in their own
//! crates; everything converges on `anyhow` at the CLI boundary.

use thiserror::Error;

/// Errors that can be raised by any Veriport crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Lookup returned no result.
    #[error("Not found: {entity_type} {key}")]
    NotFound { entity_type: String, key: String },

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
