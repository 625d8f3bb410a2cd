//! Error types for cubemap capture
//!
//! Configuration problems are detected before any face is rendered.
//! Backend and render-strategy failures are passed through unchanged.

use std::fmt;

/// Result type for cubemap capture operations
pub type Galaxy3dResult<T> = Result<T, Galaxy3dError>;

/// Cubemap capture errors
#[derive(Debug, Clone)]
pub enum Galaxy3dError {
    /// Malformed capture configuration (near/far, resolution, face table)
    InvalidConfiguration(String),

    /// Unusable cube target (zero-sized, non-square faces, ...)
    InvalidResource(String),

    /// Backend-specific error, or an error raised by the render strategy
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,
}

impl fmt::Display for Galaxy3dError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Galaxy3dError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Galaxy3dError::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Galaxy3dError::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Galaxy3dError::OutOfMemory => write!(f, "Out of GPU memory"),
        }
    }
}

impl std::error::Error for Galaxy3dError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
