//! Error types for vsfind operations.
//!
//! This module defines [`VsFindError`], the error type for the configuration,
//! input and command layers, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Selection itself never fails: missing capabilities, unknown versions and
//!   environment mismatches are recorded in the diagnostic log instead
//! - Use `VsFindError` for problems reading configuration or input
//! - Use `anyhow::Error` (via `VsFindError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for vsfind operations.
#[derive(Debug, Error)]
pub enum VsFindError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Installation records could not be decoded.
    #[error("Invalid installation records from {source_name}: {message}")]
    InputParseError {
        source_name: String,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for vsfind operations.
pub type Result<T> = std::result::Result<T, VsFindError>;
