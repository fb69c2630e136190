//! Core error types for watertrack-core.
//!
//! Corruption of the stored record never shows up here: the record store
//! absorbs it and hands back a fresh record. What does surface is a failed
//! write, a bad configuration value, or rejected user input.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for watertrack-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Record persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rejected user input
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while persisting the daily record.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The record file could not be written
    #[error("Failed to write record to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The record could not be encoded
    #[error("Failed to encode record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No home or data directory could be resolved
    #[error("Cannot determine data directory")]
    NoDataDir,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not name a configuration field
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Rejected amounts typed by the user.
///
/// Messages are written to be shown as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid number for the amount.")]
    NotANumber(String),

    #[error("Please enter a positive number.")]
    NotPositive(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
