//! Core error types for pathly-core.
//!
//! This module defines the error hierarchy using thiserror. Conditions the
//! engine tolerates (dangling catalog references, unknown trait tags) are
//! not errors; see [`crate::catalog::CatalogIssue`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pathly-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Quiz session errors
    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

    /// Catalog loading errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Result store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while advancing a quiz session.
///
/// All of these indicate a caller bug; none of them change the state the
/// call was made against.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// The question id is not in the catalog.
    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    /// The chosen value is not one of the question's options.
    #[error("Invalid choice '{value}' for question '{question}'")]
    InvalidChoice { question: String, value: String },

    /// An answer was submitted for a question that is not the current one.
    #[error("Expected an answer for '{expected}', got one for '{got}'")]
    QuestionMismatch { expected: String, got: String },

    /// The session has already resolved to completion.
    #[error("Quiz session is already complete")]
    AlreadyComplete,
}

/// Structural catalog errors that make id lookup ambiguous.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Two nodes share an id
    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(String),

    /// Two options in one node share a value
    #[error("Duplicate option value '{value}' in question '{question}'")]
    DuplicateOption { question: String, value: String },

    /// Weight is negative, NaN or infinite
    #[error("Invalid weight {weight} on option '{value}' of question '{question}'")]
    InvalidWeight {
        question: String,
        value: String,
        weight: f64,
    },

    /// Catalog file could not be read
    #[error("Failed to read catalog from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog text could not be parsed
    #[error("Failed to parse catalog: {0}")]
    ParseFailed(String),
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

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Data directory could not be determined or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Result store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying file access failed
    #[error("Store IO failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored data could not be encoded or decoded
    #[error("Store serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Both the primary and the fallback store failed
    #[error("Primary store failed ({primary}); fallback failed ({fallback})")]
    BothFailed { primary: String, fallback: String },
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::ParseFailed(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
