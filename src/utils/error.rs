//! Error Handling Module
//!
//! Defines custom error types for the occlusion-explain library.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for occlusion-explain operations
#[derive(Error, Debug)]
pub enum ExplainError {
    /// Error raised by the model during inference
    #[error("Model error: {0}")]
    Model(String),

    /// Error converting between numeric arrays and image buffers
    #[error("Image error: {0}")]
    Image(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Result type alias for occlusion-explain operations
pub type Result<T> = std::result::Result<T, ExplainError>;
