//! Error types for tagsql.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// Missing or invalid renderer configuration: empty table name,
    /// unsupported statement kind, missing column definitions for CREATE.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Field/value arguments do not match the shape the statement requires.
    #[error("Shape error: {0}")]
    Shape(String),
}

impl RenderError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a shape error.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape(message.into())
    }
}

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
