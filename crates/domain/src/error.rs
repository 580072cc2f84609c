//! Unified error type for the domain layer.

use thiserror::Error;

/// Errors raised by domain value-object construction and parsing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., coordinate outside its valid range)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects built from wire strings)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
