//! Errors surfaced by the outbound ports.
//!
//! Each external collaborator gets its own error enum so the services can
//! log and degrade per concern instead of matching on one catch-all type.

use thiserror::Error;

/// Errors from the dialogue backend and the character directory.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    #[error("Backend request failed: {0}")]
    RequestFailed(String),

    #[error("Backend returned HTTP status {0}")]
    Status(u16),

    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
}

/// Errors from the reverse-geocoding provider.
#[derive(Debug, Clone, Error)]
pub enum GeocodeError {
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid geocoding response: {0}")]
    InvalidResponse(String),
}

/// Errors from the street-imagery provider.
#[derive(Debug, Clone, Error)]
pub enum ImageryError {
    #[error("Imagery request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid imagery URL: {0}")]
    InvalidUrl(String),
}
