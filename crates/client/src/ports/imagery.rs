//! Ports for backdrop imagery sources.

use async_trait::async_trait;

use aikata_domain::GeoPosition;

use super::ImageryError;

/// Port for probing street-level imagery at a position and heading.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StreetImageryPort: Send + Sync {
    /// Probe for imagery at `position` looking toward `heading` degrees.
    ///
    /// Returns the image URL when imagery exists, `Ok(None)` when the
    /// provider has nothing there (including when no credential is
    /// configured).
    async fn probe(
        &self,
        position: GeoPosition,
        heading: u16,
    ) -> Result<Option<String>, ImageryError>;
}

/// Port for checking that a bundled background image actually exists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackgroundCatalogPort: Send + Sync {
    /// Whether the catalog can serve the image at `path`.
    async fn verify(&self, path: &str) -> bool;
}
