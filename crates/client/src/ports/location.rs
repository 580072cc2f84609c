//! Ports for position acquisition and reverse geocoding.

use async_trait::async_trait;

use aikata_domain::{Address, GeoPosition};

use super::GeocodeError;

/// Port for obtaining the viewer's current position.
///
/// `None` means no fix is available; callers fall back to the default
/// backdrop and omit coordinates from dialogue requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    async fn current_position(&self) -> Option<GeoPosition>;
}

/// Port for turning a position into a human-readable address.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReverseGeocodePort: Send + Sync {
    /// Resolve `position` to an address. `Ok(None)` means the provider had
    /// no address for the coordinates, which is not an error.
    async fn reverse(&self, position: GeoPosition) -> Result<Option<Address>, GeocodeError>;
}
