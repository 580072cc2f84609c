//! Outbound ports of the companion screen.
//!
//! The application services depend on these traits only; the concrete
//! adapters live in [`crate::infrastructure`]. Every port gets a mockall
//! mock under `cfg(test)`.

mod backend;
mod clock;
mod error;
mod imagery;
mod location;

pub use backend::{CharacterDirectoryPort, DialogueBackendPort};
pub use clock::ClockPort;
pub use error::{BackendError, GeocodeError, ImageryError};
pub use imagery::{BackgroundCatalogPort, StreetImageryPort};
pub use location::{GeolocationPort, ReverseGeocodePort};

#[cfg(test)]
pub use backend::{MockCharacterDirectoryPort, MockDialogueBackendPort};
#[cfg(test)]
pub use imagery::{MockBackgroundCatalogPort, MockStreetImageryPort};
#[cfg(test)]
pub use location::{MockGeolocationPort, MockReverseGeocodePort};
