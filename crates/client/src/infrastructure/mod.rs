//! Concrete adapters behind the outbound ports.

pub mod assets;
pub mod clock;
pub mod geolocation;
pub mod http;
pub mod settings;
pub mod ticker;

pub use assets::FsBackgroundCatalog;
pub use clock::SystemClock;
pub use geolocation::StaticGeolocation;
pub use http::{
    CompanionApiClient, NominatimClient, StreetViewClient, DEFAULT_API_BASE_URL,
    DEFAULT_NOMINATIM_BASE_URL, DEFAULT_STREET_VIEW_BASE_URL,
};
pub use settings::{Settings, SettingsError, DEFAULT_BACKGROUNDS_DIR};
pub use ticker::WallClockTicker;
