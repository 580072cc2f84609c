//! reqwest-backed adapters for the HTTP collaborators.

mod backend;
mod nominatim;
mod street_view;

pub use backend::{CompanionApiClient, DEFAULT_API_BASE_URL};
pub use nominatim::{NominatimClient, DEFAULT_NOMINATIM_BASE_URL};
pub use street_view::{StreetViewClient, DEFAULT_STREET_VIEW_BASE_URL};
