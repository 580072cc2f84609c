//! Position source backed by configuration.
//!
//! The screen has no GPS of its own; the position comes from settings (or
//! is absent, which the whole pipeline treats as "no fix").

use async_trait::async_trait;

use aikata_domain::GeoPosition;

use crate::ports::GeolocationPort;

pub struct StaticGeolocation {
    position: Option<GeoPosition>,
}

impl StaticGeolocation {
    pub fn new(position: Option<GeoPosition>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl GeolocationPort for StaticGeolocation {
    async fn current_position(&self) -> Option<GeoPosition> {
        self.position
    }
}
