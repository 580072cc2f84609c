//! Composition root.
//!
//! Wires the concrete adapters into the application services. The UI layer
//! owns a `CompanionApp` and talks to the services through it.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use aikata_domain::CharacterProfile;

use crate::application::{
    BackdropService, CharacterService, DialogueSession, RefreshOutcome, RouteSelection, WallClock,
};
use crate::infrastructure::{
    CompanionApiClient, FsBackgroundCatalog, NominatimClient, Settings, SettingsError,
    StaticGeolocation, StreetViewClient, SystemClock, DEFAULT_STREET_VIEW_BASE_URL,
};
use crate::ports::GeolocationPort;

pub struct CompanionApp {
    pub characters: CharacterService,
    pub dialogue: DialogueSession,
    pub backdrop: Arc<BackdropService>,
    pub wall_clock: WallClock,
    geolocation: Arc<dyn GeolocationPort>,
}

impl CompanionApp {
    pub fn new(settings: Settings) -> Self {
        let api = Arc::new(CompanionApiClient::new(&settings.api_base_url));
        let imagery = Arc::new(StreetViewClient::new(
            DEFAULT_STREET_VIEW_BASE_URL,
            settings.google_api_key.clone(),
        ));
        let geocoder = Arc::new(NominatimClient::default());
        let catalog = Arc::new(FsBackgroundCatalog::new(settings.backgrounds_dir.clone()));
        let clock = Arc::new(SystemClock);
        let geolocation = Arc::new(StaticGeolocation::new(settings.position));

        let mut rng = StdRng::from_entropy();
        let dialogue = DialogueSession::new(
            api.clone(),
            clock.clone(),
            Box::new(move || rng.gen::<f32>()),
        );

        Self {
            characters: CharacterService::new(api),
            dialogue,
            backdrop: Arc::new(BackdropService::new(imagery, geocoder, catalog)),
            wall_clock: WallClock::new(clock),
            geolocation,
        }
    }

    /// Build the app from environment configuration.
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self::new(Settings::from_env()?))
    }

    /// Load the registry, resolve the routed character and bring the
    /// location layer up. Callers act on the returned selection (navigate
    /// on `RedirectTo`, show the empty state on `NoCharacters`).
    pub async fn bootstrap(&mut self, route_character_id: Option<&str>) -> RouteSelection {
        self.characters.load_all().await;
        let selection = self.characters.select_from_route(route_character_id);
        if let RouteSelection::Selected(profile) = &selection {
            self.activate_character(profile.clone());
        }

        let position = self.geolocation.current_position().await;
        self.dialogue.set_position(position);
        if let RefreshOutcome::Applied(snapshot) = self.backdrop.refresh(position).await {
            info!(backdrop = ?snapshot.backdrop, "location layer ready");
        }
        selection
    }

    /// Switch the active character, resetting the dialogue and pinning the
    /// character's own backdrop when it has one. A character without one
    /// drops any previous character's pin so resolution can run again.
    pub fn activate_character(&mut self, profile: CharacterProfile) {
        match &profile.background_image_url {
            Some(url) => self.backdrop.set_override(url.clone()),
            None => self.backdrop.clear_override(),
        }
        self.dialogue.activate(profile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aikata_domain::Backdrop;

    #[test]
    fn test_composes_from_default_settings() {
        let app = CompanionApp::new(Settings::default());
        assert!(app.characters.characters().is_empty());
        assert!(!app.dialogue.in_dialogue());
        assert!(!app.wall_clock.display_time().is_empty());
    }

    #[tokio::test]
    async fn test_character_background_survives_a_location_pass() {
        let mut app = CompanionApp::new(Settings::default());
        app.activate_character(
            CharacterProfile::new("mano", "真乃")
                .with_background_image("https://cdn/character-bg.png"),
        );

        // The bootstrap sequence runs a resolution pass right after
        // activation; a pinned character background must outlive it.
        let outcome = app
            .backdrop
            .refresh(Some(aikata_domain::GeoPosition::new(35.6895, 139.6917)))
            .await;

        assert_eq!(outcome, RefreshOutcome::OverridePinned);
        assert_eq!(
            app.backdrop.snapshot().backdrop,
            Backdrop::Override("https://cdn/character-bg.png".into())
        );
    }

    #[test]
    fn test_switching_to_a_plain_character_drops_the_pin() {
        let mut app = CompanionApp::new(Settings::default());
        app.activate_character(
            CharacterProfile::new("mano", "真乃")
                .with_background_image("https://cdn/character-bg.png"),
        );
        app.activate_character(CharacterProfile::new("hiori", "灯織"));

        assert_eq!(app.backdrop.snapshot().backdrop, Backdrop::Default);
    }
}
