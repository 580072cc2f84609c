//! Character registry cache and route-based selection.

use std::sync::Arc;

use tracing::{info, warn};

use aikata_domain::CharacterProfile;

use crate::ports::CharacterDirectoryPort;

/// What the caller should do with the character id it navigated to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSelection {
    /// The id matched a known character; it is now active.
    Selected(CharacterProfile),
    /// Unknown id; navigate to this canonical id instead.
    RedirectTo(String),
    /// The registry is empty (or failed to load); show the empty state.
    NoCharacters,
}

pub struct CharacterService {
    directory: Arc<dyn CharacterDirectoryPort>,
    characters: Vec<CharacterProfile>,
    active: Option<CharacterProfile>,
}

impl CharacterService {
    pub fn new(directory: Arc<dyn CharacterDirectoryPort>) -> Self {
        Self {
            directory,
            characters: Vec::new(),
            active: None,
        }
    }

    /// Reload the registry. A load failure leaves an empty list rather than
    /// propagating; the screen degrades to its empty state.
    pub async fn load_all(&mut self) -> &[CharacterProfile] {
        match self.directory.list_characters().await {
            Ok(characters) => {
                info!(count = characters.len(), "character registry loaded");
                self.characters = characters;
            }
            Err(e) => {
                warn!(error = %e, "failed to load character registry");
                self.characters.clear();
                self.active = None;
            }
        }
        &self.characters
    }

    /// Resolve a route's character id against the loaded registry.
    ///
    /// An unknown (or absent) id redirects to the first listed character;
    /// the active selection only changes on a successful match.
    pub fn select_from_route(&mut self, id: Option<&str>) -> RouteSelection {
        if let Some(found) = id.and_then(|id| self.characters.iter().find(|c| c.id == id)) {
            let found = found.clone();
            self.active = Some(found.clone());
            return RouteSelection::Selected(found);
        }
        match self.characters.first() {
            Some(first) => RouteSelection::RedirectTo(first.id.clone()),
            None => RouteSelection::NoCharacters,
        }
    }

    pub fn active(&self) -> Option<&CharacterProfile> {
        self.active.as_ref()
    }

    pub fn characters(&self) -> &[CharacterProfile] {
        &self.characters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ports::{BackendError, MockCharacterDirectoryPort};

    fn roster() -> Vec<CharacterProfile> {
        vec![
            CharacterProfile::new("mano", "真乃"),
            CharacterProfile::new("hiori", "灯織"),
        ]
    }

    async fn loaded_service(characters: Vec<CharacterProfile>) -> CharacterService {
        let mut directory = MockCharacterDirectoryPort::new();
        directory
            .expect_list_characters()
            .returning(move || Ok(characters.clone()));
        let mut service = CharacterService::new(Arc::new(directory));
        service.load_all().await;
        service
    }

    #[tokio::test]
    async fn test_known_id_becomes_active() {
        let mut service = loaded_service(roster()).await;

        let selection = service.select_from_route(Some("hiori"));

        match selection {
            RouteSelection::Selected(profile) => assert_eq!(profile.id, "hiori"),
            other => panic!("unexpected selection: {:?}", other),
        }
        assert_eq!(service.active().map(|c| c.id.as_str()), Some("hiori"));
    }

    #[tokio::test]
    async fn test_unknown_id_redirects_to_first() {
        let mut service = loaded_service(roster()).await;

        let selection = service.select_from_route(Some("meguru"));

        assert_eq!(selection, RouteSelection::RedirectTo("mano".to_string()));
        assert_eq!(service.active(), None);
    }

    #[tokio::test]
    async fn test_missing_id_redirects_to_first() {
        let mut service = loaded_service(roster()).await;
        assert_eq!(
            service.select_from_route(None),
            RouteSelection::RedirectTo("mano".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_registry_reports_no_characters() {
        let mut service = loaded_service(Vec::new()).await;
        assert_eq!(service.select_from_route(Some("mano")), RouteSelection::NoCharacters);
    }

    #[tokio::test]
    async fn test_load_failure_degrades_to_empty_list() {
        let mut directory = MockCharacterDirectoryPort::new();
        directory
            .expect_list_characters()
            .returning(|| Err(BackendError::Status(502)));
        let mut service = CharacterService::new(Arc::new(directory));

        let characters = service.load_all().await;

        assert!(characters.is_empty());
        assert_eq!(service.select_from_route(Some("mano")), RouteSelection::NoCharacters);
    }
}
