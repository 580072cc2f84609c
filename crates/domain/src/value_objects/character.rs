//! Selectable companion characters.

use serde::{Deserialize, Serialize};

/// A selectable character, as listed by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub id: String,
    pub name: String,
    /// Sprite shown over the backdrop; `None` falls back to the bundled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_image_url: Option<String>,
    /// When present, overrides backdrop resolution entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image_url: Option<String>,
}

impl CharacterProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            character_image_url: None,
            background_image_url: None,
        }
    }

    pub fn with_character_image(mut self, url: impl Into<String>) -> Self {
        self.character_image_url = Some(url.into());
        self
    }

    pub fn with_background_image(mut self, url: impl Into<String>) -> Self {
        self.background_image_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_images_are_omitted_from_json() {
        let profile = CharacterProfile::new("mano", "真乃");
        let json = serde_json::to_string(&profile).expect("serialize");
        assert!(!json.contains("character_image_url"));
        assert!(!json.contains("background_image_url"));
    }

    #[test]
    fn test_builder_sets_overrides() {
        let profile = CharacterProfile::new("mano", "真乃")
            .with_background_image("https://example.com/bg.png");
        assert_eq!(
            profile.background_image_url.as_deref(),
            Some("https://example.com/bg.png")
        );
    }
}
