//! Response bodies returned by the companion backend.

use serde::Deserialize;

/// Response of `POST /api/dialogue/character`.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterTurnResponse {
    pub message: String,
}

/// Response of `POST /api/dialogue/options`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceOptionsResponse {
    #[serde(default)]
    pub options: Vec<WireChoice>,
}

/// One option as sent on the wire. The category string is mapped to
/// [`aikata_domain::ChoiceKind`] by the client; unknown values are neutral.
#[derive(Debug, Clone, Deserialize)]
pub struct WireChoice {
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Response of `GET /api/characters`.
#[derive(Debug, Clone, Deserialize)]
pub struct CharactersResponse {
    pub success: bool,
    #[serde(default)]
    pub characters: Vec<CharacterRecord>,
}

/// One registry entry as sent on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub character_image_url: Option<String>,
    #[serde(default)]
    pub background_image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_response_parses_wire_categories() {
        let json = r#"{"options": [
            {"text": "ありがとう", "type": "v-good"},
            {"text": "ふーん", "type": "bad"},
            {"text": "…", "type": "mystery"},
            {"text": "そうなんだ"}
        ]}"#;
        let response: ChoiceOptionsResponse = serde_json::from_str(json).expect("parse");
        assert_eq!(response.options.len(), 4);
        assert_eq!(response.options[0].kind, "v-good");
        assert_eq!(response.options[3].kind, "");
    }

    #[test]
    fn test_characters_response_tolerates_missing_image_urls() {
        let json = r#"{"success": true, "characters": [
            {"id": "mano", "name": "真乃"},
            {"id": "hiori", "name": "灯織",
             "character_image_url": "https://example.com/hiori.png",
             "background_image_url": "https://example.com/bg.png"}
        ]}"#;
        let response: CharactersResponse = serde_json::from_str(json).expect("parse");
        assert!(response.success);
        assert_eq!(response.characters[0].character_image_url, None);
        assert_eq!(
            response.characters[1].background_image_url.as_deref(),
            Some("https://example.com/bg.png")
        );
    }

    #[test]
    fn test_character_turn_response() {
        let response: CharacterTurnResponse =
            serde_json::from_str(r#"{"message": "こんにちは！"}"#).expect("parse");
        assert_eq!(response.message, "こんにちは！");
    }
}
