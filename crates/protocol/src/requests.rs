//! Request bodies sent to the companion backend.

use aikata_domain::ConversationTurn;
use serde::Serialize;

/// Body of `POST /api/dialogue/character`.
///
/// `user_choice` is empty on the opening turn; `conversation_history` must
/// already include the turn being responded to. Coordinates are `null` when
/// no fix is available.
#[derive(Debug, Clone, Serialize)]
pub struct DialogueTurnRequest {
    pub character_id: String,
    pub user_choice: String,
    pub conversation_history: Vec<ConversationTurn>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub affection_level: u8,
}

/// Body of `POST /api/dialogue/options`.
///
/// Identical to the turn request plus the character message the options must
/// match, which is why the options call can only be issued after the
/// character-turn call resolves.
#[derive(Debug, Clone, Serialize)]
pub struct ChoiceOptionsRequest {
    pub character_id: String,
    pub character_message: String,
    pub user_choice: String,
    pub conversation_history: Vec<ConversationTurn>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub affection_level: u8,
}

impl ChoiceOptionsRequest {
    /// Build the options request from the turn request it follows.
    pub fn following(turn: DialogueTurnRequest, character_message: impl Into<String>) -> Self {
        Self {
            character_id: turn.character_id,
            character_message: character_message.into(),
            user_choice: turn.user_choice,
            conversation_history: turn.conversation_history,
            lat: turn.lat,
            lon: turn.lon,
            affection_level: turn.affection_level,
        }
    }
}
