//! Conversation history and dialogue session states.

use serde::{Deserialize, Serialize};

/// One completed user-choice/character-message exchange.
///
/// Immutable once appended; the ordered sequence of turns is the
/// authoritative context sent to the backend on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// What the user chose to say.
    pub user: String,
    /// What the character had said when the user chose.
    pub character: String,
}

impl ConversationTurn {
    pub fn new(user: impl Into<String>, character: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            character: character.into(),
        }
    }
}

/// Where the dialogue session currently is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogueState {
    /// No exchange in flight; also the post-reset state.
    #[default]
    Idle,
    /// Waiting on the character-message request.
    AwaitingCharacterTurn,
    /// Character message arrived; waiting on the matching choice set.
    AwaitingOptions,
    /// Options are on screen, waiting for the user.
    PresentingOptions,
    /// A request failed; a fixed failure message is shown and the session
    /// stays interactive so the user can reset and retry.
    ErrorRecovered,
}
