//! Ports onto the companion backend.

use async_trait::async_trait;

use aikata_domain::{CharacterProfile, DialogueChoice};
use aikata_protocol::{ChoiceOptionsRequest, DialogueTurnRequest};

use super::BackendError;

/// Port for the two-call dialogue exchange.
///
/// A turn is always `character_turn` followed by `choice_options`; the
/// options request carries the message the first call returned.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DialogueBackendPort: Send + Sync {
    /// Fetch the character's next line.
    async fn character_turn(&self, request: DialogueTurnRequest) -> Result<String, BackendError>;

    /// Fetch the reply options matching the character's latest line.
    async fn choice_options(
        &self,
        request: ChoiceOptionsRequest,
    ) -> Result<Vec<DialogueChoice>, BackendError>;
}

/// Port for the character registry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterDirectoryPort: Send + Sync {
    async fn list_characters(&self) -> Result<Vec<CharacterProfile>, BackendError>;
}
