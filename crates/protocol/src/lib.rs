//! Wire contracts for the companion dialogue backend.
//!
//! JSON over HTTP. The dialogue exchange uses the split two-call shape: a
//! character-turn request first, then a choice-options request carrying the
//! just-fetched character message.

mod requests;
mod responses;

pub use requests::{ChoiceOptionsRequest, DialogueTurnRequest};
pub use responses::{CharacterRecord, CharacterTurnResponse, CharactersResponse, ChoiceOptionsResponse, WireChoice};
