//! Value objects for the companion screen.
//!
//! Everything here is pure: no I/O, no async, no ambient state. Randomness,
//! where needed, is injected as a closure.

mod address;
mod affection;
mod backdrop;
mod character;
mod choice;
mod conversation;
mod effects;
mod geo;
mod prefecture;

pub use address::Address;
pub use affection::{AffectionScore, AffectionTier, AFFECTION_TIERS};
pub use backdrop::Backdrop;
pub use character::CharacterProfile;
pub use choice::{ChoiceKind, DialogueChoice};
pub use conversation::{ConversationTurn, DialogueState};
pub use effects::{EffectBurst, EffectIcon, EffectInstance};
pub use geo::{haversine_km, GeoPosition};
pub use prefecture::{Prefecture, PREFECTURES};
