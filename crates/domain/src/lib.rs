//! Pure domain types for the virtual-companion screen.
//!
//! No I/O and no async anywhere in this crate; time and randomness are
//! always passed in by the caller.

pub mod common;
pub mod error;
pub mod value_objects;

pub use error::DomainError;

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    haversine_km, Address, AffectionScore, AffectionTier, Backdrop, CharacterProfile, ChoiceKind,
    ConversationTurn, DialogueChoice, DialogueState, EffectBurst, EffectIcon, EffectInstance,
    GeoPosition, Prefecture, AFFECTION_TIERS, PREFECTURES,
};
