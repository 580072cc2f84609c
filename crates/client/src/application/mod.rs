//! Application services.
//!
//! Services orchestrate the ports; none of them does I/O directly. Backend
//! and provider failures degrade to on-screen fallbacks here instead of
//! propagating upward.

pub mod services;

pub use services::{
    BackdropService, BackdropSnapshot, CharacterService, DialogueSession, RefreshOutcome,
    RouteSelection, WallClock,
};
