//! Client for the virtual-companion chat screen.
//!
//! Hexagonal layout: [`application`] services drive the screen's behavior
//! through the [`ports`] traits, and [`infrastructure`] supplies the
//! reqwest/filesystem/clock adapters. [`app::CompanionApp`] wires it all
//! together.

pub mod app;
pub mod application;
pub mod infrastructure;
pub mod ports;

pub use app::CompanionApp;
