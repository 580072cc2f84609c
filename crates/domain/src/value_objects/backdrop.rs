//! The resolved background visual shown behind the character.

use serde::{Deserialize, Serialize};

/// A resolved background image reference.
///
/// Exactly one backdrop is current at a time; a newer resolution replaces it
/// atomically (last-resolved-wins, enforced by the backdrop service's
/// generation tokens).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Backdrop {
    /// The bundled global fallback image.
    #[default]
    Default,
    /// Street-level imagery URL at a validated heading.
    StreetView(String),
    /// Local image keyed by the resolved prefecture.
    RegionImage(String),
    /// Character-supplied background URL, overriding resolution entirely.
    Override(String),
}

impl Backdrop {
    /// Path of the global default image.
    pub const DEFAULT_PATH: &'static str = "/backgrounds/default.jpg";

    /// The image reference to display (URL or local path).
    pub fn as_str(&self) -> &str {
        match self {
            Backdrop::Default => Self::DEFAULT_PATH,
            Backdrop::StreetView(url) | Backdrop::Override(url) => url,
            Backdrop::RegionImage(path) => path,
        }
    }
}
