//! Human-readable address breakdown from reverse geocoding.

use serde::{Deserialize, Serialize};

/// Address derived from the current position.
///
/// Ephemeral: recomputed whenever the position changes. Missing sub-fields
/// are empty strings and are simply dropped when formatting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub prefecture: String,
    pub city: String,
    pub district: String,
    pub street: String,
    pub display_name: String,
}

impl Address {
    /// Short display form: the non-empty prefecture/city/district joined by
    /// single spaces. The street is captured but not part of this form.
    pub fn short_display(&self) -> String {
        [&self.prefecture, &self.city, &self.district]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
