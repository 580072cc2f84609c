//! Dialogue choice categories and their fixed consequences.

use serde::{Deserialize, Serialize};

/// Category of a dialogue option, as classified by the backend.
///
/// Wire values are `v-good`/`good`/`bad`/`v-bad`; anything else is treated
/// as neutral (no affection delta), never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceKind {
    #[serde(rename = "v-good")]
    VeryGood,
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "bad")]
    Bad,
    #[serde(rename = "v-bad")]
    VeryBad,
    #[serde(other, rename = "neutral")]
    Neutral,
}

impl ChoiceKind {
    /// Map a wire category string; unrecognized values become `Neutral`.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "v-good" => Self::VeryGood,
            "good" => Self::Good,
            "bad" => Self::Bad,
            "v-bad" => Self::VeryBad,
            _ => Self::Neutral,
        }
    }

    /// Fixed affection delta applied when this choice is taken.
    pub fn affection_delta(self) -> i8 {
        match self {
            Self::VeryGood => 10,
            Self::Good => 5,
            Self::Bad => -5,
            Self::VeryBad => -10,
            Self::Neutral => 0,
        }
    }

    /// Number of visual-effect instances spawned for this choice.
    pub fn effect_count(self) -> usize {
        match self {
            Self::VeryGood | Self::VeryBad => 6,
            Self::Good | Self::Bad => 2,
            Self::Neutral => 1,
        }
    }

    /// Icon shown by the effect burst.
    pub fn effect_icon(self) -> super::EffectIcon {
        match self {
            Self::Bad | Self::VeryBad => super::EffectIcon::BrokenHeart,
            _ => super::EffectIcon::Heart,
        }
    }
}

/// One selectable dialogue option presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueChoice {
    pub text: String,
    pub kind: ChoiceKind,
}

impl DialogueChoice {
    pub fn new(text: impl Into<String>, kind: ChoiceKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_known_values() {
        assert_eq!(ChoiceKind::from_wire("v-good"), ChoiceKind::VeryGood);
        assert_eq!(ChoiceKind::from_wire("good"), ChoiceKind::Good);
        assert_eq!(ChoiceKind::from_wire("bad"), ChoiceKind::Bad);
        assert_eq!(ChoiceKind::from_wire("v-bad"), ChoiceKind::VeryBad);
    }

    #[test]
    fn test_from_wire_unknown_is_neutral() {
        assert_eq!(ChoiceKind::from_wire("great"), ChoiceKind::Neutral);
        assert_eq!(ChoiceKind::from_wire(""), ChoiceKind::Neutral);
    }

    #[test]
    fn test_affection_deltas() {
        assert_eq!(ChoiceKind::VeryGood.affection_delta(), 10);
        assert_eq!(ChoiceKind::Good.affection_delta(), 5);
        assert_eq!(ChoiceKind::Bad.affection_delta(), -5);
        assert_eq!(ChoiceKind::VeryBad.affection_delta(), -10);
        assert_eq!(ChoiceKind::Neutral.affection_delta(), 0);
    }

    #[test]
    fn test_effect_sizing() {
        assert_eq!(ChoiceKind::VeryGood.effect_count(), 6);
        assert_eq!(ChoiceKind::VeryBad.effect_count(), 6);
        assert_eq!(ChoiceKind::Good.effect_count(), 2);
        assert_eq!(ChoiceKind::Bad.effect_count(), 2);
        assert_eq!(ChoiceKind::Neutral.effect_count(), 1);
    }

    #[test]
    fn test_effect_icons() {
        assert_eq!(ChoiceKind::VeryGood.effect_icon(), super::super::EffectIcon::Heart);
        assert_eq!(
            ChoiceKind::VeryBad.effect_icon(),
            super::super::EffectIcon::BrokenHeart
        );
        assert_eq!(ChoiceKind::Neutral.effect_icon(), super::super::EffectIcon::Heart);
    }
}
