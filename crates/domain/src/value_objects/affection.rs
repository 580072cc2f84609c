//! Bounded affection score and its presentation tiers.

use serde::{Deserialize, Serialize};

/// Relationship score clamped to [0, 100].
///
/// Mutated only by applying a fixed per-choice delta; every session starts
/// (and resets) at [`AffectionScore::INITIAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AffectionScore(u8);

impl AffectionScore {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;
    pub const INITIAL: AffectionScore = AffectionScore(40);

    /// Create a score, clamping into [0, 100].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Apply a delta, saturating at both bounds.
    pub fn apply(self, delta: i8) -> Self {
        let raw = i16::from(self.0) + i16::from(delta);
        Self(raw.clamp(i16::from(Self::MIN), i16::from(Self::MAX)) as u8)
    }

    /// Presentation tier for this score (lower bound inclusive).
    pub fn tier(self) -> &'static AffectionTier {
        AFFECTION_TIERS
            .iter()
            .find(|tier| self.0 >= tier.threshold)
            .unwrap_or(&AFFECTION_TIERS[AFFECTION_TIERS.len() - 1])
    }
}

impl Default for AffectionScore {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// One of the five ordered presentation tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffectionTier {
    /// Lowest score included in this tier.
    pub threshold: u8,
    /// Display color (CSS hex).
    pub color: &'static str,
    /// Display label.
    pub label: &'static str,
}

/// Tiers ordered highest to lowest; the first matching threshold wins.
pub const AFFECTION_TIERS: [AffectionTier; 5] = [
    AffectionTier {
        threshold: 80,
        color: "#ff6b9d",
        label: "大好き！",
    },
    AffectionTier {
        threshold: 60,
        color: "#ff8c42",
        label: "好き",
    },
    AffectionTier {
        threshold: 40,
        color: "#6bcf7f",
        label: "普通",
    },
    AffectionTier {
        threshold: 20,
        color: "#ffd93d",
        label: "苦手",
    },
    AffectionTier {
        threshold: 0,
        color: "#ff6b6b",
        label: "大嫌い",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_is_forty() {
        assert_eq!(AffectionScore::INITIAL.value(), 40);
        assert_eq!(AffectionScore::default().value(), 40);
    }

    #[test]
    fn test_apply_clamps_at_upper_bound() {
        let score = AffectionScore::new(95).apply(10);
        assert_eq!(score.value(), 100);
    }

    #[test]
    fn test_apply_clamps_at_lower_bound() {
        let score = AffectionScore::new(5).apply(-10);
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn test_apply_within_bounds() {
        assert_eq!(AffectionScore::new(85).apply(10).value(), 95);
        assert_eq!(AffectionScore::new(40).apply(-5).value(), 35);
    }

    #[test]
    fn test_new_clamps_overflow() {
        assert_eq!(AffectionScore::new(250).value(), 100);
    }

    #[test]
    fn test_tier_boundaries_are_lower_bound_inclusive() {
        assert_eq!(AffectionScore::new(100).tier().label, "大好き！");
        assert_eq!(AffectionScore::new(80).tier().label, "大好き！");
        assert_eq!(AffectionScore::new(79).tier().label, "好き");
        assert_eq!(AffectionScore::new(60).tier().label, "好き");
        assert_eq!(AffectionScore::new(59).tier().label, "普通");
        assert_eq!(AffectionScore::new(40).tier().label, "普通");
        assert_eq!(AffectionScore::new(39).tier().label, "苦手");
        assert_eq!(AffectionScore::new(20).tier().label, "苦手");
        assert_eq!(AffectionScore::new(19).tier().label, "大嫌い");
        assert_eq!(AffectionScore::new(0).tier().label, "大嫌い");
    }

    #[test]
    fn test_tier_colors() {
        assert_eq!(AffectionScore::new(90).tier().color, "#ff6b9d");
        assert_eq!(AffectionScore::new(10).tier().color, "#ff6b6b");
    }

    #[test]
    fn test_any_sequence_of_deltas_stays_in_bounds() {
        let mut score = AffectionScore::INITIAL;
        for delta in [10, 10, 10, 10, 10, 10, 10, -5, -10, -10, -10, -10, -10, -10, -10, -10, 5] {
            score = score.apply(delta);
            assert!(score.value() <= 100);
        }
    }
}
