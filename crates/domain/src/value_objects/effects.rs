//! Transient visual-effect bursts triggered by dialogue choices.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::ChoiceKind;

/// Icon displayed by one effect instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectIcon {
    Heart,
    BrokenHeart,
}

/// A single floating icon within a burst.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectInstance {
    pub id: Uuid,
    pub icon: EffectIcon,
    /// Horizontal offset from center, in [-100, +100] px.
    pub offset_x: f32,
    /// Vertical offset from center, in [-100, +100] px.
    pub offset_y: f32,
    /// Display delay relative to the burst spawn.
    pub delay_ms: u64,
}

/// A burst of effect instances spawned by one choice, expiring as a unit.
///
/// Instance count and icon come from the choice category; offsets come from
/// the injected RNG closure (a unit value in [0, 1)).
#[derive(Debug, Clone, PartialEq)]
pub struct EffectBurst {
    spawned_at: DateTime<Utc>,
    instances: Vec<EffectInstance>,
}

impl EffectBurst {
    /// Burst lifetime: instances disappear together after this elapses.
    pub const LIFETIME_MS: i64 = 3000;
    /// Per-instance display stagger.
    pub const STAGGER_MS: u64 = 200;

    pub fn spawn(
        kind: ChoiceKind,
        spawned_at: DateTime<Utc>,
        unit_rng: &mut dyn FnMut() -> f32,
    ) -> Self {
        let icon = kind.effect_icon();
        let instances = (0..kind.effect_count())
            .map(|i| EffectInstance {
                id: Uuid::new_v4(),
                icon,
                offset_x: unit_rng() * 200.0 - 100.0,
                offset_y: unit_rng() * 200.0 - 100.0,
                delay_ms: i as u64 * Self::STAGGER_MS,
            })
            .collect();
        Self {
            spawned_at,
            instances,
        }
    }

    pub fn spawned_at(&self) -> DateTime<Utc> {
        self.spawned_at
    }

    pub fn instances(&self) -> &[EffectInstance] {
        &self.instances
    }

    /// Whether the whole burst has run out at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.spawned_at >= Duration::milliseconds(Self::LIFETIME_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_rng() -> impl FnMut() -> f32 {
        let mut state = 0u32;
        move || {
            state = state.wrapping_add(1);
            (state % 10) as f32 / 10.0
        }
    }

    #[test]
    fn test_burst_sizes_follow_choice_kind() {
        let now = Utc::now();
        let mut rng = fixed_rng();
        assert_eq!(
            EffectBurst::spawn(ChoiceKind::VeryGood, now, &mut rng)
                .instances()
                .len(),
            6
        );
        assert_eq!(
            EffectBurst::spawn(ChoiceKind::Bad, now, &mut rng)
                .instances()
                .len(),
            2
        );
        assert_eq!(
            EffectBurst::spawn(ChoiceKind::Neutral, now, &mut rng)
                .instances()
                .len(),
            1
        );
    }

    #[test]
    fn test_instances_staggered_by_200ms() {
        let mut rng = fixed_rng();
        let burst = EffectBurst::spawn(ChoiceKind::VeryGood, Utc::now(), &mut rng);
        let delays: Vec<u64> = burst.instances().iter().map(|e| e.delay_ms).collect();
        assert_eq!(delays, vec![0, 200, 400, 600, 800, 1000]);
    }

    #[test]
    fn test_offsets_within_bounds() {
        let mut rng = fixed_rng();
        let burst = EffectBurst::spawn(ChoiceKind::VeryGood, Utc::now(), &mut rng);
        for instance in burst.instances() {
            assert!((-100.0..=100.0).contains(&instance.offset_x));
            assert!((-100.0..=100.0).contains(&instance.offset_y));
        }
    }

    #[test]
    fn test_expiry_after_lifetime() {
        let spawned = Utc::now();
        let mut rng = fixed_rng();
        let burst = EffectBurst::spawn(ChoiceKind::Good, spawned, &mut rng);
        assert!(!burst.is_expired(spawned));
        assert!(!burst.is_expired(spawned + Duration::milliseconds(2999)));
        assert!(burst.is_expired(spawned + Duration::milliseconds(3000)));
    }

    #[test]
    fn test_negative_burst_uses_broken_heart() {
        let mut rng = fixed_rng();
        let burst = EffectBurst::spawn(ChoiceKind::VeryBad, Utc::now(), &mut rng);
        assert!(burst
            .instances()
            .iter()
            .all(|e| e.icon == EffectIcon::BrokenHeart));
    }
}
