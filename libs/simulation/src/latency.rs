//! Named latency profiles
//!
//! Each profile maps to a closed millisecond range fixed at compile
//! time. Delays are drawn uniformly from the range; a fixed-point
//! profile (min == max) always yields the same delay.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A named delay range applied before a simulated operation completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatencyProfile {
    /// Snappy demo interactions
    Fast,
    /// Realistic API round-trip
    Normal,
    /// Degraded network conditions
    Slow,
    /// Fixed 5-second verification suspense delay
    Verify,
}

impl LatencyProfile {
    /// Closed `[min, max]` range in milliseconds
    pub const fn range_ms(&self) -> (u64, u64) {
        match self {
            LatencyProfile::Fast => (50, 200),
            LatencyProfile::Normal => (200, 800),
            LatencyProfile::Slow => (1000, 3000),
            LatencyProfile::Verify => (5000, 5000),
        }
    }

    /// Whether the profile always yields the same delay
    pub const fn is_fixed(&self) -> bool {
        let (min, max) = self.range_ms();
        min == max
    }

    /// Configuration tag for this profile
    pub fn as_str(&self) -> &'static str {
        match self {
            LatencyProfile::Fast => "fast",
            LatencyProfile::Normal => "normal",
            LatencyProfile::Slow => "slow",
            LatencyProfile::Verify => "verify",
        }
    }

    /// Parse a configuration tag; unknown tags are None, not errors
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "fast" => Some(LatencyProfile::Fast),
            "normal" => Some(LatencyProfile::Normal),
            "slow" => Some(LatencyProfile::Slow),
            "verify" => Some(LatencyProfile::Verify),
            _ => None,
        }
    }
}

impl fmt::Display for LatencyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Draw a delay from the profile's range, uniform and inclusive
pub fn draw_delay_ms<R: Rng>(profile: LatencyProfile, rng: &mut R) -> u64 {
    let (min, max) = profile.range_ms();
    if min == max {
        min
    } else {
        rng.gen_range(min..=max)
    }
}

/// Draw a delay as a [`Duration`]
pub fn draw_delay<R: Rng>(profile: LatencyProfile, rng: &mut R) -> Duration {
    Duration::from_millis(draw_delay_ms(profile, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_verify_profile_is_fixed() {
        assert!(LatencyProfile::Verify.is_fixed());
        assert!(!LatencyProfile::Fast.is_fixed());

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(draw_delay_ms(LatencyProfile::Verify, &mut rng), 5000);
        }
    }

    #[test]
    fn test_ranged_profiles_stay_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for profile in [
            LatencyProfile::Fast,
            LatencyProfile::Normal,
            LatencyProfile::Slow,
        ] {
            let (min, max) = profile.range_ms();
            for _ in 0..1000 {
                let delay = draw_delay_ms(profile, &mut rng);
                assert!(delay >= min && delay <= max, "{profile}: {delay}");
            }
        }
    }

    #[test]
    fn test_distribution_covers_both_halves() {
        // Coarse uniformity check: over many draws both halves of the
        // range get a substantial share.
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let (min, max) = LatencyProfile::Normal.range_ms();
        let midpoint = (min + max) / 2;

        let mut low = 0u32;
        let samples = 2000;
        for _ in 0..samples {
            if draw_delay_ms(LatencyProfile::Normal, &mut rng) <= midpoint {
                low += 1;
            }
        }
        let share = f64::from(low) / f64::from(samples);
        assert!(share > 0.4 && share < 0.6, "lower-half share: {share}");
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(LatencyProfile::parse("fast"), Some(LatencyProfile::Fast));
        assert_eq!(LatencyProfile::parse(" SLOW "), Some(LatencyProfile::Slow));
        assert_eq!(LatencyProfile::parse("verify"), Some(LatencyProfile::Verify));
        assert_eq!(LatencyProfile::parse("warp"), None);
    }

    #[test]
    fn test_tag_roundtrip() {
        for profile in [
            LatencyProfile::Fast,
            LatencyProfile::Normal,
            LatencyProfile::Slow,
            LatencyProfile::Verify,
        ] {
            assert_eq!(LatencyProfile::parse(profile.as_str()), Some(profile));
        }
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&LatencyProfile::Slow).unwrap();
        assert_eq!(json, "\"slow\"");
    }

    proptest! {
        #[test]
        fn prop_delay_in_range_for_any_seed(seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for profile in [
                LatencyProfile::Fast,
                LatencyProfile::Normal,
                LatencyProfile::Slow,
                LatencyProfile::Verify,
            ] {
                let (min, max) = profile.range_ms();
                let delay = draw_delay_ms(profile, &mut rng);
                prop_assert!(delay >= min && delay <= max);
            }
        }
    }
}
