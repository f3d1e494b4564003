//! Hold-off potentiometer scaling
//!
//! Integer linear map from a raw analog reading to a delay, saturating at
//! both ends so a noisy or out-of-range reading can never produce a delay
//! outside `[out_min_ms, out_max_ms]`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::launch::ConfigError;

/// Linear map from raw analog counts to hold-off milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HoldOffScale {
    /// Raw reading that maps to `out_min_ms`
    pub in_min: u16,
    /// Raw reading that maps to `out_max_ms`
    pub in_max: u16,
    /// Shortest hold-off (ms)
    pub out_min_ms: u32,
    /// Longest hold-off (ms)
    pub out_max_ms: u32,
}

impl HoldOffScale {
    /// 10-bit converter, 0-102ms
    pub const DEFAULT: Self = Self {
        in_min: 0,
        in_max: 1023,
        out_min_ms: 0,
        out_max_ms: 102,
    };

    /// Map a raw reading to a hold-off in milliseconds
    ///
    /// Truncates toward `out_min_ms`, so only a full-scale reading gives
    /// `out_max_ms`.
    pub fn map(&self, raw: u16) -> u32 {
        if self.in_max <= self.in_min {
            return self.out_min_ms;
        }

        let raw = raw.clamp(self.in_min, self.in_max);
        let span_in = u64::from(self.in_max - self.in_min);
        let span_out = u64::from(self.out_max_ms.saturating_sub(self.out_min_ms));
        let offset = u64::from(raw - self.in_min) * span_out / span_in;

        // offset <= span_out, which itself fits in u32
        self.out_min_ms + offset as u32
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.in_max <= self.in_min {
            return Err(ConfigError::EmptyInputRange);
        }
        if self.out_max_ms < self.out_min_ms {
            return Err(ConfigError::InvertedOutputRange);
        }
        Ok(())
    }
}

impl Default for HoldOffScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_endpoints() {
        let scale = HoldOffScale::DEFAULT;
        assert_eq!(scale.map(0), 0);
        assert_eq!(scale.map(1023), 102);
        // 511 * 102 / 1023 = 50.95 -> 50
        assert_eq!(scale.map(511), 50);
    }

    #[test]
    fn test_saturates_above_domain() {
        let scale = HoldOffScale::DEFAULT;
        assert_eq!(scale.map(4095), 102);
        assert_eq!(scale.map(u16::MAX), 102);
    }

    #[test]
    fn test_saturates_below_domain() {
        let scale = HoldOffScale {
            in_min: 100,
            in_max: 900,
            out_min_ms: 5,
            out_max_ms: 45,
        };
        assert_eq!(scale.map(0), 5);
        assert_eq!(scale.map(100), 5);
        assert_eq!(scale.map(900), 45);
        assert_eq!(scale.map(500), 25);
    }

    #[test]
    fn test_degenerate_domain_maps_to_minimum() {
        let scale = HoldOffScale {
            in_min: 10,
            in_max: 10,
            out_min_ms: 3,
            out_max_ms: 50,
        };
        assert_eq!(scale.map(10), 3);
        assert_eq!(scale.validate(), Err(ConfigError::EmptyInputRange));
    }

    proptest! {
        #[test]
        fn prop_map_stays_in_range(raw in any::<u16>(), in_max in 1u16..=u16::MAX, out_max in 0u32..10_000) {
            let scale = HoldOffScale { in_min: 0, in_max, out_min_ms: 0, out_max_ms: out_max };
            let ms = scale.map(raw);
            prop_assert!(ms <= out_max);
        }

        #[test]
        fn prop_map_is_monotonic(a in 0u16..=1023, b in 0u16..=1023) {
            let scale = HoldOffScale::DEFAULT;
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(scale.map(lo) <= scale.map(hi));
        }
    }
}
