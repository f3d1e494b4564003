//! Launch timing and rail geometry

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::scale::HoldOffScale;

/// Configuration validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Coil pulse width is zero
    ZeroPulseWidth,
    /// Coil pulse width is not shorter than the fail-safe ceiling
    PulseExceedsFailSafe,
    /// Largest hold-off is not shorter than the fail-safe ceiling
    HoldOffExceedsFailSafe,
    /// Analog input domain is empty (`in_max <= in_min`)
    EmptyInputRange,
    /// Hold-off output range is inverted (`out_max_ms < out_min_ms`)
    InvertedOutputRange,
    /// A sensor spacing is zero
    ZeroDistance,
    /// Debounce window is zero
    ZeroDebounceWindow,
}

/// Launch controller configuration
///
/// Times are in milliseconds, distances in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LaunchConfig {
    /// Minimum idle time after a coil A trigger before rearming (ms)
    pub cooldown_ms: u32,
    /// Longest a launch may stay in progress before forced shutdown (ms)
    pub fail_safe_ms: u32,
    /// How long each coil stays energized once fired (ms)
    pub pulse_width_ms: u32,
    /// Rail distance from the sled's rest position to sensor 1 (mm)
    pub start_to_sensor1_mm: u32,
    /// Rail distance from sensor 1 to sensor 2 (mm)
    pub sensor1_to_sensor2_mm: u32,
    /// How long the launch switch must hold a level to count as stable (ms)
    pub debounce_window_ms: u32,
    /// Mapping from the hold-off potentiometer to a delay
    pub holdoff: HoldOffScale,
}

impl LaunchConfig {
    /// Reference bench setup: 10-bit pot, 45mm + 100mm sensor spacing
    pub const DEFAULT: Self = Self {
        cooldown_ms: 5000,
        fail_safe_ms: 1000,
        pulse_width_ms: 30,
        start_to_sensor1_mm: 45,
        sensor1_to_sensor2_mm: 100,
        debounce_window_ms: 20,
        holdoff: HoldOffScale::DEFAULT,
    };

    /// Check the configuration for values the controller cannot run safely with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pulse_width_ms == 0 {
            return Err(ConfigError::ZeroPulseWidth);
        }
        if self.pulse_width_ms >= self.fail_safe_ms {
            return Err(ConfigError::PulseExceedsFailSafe);
        }

        self.holdoff.validate()?;
        if self.holdoff.out_max_ms >= self.fail_safe_ms {
            return Err(ConfigError::HoldOffExceedsFailSafe);
        }

        if self.start_to_sensor1_mm == 0 || self.sensor1_to_sensor2_mm == 0 {
            return Err(ConfigError::ZeroDistance);
        }
        if self.debounce_window_ms == 0 {
            return Err(ConfigError::ZeroDebounceWindow);
        }

        Ok(())
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(LaunchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_pulse_must_fit_under_fail_safe() {
        let config = LaunchConfig {
            pulse_width_ms: 1000,
            ..LaunchConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::PulseExceedsFailSafe));

        let config = LaunchConfig {
            pulse_width_ms: 0,
            ..LaunchConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroPulseWidth));
    }

    #[test]
    fn test_holdoff_must_fit_under_fail_safe() {
        let config = LaunchConfig {
            holdoff: HoldOffScale {
                out_max_ms: 1500,
                ..HoldOffScale::DEFAULT
            },
            ..LaunchConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::HoldOffExceedsFailSafe));
    }

    #[test]
    fn test_geometry_and_debounce() {
        let config = LaunchConfig {
            sensor1_to_sensor2_mm: 0,
            ..LaunchConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDistance));

        let config = LaunchConfig {
            debounce_window_ms: 0,
            ..LaunchConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDebounceWindow));
    }
}
