//! Sled velocity from sensor timing
//!
//! Integer millimeters per second, truncated, matching the millisecond
//! resolution of the clock.

use crate::config::LaunchConfig;

/// Intervals longer than this are taken as a wrapped negative difference
/// (sensor 2 latched before sensor 1) rather than a real gap.
const MAX_INTERVAL_MS: u32 = u32::MAX / 2;

/// Average speed over `distance_mm` covered in `interval_ms`
///
/// Returns `None` for a zero interval (sensor bounce or two sensors latched
/// in the same iteration) and for an out-of-order pair.
pub fn speed_mm_per_s(distance_mm: u32, interval_ms: u32) -> Option<u32> {
    if interval_ms > MAX_INTERVAL_MS {
        return None;
    }

    let speed = (u64::from(distance_mm) * 1000).checked_div(u64::from(interval_ms))?;
    Some(u32::try_from(speed).unwrap_or(u32::MAX))
}

/// Timestamps of one complete launch (ms)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LaunchTimes {
    /// Coil A trigger time
    pub epoch_ms: u32,
    /// Sensor 1 latch time
    pub sensor1_ms: u32,
    /// Sensor 2 latch time
    pub sensor2_ms: u32,
}

/// Speeds at the two sensors (mm/s), `None` when indeterminate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Velocities {
    /// Average from rest to sensor 1
    pub sensor1: Option<u32>,
    /// Average from sensor 1 to sensor 2
    pub sensor2: Option<u32>,
}

impl LaunchTimes {
    /// Compute both speeds using the configured rail geometry
    pub fn velocities(&self, config: &LaunchConfig) -> Velocities {
        Velocities {
            sensor1: speed_mm_per_s(
                config.start_to_sensor1_mm,
                self.sensor1_ms.wrapping_sub(self.epoch_ms),
            ),
            sensor2: speed_mm_per_s(
                config.sensor1_to_sensor2_mm,
                self.sensor2_ms.wrapping_sub(self.sensor1_ms),
            ),
        }
    }
}
