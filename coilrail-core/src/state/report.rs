//! Diagnostic reports
//!
//! Everything the controller has to say, as values. The `Display` form is
//! the line-oriented text the bench tooling already parses, so the wording
//! and field order are kept as-is (including the coil0/coil1 and hall1/hall2
//! numbering).

use core::fmt;

use crate::traits::{Coil, Sensor};

/// A diagnostic event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Report {
    /// Position sensor latched, offset from the launch epoch
    SensorTripped { sensor: Sensor, after_ms: u32 },
    /// Sled speed at a sensor; `None` when the interval was zero
    Speed {
        sensor: Sensor,
        mm_per_s: Option<u32>,
    },
    /// Coil energized, offset from the launch epoch
    CoilFired { coil: Coil, after_ms: u32 },
    /// Hold-off about to be applied before coil B
    HoldOff { ms: u32 },
    /// Coil pulse expired
    CoilOff { coil: Coil },
    /// Fail-safe forced a shutdown
    FailSafeTripped,
}

impl Report {
    /// Check if this is a verbose trace line rather than a result or warning
    pub fn is_verbose(&self) -> bool {
        matches!(
            self,
            Report::SensorTripped { .. } | Report::CoilFired { .. } | Report::CoilOff { .. }
        )
    }

    /// Check if this report is a safety warning
    pub fn is_warning(&self) -> bool {
        matches!(self, Report::FailSafeTripped)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Report::SensorTripped { sensor, after_ms } => {
                write!(f, "Hall{} at {} ms", sensor.number(), after_ms)
            }
            Report::Speed {
                sensor,
                mm_per_s: Some(speed),
            } => write!(f, "Hall{} Speed: {} mm/s", sensor.number(), speed),
            Report::Speed {
                sensor,
                mm_per_s: None,
            } => write!(f, "Hall{} Speed: indeterminate", sensor.number()),
            Report::CoilFired {
                coil: Coil::A,
                after_ms,
            } => write!(f, "Coil0 Fired: {}ms", after_ms),
            Report::CoilFired {
                coil: Coil::B,
                after_ms,
            } => write!(f, "Coil1 Fired: {} ms", after_ms),
            Report::HoldOff { ms } => write!(f, "Holdoff delay {} ms", ms),
            Report::CoilOff { coil } => write!(f, "Turn off coil{}", coil.index()),
            Report::FailSafeTripped => f.write_str("Launch taking too long.  Shutting down!"),
        }
    }
}
