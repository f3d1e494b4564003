//! Fail-safe watchdog
//!
//! A launch that has not finished within the ceiling means a sensor was
//! missed or the sled stalled in a coil. Either way the coils must go off.

/// Outcome of a watchdog check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyStatus {
    /// Launch idle, or in progress within the ceiling
    Ok,
    /// Launch has run past the ceiling; shut everything down
    Overrun {
        /// Time since the launch epoch (ms)
        elapsed_ms: u32,
    },
}

impl SafetyStatus {
    /// Check if the watchdog demands a shutdown
    pub fn is_fault(&self) -> bool {
        matches!(self, SafetyStatus::Overrun { .. })
    }
}

/// Watchdog on total launch duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FailSafe {
    ceiling_ms: u32,
}

impl FailSafe {
    /// Create a watchdog with the given ceiling (ms)
    pub const fn new(ceiling_ms: u32) -> Self {
        Self { ceiling_ms }
    }

    /// Check a launch that started at `epoch_ms`
    ///
    /// Trips strictly after the ceiling: exactly `ceiling_ms` is still Ok.
    pub fn check(&self, launched: bool, epoch_ms: u32, now_ms: u32) -> SafetyStatus {
        if !launched {
            return SafetyStatus::Ok;
        }

        let elapsed_ms = now_ms.wrapping_sub(epoch_ms);
        if elapsed_ms > self.ceiling_ms {
            SafetyStatus::Overrun { elapsed_ms }
        } else {
            SafetyStatus::Ok
        }
    }
}
