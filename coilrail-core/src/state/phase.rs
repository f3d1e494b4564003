//! Launch phases

/// Where the launcher is in its cycle
///
/// ```text
/// CoolingDown ──(cooldown elapsed, switch released)──▶ Ready
/// Ready ──(switch pressed, rail clear)──▶ CoilAFiring
/// CoilAFiring ──(sensor 1, hold-off)──▶ CoilBFiring
/// CoilAFiring / CoilBFiring ──(pulse expired)──▶ Measuring
/// Measuring ──(both sensors seen, or fail-safe)──▶ CoolingDown
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LaunchPhase {
    /// Coils off, not armed: cooling down or switch still held
    CoolingDown,
    /// Armed, waiting for the launch switch
    Ready,
    /// First coil bank energized
    CoilAFiring,
    /// Second coil bank energized
    CoilBFiring,
    /// Coils off, launch still in progress; waiting on sensors
    Measuring,
}

impl LaunchPhase {
    /// Derive the phase from controller flags
    ///
    /// An energized coil outranks everything else so a stuck output always
    /// reads as firing.
    pub fn from_flags(ready: bool, launched: bool, coil_a: bool, coil_b: bool) -> Self {
        if coil_a {
            LaunchPhase::CoilAFiring
        } else if coil_b {
            LaunchPhase::CoilBFiring
        } else if launched {
            LaunchPhase::Measuring
        } else if ready {
            LaunchPhase::Ready
        } else {
            LaunchPhase::CoolingDown
        }
    }

    /// Check if any coil output is energized in this phase
    pub fn coils_energized(&self) -> bool {
        matches!(self, LaunchPhase::CoilAFiring | LaunchPhase::CoilBFiring)
    }

    /// Check if a launch sequence is under way
    pub fn in_launch(&self) -> bool {
        matches!(
            self,
            LaunchPhase::CoilAFiring | LaunchPhase::CoilBFiring | LaunchPhase::Measuring
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coil_outranks_flags() {
        assert_eq!(
            LaunchPhase::from_flags(false, true, true, false),
            LaunchPhase::CoilAFiring
        );
        assert_eq!(
            LaunchPhase::from_flags(true, false, false, true),
            LaunchPhase::CoilBFiring
        );
    }

    #[test]
    fn test_idle_phases() {
        assert_eq!(
            LaunchPhase::from_flags(true, false, false, false),
            LaunchPhase::Ready
        );
        assert_eq!(
            LaunchPhase::from_flags(false, false, false, false),
            LaunchPhase::CoolingDown
        );
        assert_eq!(
            LaunchPhase::from_flags(false, true, false, false),
            LaunchPhase::Measuring
        );
    }

    #[test]
    fn test_phase_queries() {
        assert!(LaunchPhase::CoilBFiring.coils_energized());
        assert!(!LaunchPhase::Measuring.coils_energized());
        assert!(LaunchPhase::Measuring.in_launch());
        assert!(!LaunchPhase::Ready.in_launch());
    }
}
