//! Input device traits

/// Debounced launch switch level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchState {
    /// Operator is holding the launch control
    Pressed,
    /// Launch control let go
    Released,
}

/// Trait for a sled position sensor
pub trait PositionSensor {
    /// Check if the sled is at the sensor right now
    ///
    /// Takes `&mut self` so implementations can filter or count reads.
    fn is_present(&mut self) -> bool;
}

/// Trait for the launch control switch
pub trait LaunchSwitch {
    /// Sample the switch at `now_ms` and return its debounced level
    ///
    /// Returns `None` while the level is still settling, including after
    /// every change.
    fn read(&mut self, now_ms: u32) -> Option<SwitchState>;
}

/// Trait for the operator's hold-off control
pub trait HoldOffInput {
    /// Raw reading, scaled later by the configured `HoldOffScale`
    fn read_raw(&mut self) -> u16;
}
