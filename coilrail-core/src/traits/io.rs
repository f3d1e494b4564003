//! Controller I/O interface

use crate::state::{Color, Report};
use crate::traits::SwitchState;

/// Coil bank identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Coil {
    /// First bank, fired by the launch switch
    A,
    /// Second bank, fired after sensor 1 plus hold-off
    B,
}

impl Coil {
    /// Zero-based index (hardware and report numbering)
    pub fn index(self) -> u8 {
        match self {
            Coil::A => 0,
            Coil::B => 1,
        }
    }
}

/// Position sensor identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sensor {
    /// Before coil B; also the coil B trigger
    One,
    /// Exit sensor
    Two,
}

impl Sensor {
    /// One-based number as printed on the rail
    pub fn number(self) -> u8 {
        match self {
            Sensor::One => 1,
            Sensor::Two => 2,
        }
    }
}

/// Destination for diagnostic reports
pub trait ReportSink {
    /// Emit one report
    fn report(&mut self, report: Report);
}

/// Everything the launch controller needs from the outside world
///
/// One `LaunchController::step` makes a bounded number of calls here. Only
/// [`LaunchIo::hold_off`] may block.
pub trait LaunchIo {
    /// Wrapping millisecond clock
    fn now_ms(&mut self) -> u32;

    /// Check if the sled is at a position sensor
    fn sensor_present(&mut self, sensor: Sensor) -> bool;

    /// Debounced launch switch level, `None` before it first settles
    fn launch_switch(&mut self) -> Option<SwitchState>;

    /// Raw hold-off control reading
    fn holdoff_raw(&mut self) -> u16;

    /// Drive a coil output
    fn set_coil(&mut self, coil: Coil, energized: bool);

    /// Drive the status indicator
    fn set_indicator(&mut self, color: Color);

    /// Block for `ms` milliseconds
    ///
    /// Nothing else in the control loop runs meanwhile, and the wait cannot
    /// be cut short.
    fn hold_off(&mut self, ms: u32);

    /// Emit a diagnostic report
    fn report(&mut self, report: Report);
}
