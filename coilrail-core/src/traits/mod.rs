//! Hardware abstraction traits
//!
//! These traits define the interface between the launch controller and the
//! launcher hardware. The controller only ever sees [`LaunchIo`]; the
//! per-device traits let driver crates build a `LaunchIo` out of parts.

pub mod coil;
pub mod indicator;
pub mod io;
pub mod sensing;

pub use coil::CoilOutput;
pub use indicator::StatusIndicator;
pub use io::{Coil, LaunchIo, ReportSink, Sensor};
pub use sensing::{HoldOffInput, LaunchSwitch, PositionSensor, SwitchState};
