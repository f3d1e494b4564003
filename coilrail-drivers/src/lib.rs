//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined in
//! coilrail-core, built on the pin/ADC/clock traits from coilrail-hal:
//!
//! - Coil bank output (GPIO gate drive)
//! - Position sensors (hall effect, active-low)
//! - Hold-off potentiometer
//! - Debounced launch switch
//! - Tri-colour status LED
//! - Serial report writer
//! - [`rig::PinRig`], which wires all of the above into `LaunchIo`

#![no_std]
#![deny(unsafe_code)]

pub mod coil;
pub mod indicator;
pub mod report;
pub mod rig;
pub mod sensor;
pub mod switch;

pub use coil::GpioCoil;
pub use indicator::RgbLed;
pub use report::LineWriter;
pub use rig::PinRig;
pub use sensor::{HallSensor, HoldOffPot};
pub use switch::DebouncedSwitch;
