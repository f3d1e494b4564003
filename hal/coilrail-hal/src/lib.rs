//! Coilrail Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the launcher needs.
//! Chip support (the RP2040 firmware, host simulators in tests) implements
//! them so the drivers and the launch controller never touch registers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  coilrail-firmware (embassy, RP2040)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  coilrail-drivers (coil, hall, LED...)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  coilrail-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O, with [`gpio::Polarity`]
//!   for active-low wiring
//! - [`adc::AnalogInput`] - Single-channel analog sampling
//! - [`time::Monotonic`] - Wrapping millisecond clock

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod time;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AnalogInput};
pub use gpio::{InputPin, OutputPin, Polarity};
pub use time::Monotonic;
