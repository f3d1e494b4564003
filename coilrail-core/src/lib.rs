//! Board-agnostic core logic for the coilrail launcher
//!
//! This crate contains all launch logic that does not depend on specific
//! hardware:
//!
//! - Launch controller (sequencing, rearm gate, pulse timing)
//! - Fail-safe watchdog
//! - Velocity calculation
//! - Switch debouncing and hold-off scaling
//! - Indicator colour and diagnostic report types
//! - Hardware abstraction traits the controller drives

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod input;
pub mod launch;
pub mod safety;
pub mod state;
pub mod traits;

pub use config::LaunchConfig;
pub use launch::LaunchController;
