//! Safety monitoring
//!
//! Bounds how long a launch may keep the coils energized.

pub mod watchdog;

pub use watchdog::{FailSafe, SafetyStatus};
