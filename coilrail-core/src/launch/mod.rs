//! Launch sequencing
//!
//! The [`LaunchController`] owns every piece of launch state and advances it
//! one polling iteration at a time. Each iteration runs the same fixed
//! sequence of checks; the order is what keeps the coils safe.

pub mod controller;
pub mod inputs;
pub mod velocity;

#[cfg(test)]
mod sim;

pub use controller::{LaunchController, LaunchStatus};
pub use inputs::Inputs;
pub use velocity::{speed_mm_per_s, LaunchTimes, Velocities};
