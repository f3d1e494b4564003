//! Launcher configuration
//!
//! Every timing and geometry constant the controller uses. Values are fixed
//! at build time; the firmware generates its [`LaunchConfig`] from
//! `launcher.toml`.

pub mod launch;
pub mod scale;

pub use launch::{ConfigError, LaunchConfig};
pub use scale::HoldOffScale;
