//! Build-time launcher configuration
//!
//! Generated by build.rs from launcher.toml, which is validated before the
//! constants are emitted.

use coilrail_core::config::{HoldOffScale, LaunchConfig};

include!(concat!(env!("OUT_DIR"), "/launcher_config.rs"));
