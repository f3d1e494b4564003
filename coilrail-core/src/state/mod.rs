//! Launch state as seen from outside the controller
//!
//! The controller itself is a handful of flags and timestamps; these types
//! give names to the combinations that matter: the phase for logging, the
//! indicator colour, and the diagnostic reports.

pub mod indicator;
pub mod phase;
pub mod report;

pub use indicator::Color;
pub use phase::LaunchPhase;
pub use report::Report;
