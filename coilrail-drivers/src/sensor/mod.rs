//! Sensor drivers

pub mod hall;
pub mod pot;

pub use hall::HallSensor;
pub use pot::HoldOffPot;
