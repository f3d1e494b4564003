//! Coil output trait

/// Trait for a coil bank driver
///
/// Implementations switch the coil's MOSFET/SSR gate.
pub trait CoilOutput {
    /// Energize or release the coil
    fn set_energized(&mut self, on: bool);

    /// Check if the coil is currently commanded on
    fn is_energized(&self) -> bool;
}
