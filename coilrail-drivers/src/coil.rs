//! GPIO coil output
//!
//! Each coil bank is switched by a MOSFET or SSR on one GPIO. The gate can
//! be wired active-high (default) or active-low.

use coilrail_core::traits::CoilOutput;
use coilrail_hal::{OutputPin, Polarity};

/// GPIO coil driver
pub struct GpioCoil<P> {
    pin: P,
    polarity: Polarity,
    /// Current logical state (true = energized)
    on: bool,
}

impl<P: OutputPin> GpioCoil<P> {
    /// Create a new coil driver
    ///
    /// The coil is released immediately so a freshly configured pin can
    /// never leave it energized.
    pub fn new(pin: P, polarity: Polarity) -> Self {
        let mut coil = Self {
            pin,
            polarity,
            on: false,
        };
        coil.set_energized(false);
        coil
    }

    /// Create a coil driver for an active-high gate
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, Polarity::ActiveHigh)
    }

    /// Create a coil driver for an active-low gate
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, Polarity::ActiveLow)
    }

    /// Get access to the underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P: OutputPin> CoilOutput for GpioCoil<P> {
    fn set_energized(&mut self, on: bool) {
        self.on = on;
        self.pin.set_asserted(self.polarity, on);
    }

    fn is_energized(&self) -> bool {
        self.on
    }
}
