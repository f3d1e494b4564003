//! GPIO pin abstractions
//!
//! Launcher wiring is mostly active-low: hall sensors and the launch switch
//! sit on pull-ups, and the status LED is common-anode. [`Polarity`] keeps
//! that translation in one place so drivers talk in "asserted" terms.

/// Electrical sense of a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Asserted = pin high
    #[default]
    ActiveHigh,
    /// Asserted = pin low
    ActiveLow,
}

impl Polarity {
    /// Pin level that represents the given logical state
    pub fn level(self, asserted: bool) -> bool {
        match self {
            Polarity::ActiveHigh => asserted,
            Polarity::ActiveLow => !asserted,
        }
    }

    /// Logical state represented by a pin level
    pub fn is_asserted(self, high: bool) -> bool {
        // The mapping is its own inverse
        self.level(high)
    }
}

/// Digital output pin
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific level
    fn set_level(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Drive the pin to the logical state under the given polarity
    fn set_asserted(&mut self, polarity: Polarity, asserted: bool) {
        self.set_level(polarity.level(asserted));
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Read the logical state under the given polarity
    fn is_asserted(&self, polarity: Polarity) -> bool {
        polarity.is_asserted(self.is_high())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(bool);

    impl InputPin for Line {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    impl OutputPin for Line {
        fn set_high(&mut self) {
            self.0 = true;
        }

        fn set_low(&mut self) {
            self.0 = false;
        }

        fn is_set_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_active_low_input() {
        // Pulled-up line reads high when nothing is there
        assert!(!Line(true).is_asserted(Polarity::ActiveLow));
        assert!(Line(false).is_asserted(Polarity::ActiveLow));
        assert!(Line(true).is_asserted(Polarity::ActiveHigh));
    }

    #[test]
    fn test_active_low_output() {
        let mut line = Line(false);
        line.set_asserted(Polarity::ActiveLow, false);
        assert!(line.is_set_high());
        line.set_asserted(Polarity::ActiveLow, true);
        assert!(!line.is_set_high());
    }
}
