//! Hall effect position sensor
//!
//! Open-collector hall switches on a pulled-up input: the line drops low
//! while the sled's magnet is over the sensor.

use coilrail_core::traits::PositionSensor;
use coilrail_hal::{InputPin, Polarity};

/// Hall effect sled detector
pub struct HallSensor<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: InputPin> HallSensor<P> {
    /// Create a sensor reading low when the sled is present
    pub fn new(pin: P) -> Self {
        Self::with_polarity(pin, Polarity::ActiveLow)
    }

    /// Create a sensor with explicit polarity (push-pull sensor modules)
    pub fn with_polarity(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }
}

impl<P: InputPin> PositionSensor for HallSensor<P> {
    fn is_present(&mut self) -> bool {
        self.pin.is_asserted(self.polarity)
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

    #[test]
    fn test_active_low_presence() {
        assert!(HallSensor::new(Line(false)).is_present());
        assert!(!HallSensor::new(Line(true)).is_present());
    }

    #[test]
    fn test_active_high_presence() {
        let mut sensor = HallSensor::with_polarity(Line(true), Polarity::ActiveHigh);
        assert!(sensor.is_present());
    }
}
