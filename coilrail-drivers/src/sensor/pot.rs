//! Hold-off potentiometer
//!
//! Wiper on an ADC channel. The controller scales the raw count; this
//! driver only has to produce one every iteration, even if a conversion
//! fails.

use coilrail_core::traits::HoldOffInput;
use coilrail_hal::{AdcError, AnalogInput};

/// Hold-off potentiometer on an analog channel
pub struct HoldOffPot<A> {
    adc: A,
    /// Last successful conversion
    last_raw: u16,
    /// Conversions that failed and fell back to `last_raw`
    fault_count: u32,
    last_error: Option<AdcError>,
}

impl<A: AnalogInput> HoldOffPot<A> {
    /// Create a potentiometer reader
    ///
    /// Until the first good conversion the pot reads as 0 (shortest hold-off).
    pub fn new(adc: A) -> Self {
        Self {
            adc,
            last_raw: 0,
            fault_count: 0,
            last_error: None,
        }
    }

    /// Largest raw value the channel can produce
    pub fn full_scale(&self) -> u16 {
        self.adc.full_scale()
    }

    /// Number of failed conversions so far
    pub fn fault_count(&self) -> u32 {
        self.fault_count
    }

    /// Most recent conversion error, if any
    pub fn last_error(&self) -> Option<AdcError> {
        self.last_error
    }
}

impl<A: AnalogInput> HoldOffInput for HoldOffPot<A> {
    fn read_raw(&mut self) -> u16 {
        match self.adc.read_raw() {
            Ok(raw) => {
                self.last_raw = raw;
            }
            Err(e) => {
                self.fault_count = self.fault_count.saturating_add(1);
                self.last_error = Some(e);
            }
        }
        self.last_raw
    }
}
