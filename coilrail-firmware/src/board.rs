//! RP2040 bindings for the coilrail HAL traits
//!
//! Thin newtypes over embassy-rp peripherals so the board-agnostic drivers
//! can run on them.

use coilrail_hal::{AdcError, AnalogInput, InputPin, Monotonic, OutputPin};
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Output};
use embassy_time::Instant;

/// RP2040 ADC resolution
pub const ADC_FULL_SCALE: u16 = 4095;

/// Push-pull output
pub struct RpOutput(pub Output<'static>);

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Digital input
pub struct RpInput(pub Input<'static>);

impl InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// One ADC channel with the converter to itself
///
/// Only the hold-off pot uses the ADC, so it owns the peripheral.
pub struct RpAnalog {
    adc: Adc<'static, Blocking>,
    channel: Channel<'static>,
}

impl RpAnalog {
    pub fn new(adc: Adc<'static, Blocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for RpAnalog {
    fn read_raw(&mut self) -> Result<u16, AdcError> {
        self.adc
            .blocking_read(&mut self.channel)
            .map_err(|_| AdcError::ConversionFailed)
    }

    fn full_scale(&self) -> u16 {
        ADC_FULL_SCALE
    }
}

/// Embassy time driver as a wrapping millisecond clock
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

impl Monotonic for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Truncation gives the wrapping u32 count
        Instant::now().as_millis() as u32
    }
}
