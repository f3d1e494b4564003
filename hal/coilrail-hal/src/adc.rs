//! Analog input abstraction

/// Errors from an analog conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete
    ConversionFailed,
}

/// Single analog channel
///
/// Takes `&mut self` because most ADCs are a shared peripheral that must
/// be reconfigured for every conversion.
pub trait AnalogInput {
    /// Read a raw conversion result, right-aligned
    fn read_raw(&mut self) -> Result<u16, AdcError>;

    /// Largest value `read_raw` can return (e.g. 1023 for 10-bit, 4095 for 12-bit)
    fn full_scale(&self) -> u16;
}
