//! Status indicator colour selection

/// Indicator colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// All segments dark
    #[default]
    Off,
    /// A coil is energized
    Red,
    /// Armed and ready to launch
    Green,
    /// Cooling down, launch locked out
    Blue,
}

impl Color {
    /// Colour shown while a coil is energized
    pub const ACTIVE: Color = Color::Red;
    /// Colour shown while armed
    pub const READY: Color = Color::Green;
    /// Colour shown while locked out
    pub const COOLDOWN: Color = Color::Blue;

    /// Pick the indicator colour
    ///
    /// Active outranks cooldown, which outranks ready.
    pub fn for_status(coil_active: bool, ready: bool) -> Self {
        if coil_active {
            Color::ACTIVE
        } else if !ready {
            Color::COOLDOWN
        } else {
            Color::READY
        }
    }
}
