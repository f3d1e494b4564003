//! Status indicator trait

use crate::state::Color;

/// Trait for the status light
pub trait StatusIndicator {
    /// Show a colour
    fn set_color(&mut self, color: Color);

    /// Colour currently shown
    fn color(&self) -> Color;
}
