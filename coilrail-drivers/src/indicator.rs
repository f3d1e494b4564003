//! Tri-colour status LED
//!
//! Common-anode RGB LED with one GPIO per cathode, so each colour lights
//! when its pin is driven low. Only one segment is lit at a time.

use coilrail_core::state::Color;
use coilrail_core::traits::StatusIndicator;
use coilrail_hal::{OutputPin, Polarity};

/// RGB status LED
pub struct RgbLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
    polarity: Polarity,
    color: Color,
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> RgbLed<R, G, B> {
    /// Create a common-anode LED (segments active-low), initially dark
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self::with_polarity(red, green, blue, Polarity::ActiveLow)
    }

    /// Create an LED with explicit segment polarity
    pub fn with_polarity(red: R, green: G, blue: B, polarity: Polarity) -> Self {
        let mut led = Self {
            red,
            green,
            blue,
            polarity,
            color: Color::Off,
        };
        led.drive(Color::Off);
        led
    }

    fn drive(&mut self, color: Color) {
        let (r, g, b) = match color {
            Color::Red => (true, false, false),
            Color::Green => (false, true, false),
            Color::Blue => (false, false, true),
            Color::Off => (false, false, false),
        };
        self.red.set_asserted(self.polarity, r);
        self.green.set_asserted(self.polarity, g);
        self.blue.set_asserted(self.polarity, b);
        self.color = color;
    }
}

impl<R: OutputPin, G: OutputPin, B: OutputPin> StatusIndicator for RgbLed<R, G, B> {
    fn set_color(&mut self, color: Color) {
        // Called every loop iteration; skip redundant pin writes
        if color != self.color {
            self.drive(color);
        }
    }

    fn color(&self) -> Color {
        self.color
    }
}
