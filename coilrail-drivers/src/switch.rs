//! Debounced launch switch
//!
//! Momentary switch to ground on a pulled-up input: pressed reads low.
//! Every `read` feeds one sample to a [`Debouncer`]. While the line is
//! still settling `read` gives `None`, never the previous level.

use coilrail_core::input::Debouncer;
use coilrail_core::traits::{LaunchSwitch, SwitchState};
use coilrail_hal::{InputPin, Polarity};

/// Launch switch with time-based debouncing
pub struct DebouncedSwitch<P> {
    pin: P,
    polarity: Polarity,
    debouncer: Debouncer,
    stable: Option<SwitchState>,
}

impl<P: InputPin> DebouncedSwitch<P> {
    /// Create a switch that reads low when pressed
    pub fn new(pin: P, window_ms: u32) -> Self {
        Self::with_polarity(pin, Polarity::ActiveLow, window_ms)
    }

    /// Create a switch with explicit polarity
    pub fn with_polarity(pin: P, polarity: Polarity, window_ms: u32) -> Self {
        Self {
            pin,
            polarity,
            debouncer: Debouncer::new(window_ms),
            stable: None,
        }
    }

    /// Last settled level without sampling, kept while a change settles
    pub fn stable(&self) -> Option<SwitchState> {
        self.stable
    }
}

impl<P: InputPin> LaunchSwitch for DebouncedSwitch<P> {
    fn read(&mut self, now_ms: u32) -> Option<SwitchState> {
        let pressed = self.pin.is_asserted(self.polarity);
        let settled = self.debouncer.update(pressed, now_ms).map(|level| {
            if level {
                SwitchState::Pressed
            } else {
                SwitchState::Released
            }
        });
        if settled.is_some() {
            self.stable = settled;
        }
        settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct Line<'a>(&'a Cell<bool>);

    impl InputPin for Line<'_> {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_unknown_until_stable() {
        let level = Cell::new(true);
        let mut switch = DebouncedSwitch::new(Line(&level), 20);
        for t in 0..20 {
            assert_eq!(switch.read(t), None);
        }
        assert_eq!(switch.read(20), Some(SwitchState::Released));
    }

    #[test]
    fn test_press_reported_after_window() {
        let level = Cell::new(true);
        let mut switch = DebouncedSwitch::new(Line(&level), 20);
        switch.read(0);
        assert_eq!(switch.read(25), Some(SwitchState::Released));

        level.set(false);
        assert_eq!(switch.read(30), None);
        assert_eq!(switch.read(49), None);
        assert_eq!(switch.stable(), Some(SwitchState::Released));
        assert_eq!(switch.read(50), Some(SwitchState::Pressed));
    }

    #[test]
    fn test_bounce_reads_unknown() {
        let level = Cell::new(true);
        let mut switch = DebouncedSwitch::new(Line(&level), 20);
        switch.read(0);
        switch.read(20);

        // Contact chatter on press, including samples back at the old level
        for (t, high) in [(30, false), (31, true), (32, false), (33, true), (34, false)] {
            level.set(high);
            assert_eq!(switch.read(t), None);
        }
        assert_eq!(switch.read(53), None);
        assert_eq!(switch.read(54), Some(SwitchState::Pressed));
        assert_eq!(switch.stable(), Some(SwitchState::Pressed));
    }
}
