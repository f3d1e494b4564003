//! Switch debouncing
//!
//! A level counts as stable once it has been observed continuously for the
//! configured window. Any change restarts the window. Nothing here blocks:
//! the caller feeds timestamped samples at whatever rate its loop runs and
//! decides what to do while the input is still settling.

/// Incremental debouncer fed one sample at a time
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    window_ms: u32,
    /// Level currently being timed and when it was first seen
    candidate: Option<(bool, u32)>,
}

impl Debouncer {
    /// Create a debouncer requiring `window_ms` of constant level
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            candidate: None,
        }
    }

    /// Feed a raw sample taken at `now_ms`
    ///
    /// Returns the level once it has held for the full window, `None`
    /// while it is still settling.
    pub fn update(&mut self, level: bool, now_ms: u32) -> Option<bool> {
        match self.candidate {
            Some((held, since)) if held == level => {
                if now_ms.wrapping_sub(since) >= self.window_ms {
                    Some(level)
                } else {
                    None
                }
            }
            _ => {
                self.candidate = Some((level, now_ms));
                None
            }
        }
    }
}

/// Stable level of a complete sample sequence
///
/// `samples` are `(timestamp_ms, level)` pairs in time order. Returns the
/// final level if it has been constant for at least `window_ms` up to the
/// last sample, otherwise `None`.
pub fn settle(samples: &[(u32, bool)], window_ms: u32) -> Option<bool> {
    let mut debouncer = Debouncer::new(window_ms);
    let mut stable = None;
    for &(at, level) in samples {
        stable = debouncer.update(level, at);
    }
    stable
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_needs_full_window() {
        let mut db = Debouncer::new(20);
        assert_eq!(db.update(true, 0), None);
        assert_eq!(db.update(true, 19), None);
        assert_eq!(db.update(true, 20), Some(true));
        assert_eq!(db.update(true, 500), Some(true));
    }

    #[test]
    fn test_bounce_restarts_window() {
        let mut db = Debouncer::new(20);
        db.update(false, 0);
        db.update(false, 15);
        // Bounce
        assert_eq!(db.update(true, 16), None);
        assert_eq!(db.update(false, 17), None);
        assert_eq!(db.update(false, 36), None);
        assert_eq!(db.update(false, 37), Some(false));
    }

    #[test]
    fn test_window_across_clock_wrap() {
        let mut db = Debouncer::new(20);
        db.update(true, u32::MAX - 5);
        assert_eq!(db.update(true, 10), None);
        assert_eq!(db.update(true, 14), Some(true));
    }

    #[test]
    fn test_settle_sequence() {
        // Twenty 1ms polls after the last change, like a scanned contact
        let mut samples = [(0u32, true); 24];
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample = (i as u32, i >= 3);
        }
        assert_eq!(settle(&samples, 20), Some(true));
        assert_eq!(settle(&samples[..20], 20), None);
        assert_eq!(settle(&[], 20), None);
    }

    proptest! {
        #[test]
        fn prop_never_reports_level_younger_than_window(
            levels in proptest::collection::vec(any::<bool>(), 1..64),
            step in 1u32..10,
        ) {
            let window = 20;
            let mut db = Debouncer::new(window);
            let mut since = 0u32;
            let mut last = None;
            for (i, level) in levels.iter().copied().enumerate() {
                let now = i as u32 * step;
                if last != Some(level) {
                    since = now;
                    last = Some(level);
                }
                if let Some(stable) = db.update(level, now) {
                    prop_assert_eq!(stable, level);
                    prop_assert!(now - since >= window);
                }
            }
        }
    }
}
