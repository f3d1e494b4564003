//! Time source abstraction

/// Free-running millisecond clock
///
/// The count wraps at `u32::MAX` (about 49.7 days). Callers compare
/// instants with `wrapping_sub`, never with `<`.
pub trait Monotonic {
    /// Milliseconds since an arbitrary epoch (usually boot)
    fn now_ms(&self) -> u32;
}
