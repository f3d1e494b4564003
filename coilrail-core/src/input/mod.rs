//! Input conditioning

pub mod debounce;

pub use debounce::{settle, Debouncer};
