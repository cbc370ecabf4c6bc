//! Randomness adapters for car selection.
//!
//! Provides `ThreadRngPicker` for production use. See `FixedPicker`
//! (in `crate::mocks`) for pinning the outcome in tests.

use rand::Rng;

use crate::ports::IndexPicker;

/// Uniform index picker backed by the thread-local RNG.
///
/// Each call draws a fresh index in `0..len`, so repeated selections
/// over the same pool are independent and uniformly distributed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl ThreadRngPicker {
    /// Create a new thread-RNG picker.
    pub fn new() -> Self {
        Self
    }
}

impl IndexPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        // Precondition len >= 1 is upheld by the service's empty-pool check
        debug_assert!(len >= 1, "ThreadRngPicker pool must be non-empty");
        rand::thread_rng().gen_range(0..len)
    }
}
