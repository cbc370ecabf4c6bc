//! Clock adapters for time operations.
//!
//! Provides `SystemClock` for production use. See `FixedClock` (in
//! `crate::mocks`) for a frozen test clock, available in test builds
//! or with the `test-helpers` feature.

use chrono::{DateTime, Utc};

use crate::ports::Clock;

/// System clock implementation using `Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock.
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock::new();
        let t1 = clock.now();
        let t2 = clock.now();

        assert!(t2 >= t1);
    }
}
