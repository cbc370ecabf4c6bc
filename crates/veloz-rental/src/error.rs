//! # Service Error Types
//!
//! What callers of `RentalService` see.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError (pricing rules)     StoreError (car lookup)                 │
//! │       │                              │                                  │
//! │       └──────────────┬───────────────┘                                  │
//! │                      ▼                                                  │
//! │                RentalError (this module)                                │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │                caller of rent() / available_car()                       │
//! │                                                                         │
//! │  Both wrappers are transparent: a NotFound from the store reads         │
//! │  as "car not found: <id>" at the caller, unchanged.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::ports::StoreError;
use veloz_core::CoreError;

/// Failures of a rental pricing operation.
#[derive(Debug, Error)]
pub enum RentalError {
    /// Pricing rule violation (tax bracket, car pool, validation).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Car store failure, propagated unchanged. No retry, no fallback
    /// car selection.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Adding the rental duration to today's date overflowed the
    /// calendar. Unreachable for validated durations; kept explicit
    /// instead of panicking.
    #[error("cannot compute a due date {days} days ahead")]
    DueDateOutOfRange { days: i64 },
}

/// Convenience type alias for Results with RentalError.
pub type RentalResult<T> = Result<T, RentalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_is_transparent() {
        let err: RentalError = StoreError::NotFound {
            id: "car-9".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "car not found: car-9");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: RentalError = CoreError::NoMatchingTaxBracket { age: 17 }.into();
        assert_eq!(err.to_string(), "no tax bracket matches age 17");
    }
}
