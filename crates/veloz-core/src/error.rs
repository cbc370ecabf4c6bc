//! # Error Types
//!
//! Domain-specific error types for veloz-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  veloz-core errors (this file)                                         │
//! │  ├── CoreError        - Pricing rule violations                        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  veloz-rental errors (separate crate)                                  │
//! │  ├── StoreError       - Car lookup failures (port level)               │
//! │  └── RentalError      - What the caller of rent() sees                 │
//! │                                                                         │
//! │  veloz-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → RentalError → caller              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (age, category name, etc.)
//! 3. Errors are enum variants, never String
//! 4. No silent defaults: an unpriceable request is an error

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing rule violations.
///
/// These errors represent requests the business rules cannot price.
/// They propagate to the caller unchanged; nothing in the core catches
/// and converts them.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Customer age falls outside every configured tax bracket.
    ///
    /// ## When This Occurs
    /// - Age below the youngest bracket (under 18 with the default table)
    /// - Age above the oldest bracket (over 100 with the default table)
    ///
    /// There is deliberately no fallback multiplier.
    #[error("no tax bracket matches age {age}")]
    NoMatchingTaxBracket { age: u32 },

    /// Car selection was attempted on a category with no candidate cars.
    ///
    /// ## When This Occurs
    /// - A category record with an empty `car_ids` pool reaches the
    ///   selection step. This is a precondition failure of the caller,
    ///   surfaced before any entropy is consumed.
    #[error("category '{category}' has no cars to choose from")]
    EmptyCarPool { category: String },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before pricing logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., malformed id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NoMatchingTaxBracket { age: 17 };
        assert_eq!(err.to_string(), "no tax bracket matches age 17");

        let err = CoreError::EmptyCarPool {
            category: "Hatch".to_string(),
        };
        assert_eq!(err.to_string(), "category 'Hatch' has no cars to choose from");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "numberOfDays".to_string(),
        };
        assert_eq!(err.to_string(), "numberOfDays must be positive");

        let err = ValidationError::OutOfRange {
            field: "numberOfDays".to_string(),
            min: 1,
            max: 365,
        };
        assert_eq!(err.to_string(), "numberOfDays must be between 1 and 365");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "carId".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
