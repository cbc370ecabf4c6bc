//! # Validation Module
//!
//! Input validation utilities for Veloz.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Service entry (rent)                                         │
//! │  └── THIS MODULE: rental duration, id shape                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Pricing rules (tax table, car pool)                          │
//! │  └── CoreError: NoMatchingTaxBracket, EmptyCarPool                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL / UNIQUE / FK constraints                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note that customer age is NOT validated here: an age the bracket
//! table cannot price must surface as `NoMatchingTaxBracket`, not as a
//! validation failure.

use crate::error::ValidationError;
use crate::MAX_RENTAL_DAYS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a rental duration in days.
///
/// ## Rules
/// - Must be at least 1
/// - Must be at most [`MAX_RENTAL_DAYS`]
///
/// ## Example
/// ```rust
/// use veloz_core::validation::validate_rental_days;
///
/// assert!(validate_rental_days(5).is_ok());
/// assert!(validate_rental_days(0).is_err());
/// assert!(validate_rental_days(400).is_err());
/// ```
pub fn validate_rental_days(days: i64) -> ValidationResult<()> {
    if days < 1 {
        return Err(ValidationError::MustBePositive {
            field: "numberOfDays".to_string(),
        });
    }

    if days > MAX_RENTAL_DAYS {
        return Err(ValidationError::OutOfRange {
            field: "numberOfDays".to_string(),
            min: 1,
            max: MAX_RENTAL_DAYS,
        });
    }

    Ok(())
}

/// Validates a car or category id.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 64 characters
/// - Should contain only alphanumeric characters and hyphens
///   (UUID-shaped ids pass; whitespace and punctuation do not)
///
/// ## Example
/// ```rust
/// use veloz_core::validation::validate_entity_id;
///
/// assert!(validate_entity_id("0f25ff9e-6b56-4e9e-9a31-1e0b0b5c9a10").is_ok());
/// assert!(validate_entity_id("").is_err());
/// ```
pub fn validate_entity_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 64,
        });
    }

    if !id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
