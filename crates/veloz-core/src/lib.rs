//! # veloz-core: Pure Business Logic for Veloz
//!
//! This crate is the **heart** of the Veloz rental system. It contains all
//! pricing rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Veloz Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                veloz-rental (RentalService)                     │   │
//! │  │    choose car ──► look up tax ──► price ──► Transaction        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ veloz-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │    tax    │  │  locale   │  │   │
//! │  │   │    Car    │  │   Money   │  │ TaxTable  │  │  pt-BR    │  │   │
//! │  │   │ Category  │  │ rounding  │  │ brackets  │  │  dates    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO ENTROPY • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    veloz-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Car, CarCategory, Customer, Transaction)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`tax`] - Age-bracket tax multiplier table
//! - [`locale`] - pt-BR long date formatting
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in centavos (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use veloz_core::money::Money;
//! use veloz_core::tax::TaxTable;
//!
//! // Daily rate of R$ 37,60 in centavos (never from floats!)
//! let daily = Money::from_cents(3760);
//!
//! // A 20-year-old falls in the 18-25 bracket: 1.1x
//! let multiplier = TaxTable::default().multiplier_for(20).unwrap();
//!
//! // 37,60 x 1.1 x 5 days = R$ 206,80
//! let amount = daily.apply_multiplier(multiplier).multiply_days(5);
//! assert_eq!(amount.to_string(), "R$ 206,80");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod locale;
pub mod money;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use veloz_core::Money` instead of
// `use veloz_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use tax::TaxTable;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum rental duration in days for a single transaction.
///
/// ## Business Reason
/// Prevents accidental multi-year quotes (e.g., typing 500 instead of 5).
/// Long-term leasing is a different product with different pricing.
pub const MAX_RENTAL_DAYS: i64 = 365;

/// Minimum driving age accepted by the default bracket table.
///
/// ## Business Reason
/// Brazilian law: a driver must be at least 18. Ages below this never
/// match a bracket and fail the price lookup explicitly.
pub const MIN_DRIVER_AGE: u32 = 18;
