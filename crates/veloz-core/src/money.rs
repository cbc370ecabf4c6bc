//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    37.6 * 1.1 = 41.360000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    3760 centavos x 1100 per-mille = 4136 centavos, exactly              │
//! │    Rounding happens once, explicitly, at the centavo                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use veloz_core::money::Money;
//! use veloz_core::types::TaxMultiplier;
//!
//! // Create from centavos (preferred)
//! let daily = Money::from_cents(3760); // R$ 37,60
//!
//! // Apply an age multiplier, then the rental duration
//! let amount = daily.apply_multiplier(TaxMultiplier::from_per_mille(1300)).multiply_days(5);
//! assert_eq!(amount.cents(), 24440); // R$ 244,40
//!
//! // NEVER do this:
//! // let bad = Money::from_float(37.6); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::types::TaxMultiplier;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (centavos, BRL).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// Every monetary value in the system flows through this type:
/// `CarCategory.price_cents` is a `Money` in disguise, the pricing
/// pipeline multiplies it, and only the receipt formats it for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use veloz_core::money::Money;
    ///
    /// let daily = Money::from_cents(3760); // Represents R$ 37,60
    /// assert_eq!(daily.cents(), 3760);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in centavos (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (reais) portion.
    ///
    /// ## Example
    /// ```rust
    /// use veloz_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(3760).reais(), 37);
    /// assert_eq!(Money::from_cents(-550).reais(), -5);
    /// ```
    #[inline]
    pub const fn reais(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (centavos) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies an age-bracket tax multiplier, rounding half-up at the centavo.
    ///
    /// ## Fixed-Point Arithmetic
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  multiplier is per-mille: 1100 = 1.10x                              │
    /// │                                                                     │
    /// │  Formula: (cents * per_mille + 500) / 1000                         │
    /// │  The +500 provides rounding (500/1000 = 0.5)                       │
    /// │                                                                     │
    /// │  3760 x 1100 = 4_136_000 ──► 4136 centavos (R$ 41,36)             │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use veloz_core::money::Money;
    /// use veloz_core::types::TaxMultiplier;
    ///
    /// let daily = Money::from_cents(3760);           // R$ 37,60
    /// let m = TaxMultiplier::from_per_mille(1300);   // 1.3x
    /// assert_eq!(daily.apply_multiplier(m).cents(), 4888);
    /// ```
    pub fn apply_multiplier(&self, multiplier: TaxMultiplier) -> Money {
        // i128 to prevent overflow on large amounts
        let cents = (self.0 as i128 * multiplier.per_mille() as i128 + 500) / 1000;
        Money::from_cents(cents as i64)
    }

    /// Multiplies money by a number of rental days.
    ///
    /// ## Example
    /// ```rust
    /// use veloz_core::money::Money;
    ///
    /// let daily = Money::from_cents(4136);
    /// assert_eq!(daily.multiply_days(5).cents(), 20680); // R$ 206,80
    /// ```
    #[inline]
    pub const fn multiply_days(&self, days: i64) -> Self {
        Money(self.0 * days)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation formats money as Brazilian reais.
///
/// Matches the receipt format: "R$ 1.234,56" (dot for thousands,
/// comma for centavos). This IS the amount string on the transaction,
/// not just a debug view.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}R$ {},{:02}",
            sign,
            group_thousands(self.reais().abs()),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Groups the integer part with dots, pt-BR style: 1234567 -> "1.234.567".
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(3760);
        assert_eq!(money.cents(), 3760);
        assert_eq!(money.reais(), 37);
        assert_eq!(money.cents_part(), 60);
    }

    #[test]
    fn test_display_brl() {
        assert_eq!(format!("{}", Money::from_cents(3760)), "R$ 37,60");
        assert_eq!(format!("{}", Money::from_cents(500)), "R$ 5,00");
        assert_eq!(format!("{}", Money::from_cents(20680)), "R$ 206,80");
        assert_eq!(format!("{}", Money::from_cents(123456789)), "R$ 1.234.567,89");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-R$ 5,50");
        assert_eq!(format!("{}", Money::from_cents(0)), "R$ 0,00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!(a.multiply_days(3).cents(), 3000);
    }

    #[test]
    fn test_apply_multiplier_exact() {
        // R$ 37,60 x 1.1 = R$ 41,36 with no residue
        let daily = Money::from_cents(3760);
        let m = TaxMultiplier::from_per_mille(1100);
        assert_eq!(daily.apply_multiplier(m).cents(), 4136);
    }

    #[test]
    fn test_apply_multiplier_rounds_half_up() {
        // 1 centavo x 1.5x = 1.5 centavos, rounds to 2
        let m = TaxMultiplier::from_per_mille(1500);
        assert_eq!(Money::from_cents(1).apply_multiplier(m).cents(), 2);
        // 3 x 1.1 = 3.3, rounds down to 3
        let m = TaxMultiplier::from_per_mille(1100);
        assert_eq!(Money::from_cents(3).apply_multiplier(m).cents(), 3);
    }

    #[test]
    fn test_pricing_scenarios() {
        // 37,60 x 1.3 x 5 = 244,40
        let daily = Money::from_cents(3760);
        let amount = daily
            .apply_multiplier(TaxMultiplier::from_per_mille(1300))
            .multiply_days(5);
        assert_eq!(amount.cents(), 24440);

        // 37,60 x 1.1 x 5 = 206,80
        let amount = daily
            .apply_multiplier(TaxMultiplier::from_per_mille(1100))
            .multiply_days(5);
        assert_eq!(amount.cents(), 20680);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
    }
}
