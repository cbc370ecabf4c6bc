//! # Domain Types
//!
//! Core domain types used throughout Veloz.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Car        │   │   CarCategory   │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name           │   │  name           │   │  name           │       │
//! │  │  release_year   │   │  car_ids        │   │  age            │       │
//! │  │  available      │   │  price_cents    │   │                 │       │
//! │  │  gas_available  │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  TaxMultiplier  │   │   TaxBracket    │   │   Transaction   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  per-mille u32  │   │  from..=to age  │   │  customer, car  │       │
//! │  │  1100 = 1.10x   │   │  multiplier     │   │  amount, due    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Tax Multiplier
// =============================================================================

/// Age-based price multiplier represented in per-mille fixed point.
///
/// ## Why Per-Mille?
/// 1 per-mille = 0.001x = 1/1000
/// 1100 = 1.10x (young-driver surcharge), 1300 = 1.30x
///
/// Multipliers stay in integer arithmetic end to end; floats appear
/// nowhere in the pricing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxMultiplier(u32);

impl TaxMultiplier {
    /// Creates a multiplier from per-mille units.
    #[inline]
    pub const fn from_per_mille(per_mille: u32) -> Self {
        TaxMultiplier(per_mille)
    }

    /// Creates a multiplier from a factor (for configuration convenience).
    ///
    /// `TaxMultiplier::from_factor(1.1)` == `from_per_mille(1100)`.
    pub fn from_factor(factor: f64) -> Self {
        TaxMultiplier((factor * 1000.0).round() as u32)
    }

    /// Returns the multiplier in per-mille units.
    #[inline]
    pub const fn per_mille(&self) -> u32 {
        self.0
    }

    /// Returns the multiplier as a factor (for display only).
    #[inline]
    pub fn factor(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Identity multiplier (1.0x).
    #[inline]
    pub const fn identity() -> Self {
        TaxMultiplier(1000)
    }
}

impl Default for TaxMultiplier {
    fn default() -> Self {
        TaxMultiplier::identity()
    }
}

// =============================================================================
// Tax Bracket
// =============================================================================

/// An age range mapped to a price multiplier.
///
/// Bounds are inclusive on both ends: a bracket `{from: 18, to: 25}`
/// contains ages 18 and 25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lowest age contained in the bracket (inclusive).
    pub from: u32,

    /// Highest age contained in the bracket (inclusive).
    pub to: u32,

    /// Multiplier applied to the category's daily rate.
    pub multiplier: TaxMultiplier,
}

impl TaxBracket {
    /// Creates a bracket covering `from..=to` with the given multiplier.
    pub const fn new(from: u32, to: u32, multiplier: TaxMultiplier) -> Self {
        TaxBracket {
            from,
            to,
            multiplier,
        }
    }

    /// Whether the bracket contains the given age (inclusive bounds).
    #[inline]
    pub const fn contains(&self, age: u32) -> bool {
        self.from <= age && age <= self.to
    }
}

// =============================================================================
// Car
// =============================================================================

/// A rentable car.
///
/// Identity is the `id`; the remaining fields describe the vehicle for
/// the receipt and fleet management. Immutable once loaded - the store
/// owns the canonical record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name, e.g. "Fiat Uno".
    pub name: String,

    /// Model release year.
    pub release_year: i32,

    /// Whether the car is in the rentable fleet.
    pub available: bool,

    /// Whether the car is fueled and ready to leave the lot.
    pub gas_available: bool,
}

// =============================================================================
// Car Category
// =============================================================================

/// A class of rentable cars sharing a base daily price and a pool of
/// candidate car ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarCategory {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name, e.g. "Hatch".
    pub name: String,

    /// Candidate car ids. Selection requires at least one entry.
    pub car_ids: Vec<String>,

    /// Base daily rate in centavos.
    pub price_cents: i64,
}

impl CarCategory {
    /// The base daily rate as `Money`.
    #[inline]
    pub fn daily_price(&self) -> crate::money::Money {
        crate::money::Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A rental customer. Only `age` participates in pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Customer name, for the receipt.
    pub name: String,

    /// Age in whole years. Drives the tax bracket lookup.
    pub age: u32,
}

// =============================================================================
// Transaction
// =============================================================================

/// The output receipt of a completed rental pricing operation.
///
/// ## Lifecycle
/// Created once per `rent` call, returned to the caller, never
/// persisted by the core. `amount` and `due_date` are pre-formatted
/// strings: comparisons and display operate on the formatted
/// representation, not on raw numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The customer the quote was produced for.
    pub customer: Customer,

    /// The car selected from the category's pool.
    pub car: Car,

    /// Final price, formatted as Brazilian reais ("R$ 206,80").
    pub amount: String,

    /// Return date, formatted as a pt-BR long date ("14 de março de 2021").
    pub due_date: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_conversions() {
        let m = TaxMultiplier::from_per_mille(1100);
        assert_eq!(m.per_mille(), 1100);
        assert_eq!(m.factor(), 1.1);

        assert_eq!(TaxMultiplier::from_factor(1.3), TaxMultiplier::from_per_mille(1300));
        assert_eq!(TaxMultiplier::identity().per_mille(), 1000);
    }

    #[test]
    fn test_bracket_contains_inclusive() {
        let bracket = TaxBracket::new(18, 25, TaxMultiplier::from_per_mille(1100));

        assert!(bracket.contains(18));
        assert!(bracket.contains(25));
        assert!(bracket.contains(20));
        assert!(!bracket.contains(17));
        assert!(!bracket.contains(26));
    }

    #[test]
    fn test_transaction_serializes_camel_case() {
        let tx = Transaction {
            customer: Customer {
                id: "c1".into(),
                name: "Maria".into(),
                age: 20,
            },
            car: Car {
                id: "car-1".into(),
                name: "Fiat Uno".into(),
                release_year: 2019,
                available: true,
                gas_available: true,
            },
            amount: "R$ 206,80".into(),
            due_date: "14 de março de 2021".into(),
        };

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["dueDate"], "14 de março de 2021");
        assert_eq!(json["car"]["gasAvailable"], true);
        assert_eq!(json["car"]["releaseYear"], 2019);
    }
}
