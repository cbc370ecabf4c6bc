//! # Tax Bracket Table
//!
//! Age-based price multiplier lookup.
//!
//! ## Lookup Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bracket Selection                                    │
//! │                                                                         │
//! │  Customer age: 20                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────┐                                       │
//! │  │ 18..=25  ──► 1.1x │ ◄─ MATCH (first bracket containing 20)          │
//! │  │ 26..=30  ──► 1.5x │                                                  │
//! │  │ 31..=100 ──► 1.3x │                                                  │
//! │  └──────────────────────────────┘                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  multiplier = 1.1x                                                      │
//! │                                                                         │
//! │  Age outside every bracket ──► NoMatchingTaxBracket error              │
//! │  (no silent default multiplier, ever)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The table is plain configuration data: construct a custom
//! `TaxTable` and hand it to the service to override the business
//! values, no global state involved.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{TaxBracket, TaxMultiplier};
use crate::MIN_DRIVER_AGE;

/// Ordered set of age brackets, checked first-match.
///
/// ## Example
/// ```rust
/// use veloz_core::tax::TaxTable;
///
/// let table = TaxTable::default();
/// assert_eq!(table.multiplier_for(20).unwrap().per_mille(), 1100);
/// assert!(table.multiplier_for(17).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTable {
    brackets: Vec<TaxBracket>,
}

impl TaxTable {
    /// Creates a table from an ordered bracket list.
    ///
    /// Brackets are consulted in order and the first match wins, so an
    /// overlapping list is legal but the earlier bracket shadows the
    /// later one.
    pub fn new(brackets: Vec<TaxBracket>) -> Self {
        TaxTable { brackets }
    }

    /// Read-only view of the configured brackets.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Finds the multiplier for a customer age.
    ///
    /// ## Returns
    /// * `Ok(TaxMultiplier)` - first bracket whose inclusive range contains `age`
    /// * `Err(CoreError::NoMatchingTaxBracket)` - age outside every bracket
    pub fn multiplier_for(&self, age: u32) -> CoreResult<TaxMultiplier> {
        self.brackets
            .iter()
            .find(|bracket| bracket.contains(age))
            .map(|bracket| bracket.multiplier)
            .ok_or(CoreError::NoMatchingTaxBracket { age })
    }
}

/// The standard Veloz bracket table.
///
/// Young drivers (18-25) pay a 1.1x surcharge, 26-30 a 1.5x surcharge,
/// and 31-100 the senior rate of 1.3x. Ages below 18 or above 100 are
/// not priced.
impl Default for TaxTable {
    fn default() -> Self {
        TaxTable::new(vec![
            TaxBracket::new(MIN_DRIVER_AGE, 25, TaxMultiplier::from_per_mille(1100)),
            TaxBracket::new(26, 30, TaxMultiplier::from_per_mille(1500)),
            TaxBracket::new(31, 100, TaxMultiplier::from_per_mille(1300)),
        ])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_lookup() {
        let table = TaxTable::default();

        assert_eq!(table.multiplier_for(20).unwrap().per_mille(), 1100);
        assert_eq!(table.multiplier_for(28).unwrap().per_mille(), 1500);
        assert_eq!(table.multiplier_for(50).unwrap().per_mille(), 1300);
    }

    #[test]
    fn test_boundaries_select_their_own_bracket() {
        let table = TaxTable::default();

        // `from` edge
        assert_eq!(table.multiplier_for(18).unwrap().per_mille(), 1100);
        assert_eq!(table.multiplier_for(26).unwrap().per_mille(), 1500);
        assert_eq!(table.multiplier_for(31).unwrap().per_mille(), 1300);

        // `to` edge
        assert_eq!(table.multiplier_for(25).unwrap().per_mille(), 1100);
        assert_eq!(table.multiplier_for(30).unwrap().per_mille(), 1500);
        assert_eq!(table.multiplier_for(100).unwrap().per_mille(), 1300);
    }

    #[test]
    fn test_default_table_floor_is_the_minimum_driving_age() {
        let table = TaxTable::default();

        assert_eq!(table.brackets()[0].from, MIN_DRIVER_AGE);
        assert!(table.multiplier_for(MIN_DRIVER_AGE).is_ok());
        assert!(table.multiplier_for(MIN_DRIVER_AGE - 1).is_err());
    }

    #[test]
    fn test_no_matching_bracket_is_an_error() {
        let table = TaxTable::default();

        let err = table.multiplier_for(17).unwrap_err();
        assert!(matches!(err, CoreError::NoMatchingTaxBracket { age: 17 }));

        let err = table.multiplier_for(101).unwrap_err();
        assert!(matches!(err, CoreError::NoMatchingTaxBracket { age: 101 }));
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let table = TaxTable::new(vec![
            TaxBracket::new(18, 60, TaxMultiplier::from_per_mille(1100)),
            TaxBracket::new(40, 99, TaxMultiplier::from_per_mille(1300)),
        ]);

        // 50 is inside both; the earlier bracket shadows the later one
        assert_eq!(table.multiplier_for(50).unwrap().per_mille(), 1100);
    }

    #[test]
    fn test_custom_table_injection() {
        // The pricing scenario from the rental receipts: 40-50 at 1.3x
        let table = TaxTable::new(vec![TaxBracket::new(
            40,
            50,
            TaxMultiplier::from_per_mille(1300),
        )]);

        assert_eq!(table.multiplier_for(50).unwrap().per_mille(), 1300);
        assert!(table.multiplier_for(39).is_err());
    }
}
