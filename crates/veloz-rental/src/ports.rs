//! Ports (interfaces) for the rental service.
//!
//! The service layer defines the interfaces it needs; adapters
//! implement them. `veloz-db` provides the production `CarStore`,
//! this crate provides the production `Clock` and `IndexPicker`, and
//! `mocks` provides deterministic stand-ins for all three.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Debug;
use thiserror::Error;
use veloz_core::Car;

// =============================================================================
// Store Error
// =============================================================================

/// Failures surfaced by a [`CarStore`] lookup.
///
/// The service never retries or falls back on a store failure; the
/// error propagates unchanged to the caller of `rent`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The chosen car id does not resolve to a car.
    #[error("car not found: {id}")]
    NotFound { id: String },

    /// The backing store failed for reasons unrelated to the id.
    #[error("car store failure: {0}")]
    Backend(String),
}

// =============================================================================
// Ports
// =============================================================================

/// Port for resolving a car id to a car record.
///
/// "Available" at this level means "resolvable": the store is not
/// asked whether the car is currently rented, only whether the record
/// exists. Double-booking prevention, if required, belongs behind this
/// port, not in the service.
#[async_trait]
pub trait CarStore: Send + Sync {
    /// Resolve a car by id.
    ///
    /// # Returns
    /// The car record, or `StoreError::NotFound` when the id is absent.
    async fn find(&self, id: &str) -> Result<Car, StoreError>;
}

/// Port for obtaining the current time.
///
/// Due dates are derived from `now()`, so tests freeze the clock to
/// make receipts reproducible.
pub trait Clock: Send + Sync + Debug {
    /// Get the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Port for picking an index into a non-empty pool.
///
/// This is the randomness seam: production uses a uniform RNG, tests
/// pin the outcome. Implementations must return a value in
/// `0..len` and may assume `len >= 1` (the service rejects empty
/// pools before consulting the picker).
pub trait IndexPicker: Send + Sync + Debug {
    /// Pick an index in `0..len`.
    fn pick(&self, len: usize) -> usize;
}
