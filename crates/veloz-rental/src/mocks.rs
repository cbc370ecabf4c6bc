//! Deterministic adapters for testing.
//!
//! Available in test builds or with the `test-helpers` feature:
//!
//! ```toml
//! [dev-dependencies]
//! veloz-rental = { version = "*", features = ["test-helpers"] }
//! ```
//!
//! The original rental flow is nondeterministic twice over (random car
//! selection, wall clock). These adapters pin both, and the store
//! records its calls so tests can assert exactly which id was looked up.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::ports::{CarStore, Clock, IndexPicker, StoreError};
use veloz_core::Car;

// =============================================================================
// InMemoryCarStore
// =============================================================================

/// In-memory car store that records every `find` call.
///
/// # Examples
///
/// ```ignore
/// use veloz_rental::mocks::InMemoryCarStore;
/// use veloz_core::Car;
///
/// let car = Car {
///     id: "car-1".into(),
///     name: "Fiat Uno".into(),
///     release_year: 2019,
///     available: true,
///     gas_available: true,
/// };
/// let store = InMemoryCarStore::new().with_car(car);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCarStore {
    cars: HashMap<String, Car>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl InMemoryCarStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a car to the store, keyed by its id.
    pub fn with_car(mut self, car: Car) -> Self {
        self.cars.insert(car.id.clone(), car);
        self
    }

    /// The ids passed to `find`, in call order.
    pub fn find_calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("InMemoryCarStore mutex poisoned - a test thread panicked while holding the lock")
            .clone()
    }
}

#[async_trait]
impl CarStore for InMemoryCarStore {
    async fn find(&self, id: &str) -> Result<Car, StoreError> {
        self.calls
            .lock()
            .expect("InMemoryCarStore mutex poisoned - a test thread panicked while holding the lock")
            .push(id.to_string());

        self.cars
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }
}

// =============================================================================
// FixedClock
// =============================================================================

/// Clock frozen at a configured instant.
///
/// # Examples
///
/// ```ignore
/// use chrono::{TimeZone, Utc};
/// use veloz_rental::mocks::FixedClock;
/// use veloz_rental::ports::Clock;
///
/// let clock = FixedClock::at(Utc.with_ymd_and_hms(2021, 3, 9, 0, 0, 0).unwrap());
/// assert_eq!(clock.now().to_rfc3339(), "2021-03-09T00:00:00+00:00");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Create a clock frozen at the given instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        FixedClock(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// =============================================================================
// FixedPicker
// =============================================================================

/// Index picker that always returns the configured position.
///
/// Also counts its calls, so tests can assert the random seam was
/// consulted exactly once per selection.
#[derive(Debug, Clone, Default)]
pub struct FixedPicker {
    index: usize,
    calls: Arc<Mutex<usize>>,
}

impl FixedPicker {
    /// Create a picker pinned to `index`.
    pub fn at(index: usize) -> Self {
        FixedPicker {
            index,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of times `pick` was called.
    pub fn call_count(&self) -> usize {
        *self
            .calls
            .lock()
            .expect("FixedPicker mutex poisoned - a test thread panicked while holding the lock")
    }
}

impl IndexPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        let mut calls = self
            .calls
            .lock()
            .expect("FixedPicker mutex poisoned - a test thread panicked while holding the lock");
        *calls += 1;

        debug_assert!(self.index < len, "FixedPicker index out of bounds");
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_car() -> Car {
        Car {
            id: "car-1".into(),
            name: "Fiat Uno".into(),
            release_year: 2019,
            available: true,
            gas_available: true,
        }
    }

    #[tokio::test]
    async fn test_in_memory_store_records_calls() {
        let store = InMemoryCarStore::new().with_car(sample_car());

        let car = store.find("car-1").await.unwrap();
        assert_eq!(car.name, "Fiat Uno");

        let err = store.find("missing").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));

        assert_eq!(store.find_calls(), vec!["car-1", "missing"]);
    }

    #[test]
    fn test_fixed_clock_is_frozen() {
        let instant = Utc.with_ymd_and_hms(2021, 3, 9, 12, 0, 0).unwrap();
        let clock = FixedClock::at(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn test_fixed_picker_counts_calls() {
        let picker = FixedPicker::at(2);
        assert_eq!(picker.pick(5), 2);
        assert_eq!(picker.pick(5), 2);
        assert_eq!(picker.call_count(), 2);
    }
}
