//! # Rental Service
//!
//! The single business component: selects a car from a category,
//! prices the rental by age bracket and duration, and assembles the
//! transaction receipt.
//!
//! ## Collaborators
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       RentalService<S, C, P>                            │
//! │                                                                         │
//! │   S: CarStore     - resolves the chosen car id (async, may fail)       │
//! │   C: Clock        - "today" for the due date                           │
//! │   P: IndexPicker  - the random-selection seam                          │
//! │   TaxTable        - injected bracket configuration                      │
//! │                                                                         │
//! │   Defaults wire production adapters (SystemClock, ThreadRngPicker);     │
//! │   with_* builders swap any collaborator for a deterministic one.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The service holds no mutable state: concurrent `rent` calls share
//! nothing and may select the same car. Mutual exclusion over the
//! fleet, if required, belongs behind the `CarStore` port.

use chrono::Days;
use tracing::{debug, info};

use crate::clock::SystemClock;
use crate::error::{RentalError, RentalResult};
use crate::ports::{CarStore, Clock, IndexPicker};
use crate::random::ThreadRngPicker;
use veloz_core::error::{CoreError, CoreResult};
use veloz_core::{locale, validation, Car, CarCategory, Customer, TaxTable, Transaction};

/// Rental pricing service.
///
/// ## Usage
/// ```rust,ignore
/// let service = RentalService::new(db.cars());
/// let tx = service.rent(&customer, &category, 5).await?;
/// println!("{} due {}", tx.amount, tx.due_date);
/// ```
#[derive(Debug, Clone)]
pub struct RentalService<S, C = SystemClock, P = ThreadRngPicker> {
    store: S,
    clock: C,
    picker: P,
    tax_table: TaxTable,
}

impl<S> RentalService<S> {
    /// Creates a service over the given car store with production
    /// defaults: system clock, thread-RNG picker, standard tax table.
    pub fn new(store: S) -> Self {
        RentalService {
            store,
            clock: SystemClock::new(),
            picker: ThreadRngPicker::new(),
            tax_table: TaxTable::default(),
        }
    }
}

impl<S, C, P> RentalService<S, C, P> {
    /// Replaces the clock (e.g. with a frozen test clock).
    pub fn with_clock<C2: Clock>(self, clock: C2) -> RentalService<S, C2, P> {
        RentalService {
            store: self.store,
            clock,
            picker: self.picker,
            tax_table: self.tax_table,
        }
    }

    /// Replaces the index picker (e.g. to pin the "random" car).
    pub fn with_picker<P2: IndexPicker>(self, picker: P2) -> RentalService<S, C, P2> {
        RentalService {
            store: self.store,
            clock: self.clock,
            picker,
            tax_table: self.tax_table,
        }
    }

    /// Replaces the bracket table without touching global state.
    pub fn with_tax_table(mut self, tax_table: TaxTable) -> Self {
        self.tax_table = tax_table;
        self
    }

    /// The bracket configuration currently in effect.
    pub fn tax_table(&self) -> &TaxTable {
        &self.tax_table
    }
}

impl<S, C, P> RentalService<S, C, P>
where
    S: CarStore,
    C: Clock,
    P: IndexPicker,
{
    /// Returns a uniformly-distributed index into a non-empty pool.
    ///
    /// Pure delegation to the picker port; no other entropy source
    /// exists in the service.
    pub fn random_position<T>(&self, pool: &[T]) -> usize {
        self.picker.pick(pool.len())
    }

    /// Chooses a candidate car id from the category's pool.
    ///
    /// Deterministic given a fixed picker result: the returned id is
    /// exactly `car_ids[i]` for whatever `i` the picker produced.
    ///
    /// ## Errors
    /// `CoreError::EmptyCarPool` when the category has no candidates.
    /// The check runs before the picker so no entropy is consumed for
    /// an unpriceable category.
    pub fn choose_random_car<'a>(&self, category: &'a CarCategory) -> CoreResult<&'a str> {
        if category.car_ids.is_empty() {
            return Err(CoreError::EmptyCarPool {
                category: category.name.clone(),
            });
        }

        let position = self.random_position(&category.car_ids);
        Ok(category.car_ids[position].as_str())
    }

    /// Resolves an available car from the category.
    ///
    /// Chooses a candidate id, shape-checks it, then asks the store
    /// for it. Whatever the store returns (car or error) is handed
    /// back unchanged: "available" means "resolvable", not "not
    /// currently rented".
    pub async fn available_car(&self, category: &CarCategory) -> RentalResult<Car> {
        let car_id = self.choose_random_car(category)?;

        // A malformed pool entry never reaches the store
        validation::validate_entity_id(car_id).map_err(CoreError::from)?;

        debug!(category = %category.name, car_id = %car_id, "resolving chosen car");

        let car = self.store.find(car_id).await?;
        Ok(car)
    }

    /// Calculates the final rental price, formatted as Brazilian reais.
    ///
    /// `daily rate x age multiplier x days`, rounded half-up at the
    /// centavo after the multiplier. Pure: identical inputs always
    /// produce the identical formatted string.
    ///
    /// ## Example
    /// age 50 in a 40-50 -> 1.3x bracket, R$ 37,60/day, 5 days:
    /// 37,60 x 1.3 x 5 = "R$ 244,40"
    pub fn final_price(
        &self,
        customer: &Customer,
        category: &CarCategory,
        number_of_days: i64,
    ) -> CoreResult<String> {
        let multiplier = self.tax_table.multiplier_for(customer.age)?;

        let amount = category
            .daily_price()
            .apply_multiplier(multiplier)
            .multiply_days(number_of_days);

        Ok(amount.to_string())
    }

    /// Produces a priced rental transaction.
    ///
    /// ## Steps
    /// 1. Validate the duration (1..=365 days)
    /// 2. Resolve a car from the category pool (one store read)
    /// 3. Price by age bracket and duration
    /// 4. Due date = today + duration, in calendar days
    ///
    /// Side effects: one store read, one clock read. The transaction
    /// is returned, never persisted here.
    pub async fn rent(
        &self,
        customer: &Customer,
        category: &CarCategory,
        number_of_days: i64,
    ) -> RentalResult<Transaction> {
        validation::validate_rental_days(number_of_days).map_err(CoreError::from)?;

        debug!(
            customer = %customer.name,
            category = %category.name,
            days = number_of_days,
            "pricing rental"
        );

        let car = self.available_car(category).await?;
        let amount = self.final_price(customer, category, number_of_days)?;

        // Calendar-day addition: month lengths and year boundaries are
        // respected, unlike adding elapsed seconds
        let due = self
            .clock
            .now()
            .date_naive()
            .checked_add_days(Days::new(number_of_days as u64))
            .ok_or(RentalError::DueDateOutOfRange {
                days: number_of_days,
            })?;
        let due_date = locale::long_date_pt_br(due);

        info!(
            car = %car.id,
            amount = %amount,
            due_date = %due_date,
            "rental priced"
        );

        Ok(Transaction {
            customer: customer.clone(),
            car,
            amount,
            due_date,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{FixedClock, FixedPicker, InMemoryCarStore};
    use crate::ports::StoreError;
    use chrono::{TimeZone, Utc};
    use veloz_core::{TaxBracket, TaxMultiplier, ValidationError};

    fn sample_car() -> Car {
        Car {
            id: "0f25ff9e-6b56-4e9e-9a31-1e0b0b5c9a10".into(),
            name: "Fiat Uno".into(),
            release_year: 2019,
            available: true,
            gas_available: true,
        }
    }

    fn sample_category(car_ids: Vec<String>) -> CarCategory {
        CarCategory {
            id: "cat-hatch".into(),
            name: "Hatch".into(),
            car_ids,
            price_cents: 3760, // R$ 37,60 per day
        }
    }

    fn sample_customer(age: u32) -> Customer {
        Customer {
            id: "cust-1".into(),
            name: "Maria Silva".into(),
            age,
        }
    }

    #[test]
    fn test_random_position_stays_in_bounds() {
        let service = RentalService::new(InMemoryCarStore::new());
        let pool = ["a", "b", "c", "d", "e"];

        for _ in 0..200 {
            let i = service.random_position(&pool);
            assert!(i < pool.len());
        }
    }

    #[test]
    fn test_choose_random_car_returns_picked_position() {
        let picker = FixedPicker::at(0);
        let service = RentalService::new(InMemoryCarStore::new()).with_picker(picker.clone());

        let category = sample_category(vec!["car-a".into(), "car-b".into(), "car-c".into()]);
        let chosen = service.choose_random_car(&category).unwrap();

        assert_eq!(chosen, "car-a");
        assert_eq!(picker.call_count(), 1);

        let picker = FixedPicker::at(2);
        let service = RentalService::new(InMemoryCarStore::new()).with_picker(picker);
        assert_eq!(service.choose_random_car(&category).unwrap(), "car-c");
    }

    #[test]
    fn test_choose_random_car_rejects_empty_pool() {
        let picker = FixedPicker::at(0);
        let service = RentalService::new(InMemoryCarStore::new()).with_picker(picker.clone());

        let category = sample_category(vec![]);
        let err = service.choose_random_car(&category).unwrap_err();

        assert!(matches!(err, CoreError::EmptyCarPool { .. }));
        // No entropy consumed for an unpriceable category
        assert_eq!(picker.call_count(), 0);
    }

    #[tokio::test]
    async fn test_available_car_resolves_exactly_the_chosen_id() {
        let car = sample_car();
        let store = InMemoryCarStore::new().with_car(car.clone());
        let service = RentalService::new(store.clone()).with_picker(FixedPicker::at(0));

        let category = sample_category(vec![car.id.clone()]);
        let result = service.available_car(&category).await.unwrap();

        assert_eq!(result, car);
        assert_eq!(store.find_calls(), vec![car.id]);
    }

    #[tokio::test]
    async fn test_available_car_rejects_malformed_pool_entry() {
        let store = InMemoryCarStore::new();
        let service = RentalService::new(store.clone()).with_picker(FixedPicker::at(0));

        let category = sample_category(vec!["id with spaces".into()]);
        let err = service.available_car(&category).await.unwrap_err();

        assert!(matches!(
            err,
            RentalError::Core(CoreError::Validation(ValidationError::InvalidFormat { .. }))
        ));
        // The store is never consulted for an id that fails the shape check
        assert!(store.find_calls().is_empty());
    }

    #[tokio::test]
    async fn test_available_car_propagates_not_found() {
        let service = RentalService::new(InMemoryCarStore::new()).with_picker(FixedPicker::at(0));

        let category = sample_category(vec!["ghost-car".into()]);
        let err = service.available_car(&category).await.unwrap_err();

        assert!(matches!(
            err,
            RentalError::Store(StoreError::NotFound { ref id }) if id == "ghost-car"
        ));
    }

    #[test]
    fn test_final_price_with_injected_bracket_table() {
        // age 50, R$ 37,60/day, bracket 40-50 -> 1.3x, 5 days:
        // 37,60 x 1.3 x 5 = 244,40
        let table = TaxTable::new(vec![TaxBracket::new(
            40,
            50,
            TaxMultiplier::from_per_mille(1300),
        )]);
        let service = RentalService::new(InMemoryCarStore::new()).with_tax_table(table);

        let price = service
            .final_price(&sample_customer(50), &sample_category(vec![]), 5)
            .unwrap();

        assert_eq!(price, "R$ 244,40");
    }

    #[test]
    fn test_final_price_is_idempotent() {
        let service = RentalService::new(InMemoryCarStore::new());
        let customer = sample_customer(20);
        let category = sample_category(vec![]);

        let first = service.final_price(&customer, &category, 5).unwrap();
        let second = service.final_price(&customer, &category, 5).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, "R$ 206,80");
    }

    #[test]
    fn test_final_price_bracket_boundaries() {
        let service = RentalService::new(InMemoryCarStore::new());
        let category = sample_category(vec![]);

        // 25 is the `to` edge of the 1.1x bracket, 26 the `from` edge of 1.5x
        let at_25 = service.final_price(&sample_customer(25), &category, 1).unwrap();
        let at_26 = service.final_price(&sample_customer(26), &category, 1).unwrap();

        assert_eq!(at_25, "R$ 41,36"); // 37,60 x 1.1
        assert_eq!(at_26, "R$ 56,40"); // 37,60 x 1.5
    }

    #[test]
    fn test_final_price_unpriceable_age() {
        let service = RentalService::new(InMemoryCarStore::new());
        let err = service
            .final_price(&sample_customer(17), &sample_category(vec![]), 5)
            .unwrap_err();

        assert!(matches!(err, CoreError::NoMatchingTaxBracket { age: 17 }));
    }

    #[tokio::test]
    async fn test_rent_produces_full_transaction() {
        // age 20 -> 1.1x, R$ 37,60/day, 5 days, clock at 2021-03-09:
        // amount 37,60 x 1.1 x 5 = R$ 206,80, due 2021-03-14
        let car = sample_car();
        let customer = sample_customer(20);
        let category = sample_category(vec![car.id.clone()]);

        let clock = FixedClock::at(Utc.with_ymd_and_hms(2021, 3, 9, 0, 0, 0).unwrap());
        let service = RentalService::new(InMemoryCarStore::new().with_car(car.clone()))
            .with_clock(clock)
            .with_picker(FixedPicker::at(0));

        let result = service.rent(&customer, &category, 5).await.unwrap();

        let expected = Transaction {
            customer,
            car,
            amount: "R$ 206,80".to_string(),
            due_date: "14 de março de 2021".to_string(),
        };
        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn test_rent_due_date_crosses_month_boundary() {
        let car = sample_car();
        let category = sample_category(vec![car.id.clone()]);

        let clock = FixedClock::at(Utc.with_ymd_and_hms(2021, 1, 30, 0, 0, 0).unwrap());
        let service = RentalService::new(InMemoryCarStore::new().with_car(car))
            .with_clock(clock)
            .with_picker(FixedPicker::at(0));

        let result = service.rent(&sample_customer(20), &category, 5).await.unwrap();

        assert_eq!(result.due_date, "4 de fevereiro de 2021");
    }

    #[tokio::test]
    async fn test_rent_rejects_non_positive_duration() {
        let service = RentalService::new(InMemoryCarStore::new());
        let category = sample_category(vec!["car-a".into()]);

        let err = service.rent(&sample_customer(20), &category, 0).await.unwrap_err();

        assert!(matches!(
            err,
            RentalError::Core(CoreError::Validation(ValidationError::MustBePositive { .. }))
        ));
    }

    #[test]
    fn test_tax_table_accessor_reflects_override() {
        let table = TaxTable::new(vec![TaxBracket::new(
            18,
            99,
            TaxMultiplier::identity(),
        )]);
        let service =
            RentalService::new(InMemoryCarStore::new()).with_tax_table(table.clone());

        assert_eq!(service.tax_table(), &table);
    }
}
