//! # CarStore Port Implementation
//!
//! Adapts [`CarRepository`] to the `CarStore` port consumed by the
//! pricing service, translating `DbError` into the port-level
//! `StoreError` so the service never sees SQL details.

use async_trait::async_trait;

use crate::error::DbError;
use crate::repository::car::CarRepository;
use veloz_core::Car;
use veloz_rental::ports::{CarStore, StoreError};

/// Port-level error translation.
///
/// A missing row stays a not-found condition; everything else
/// (connection loss, corrupt rows, pool exhaustion) collapses into an
/// opaque backend failure, which the service propagates unchanged.
impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { id, .. } => StoreError::NotFound { id },
            other => StoreError::Backend(other.to_string()),
        }
    }
}

#[async_trait]
impl CarStore for CarRepository {
    async fn find(&self, id: &str) -> Result<Car, StoreError> {
        CarRepository::find(self, id).await.map_err(StoreError::from)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use veloz_core::{CarCategory, Customer};
    use veloz_rental::RentalService;

    fn sample_car(id: &str) -> Car {
        Car {
            id: id.to_string(),
            name: "Chevrolet Onix".to_string(),
            release_year: 2021,
            available: true,
            gas_available: true,
        }
    }

    #[tokio::test]
    async fn test_port_resolves_persisted_car() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.cars();
        repo.insert(&sample_car("car-1")).await.unwrap();

        // Through the port, not the inherent method
        let store: &dyn CarStore = &repo;
        let car = store.find("car-1").await.unwrap();
        assert_eq!(car.name, "Chevrolet Onix");
    }

    #[tokio::test]
    async fn test_port_maps_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let store: &dyn CarStore = &db.cars();
        let err = store.find("ghost").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { ref id } if id == "ghost"));
    }

    /// Full-stack rental: SQLite-backed store under the real service.
    #[tokio::test]
    async fn test_rent_against_sqlite_store() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let car = sample_car("car-1");
        db.cars().insert(&car).await.unwrap();

        let category = CarCategory {
            id: "cat-1".to_string(),
            name: "Hatch".to_string(),
            car_ids: vec![car.id.clone()],
            price_cents: 3760,
        };
        db.categories().insert(&category).await.unwrap();

        let customer = Customer {
            id: "cust-1".to_string(),
            name: "Maria Silva".to_string(),
            age: 20,
        };

        let service = RentalService::new(db.cars());
        let category = db.categories().find("cat-1").await.unwrap();
        let tx = service.rent(&customer, &category, 5).await.unwrap();

        assert_eq!(tx.car, car);
        assert_eq!(tx.amount, "R$ 206,80");
    }
}
