//! # Car Repository
//!
//! Database operations for cars.
//!
//! The pricing service only needs `find`; `insert`, `list` and `count`
//! exist for fleet management and seeding.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use veloz_core::Car;

/// Raw row shape for the `cars` table.
///
/// Rows carry audit timestamps the domain type deliberately omits;
/// the conversion drops them.
#[derive(Debug, sqlx::FromRow)]
struct CarRow {
    id: String,
    name: String,
    release_year: i64,
    available: bool,
    gas_available: bool,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
    #[allow(dead_code)]
    updated_at: DateTime<Utc>,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Car {
            id: row.id,
            name: row.name,
            release_year: row.release_year as i32,
            available: row.available,
            gas_available: row.gas_available,
        }
    }
}

/// Repository for car database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.cars();
/// let car = repo.find("some-uuid").await?;
/// ```
#[derive(Debug, Clone)]
pub struct CarRepository {
    pool: SqlitePool,
}

impl CarRepository {
    /// Creates a new CarRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CarRepository { pool }
    }

    /// Gets a car by its ID.
    ///
    /// ## Returns
    /// * `Ok(Car)` - car found
    /// * `Err(DbError::NotFound)` - no row for the id
    pub async fn find(&self, id: &str) -> DbResult<Car> {
        debug!(id = %id, "Looking up car");

        let row = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT id, name, release_year, available, gas_available,
                   created_at, updated_at
            FROM cars
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Car::from).ok_or_else(|| DbError::not_found("Car", id))
    }

    /// Inserts a new car.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - id already exists
    pub async fn insert(&self, car: &Car) -> DbResult<()> {
        debug!(id = %car.id, name = %car.name, "Inserting car");

        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO cars (id, name, release_year, available, gas_available,
                              created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&car.id)
        .bind(&car.name)
        .bind(car.release_year as i64)
        .bind(car.available)
        .bind(car.gas_available)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Lists cars in the rentable fleet, ordered by name.
    pub async fn list_available(&self, limit: u32) -> DbResult<Vec<Car>> {
        let rows = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT id, name, release_year, available, gas_available,
                   created_at, updated_at
            FROM cars
            WHERE available = 1
            ORDER BY name
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Car::from).collect())
    }

    /// Counts all cars (for diagnostics and seed guards).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cars")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
