//! # Category Repository
//!
//! Database operations for car categories.
//!
//! ## The car_ids Column
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A category's candidate pool is stored inline as JSON:                  │
//! │                                                                         │
//! │  name  | car_ids                                  | price_cents         │
//! │  ──────┼──────────────────────────────────────────┼────────────         │
//! │  Hatch | ["0f25ff9e-...","7b1a44c2-..."]          | 3760                │
//! │                                                                         │
//! │  The pool is read whole on every lookup (selection needs all            │
//! │  candidates anyway), so a join table buys nothing here.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use veloz_core::CarCategory;

/// Raw row shape for the `car_categories` table.
#[derive(Debug, sqlx::FromRow)]
struct CategoryRow {
    id: String,
    name: String,
    car_ids: String,
    price_cents: i64,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
    #[allow(dead_code)]
    updated_at: DateTime<Utc>,
}

impl CategoryRow {
    /// Decodes the JSON pool column into the domain type.
    fn into_category(self) -> DbResult<CarCategory> {
        let car_ids: Vec<String> = serde_json::from_str(&self.car_ids)
            .map_err(|e| DbError::Corrupt(format!("car_ids for category {}: {}", self.id, e)))?;

        Ok(CarCategory {
            id: self.id,
            name: self.name,
            car_ids,
            price_cents: self.price_cents,
        })
    }
}

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Gets a category by its ID.
    ///
    /// ## Returns
    /// * `Ok(CarCategory)` - category found
    /// * `Err(DbError::NotFound)` - no row for the id
    pub async fn find(&self, id: &str) -> DbResult<CarCategory> {
        debug!(id = %id, "Looking up category");

        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, car_ids, price_cents, created_at, updated_at
            FROM car_categories
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row.into_category(),
            None => Err(DbError::not_found("Category", id)),
        }
    }

    /// Inserts a new category.
    pub async fn insert(&self, category: &CarCategory) -> DbResult<()> {
        debug!(id = %category.id, name = %category.name, "Inserting category");

        let car_ids = serde_json::to_string(&category.car_ids)
            .map_err(|e| DbError::Internal(e.to_string()))?;
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO car_categories (id, name, car_ids, price_cents,
                                        created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(car_ids)
        .bind(category.price_cents)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Lists all categories, ordered by name.
    pub async fn list(&self) -> DbResult<Vec<CarCategory>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, car_ids, price_cents, created_at, updated_at
            FROM car_categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CategoryRow::into_category).collect()
    }

    /// Counts all categories (for diagnostics and seed guards).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM car_categories")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
