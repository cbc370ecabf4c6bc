//! # veloz-db: Database Layer for Veloz
//!
//! This crate provides database access for the Veloz rental system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Veloz Data Flow                                 │
//! │                                                                         │
//! │  RentalService::rent(...)                                              │
//! │       │ CarStore::find(id)                                             │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     veloz-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (car.rs,      │    │  (embedded)  │  │   │
//! │  │   │               │    │  category.rs) │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ CarRepository │    │ 001_init.sql │  │   │
//! │  │   │ Management    │    │ CategoryRepo  │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (WAL mode)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (car, category)
//! - [`store`] - `CarStore` port implementation for the pricing service
//!
//! ## Usage
//!
//! ```rust,ignore
//! use veloz_db::{Database, DbConfig};
//! use veloz_rental::RentalService;
//!
//! let db = Database::new(DbConfig::new("./veloz.db")).await?;
//! let service = RentalService::new(db.cars());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::car::CarRepository;
pub use repository::category::CategoryRepository;
