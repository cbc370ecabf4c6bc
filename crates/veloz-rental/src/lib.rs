//! # veloz-rental: Rental Pricing Service
//!
//! This crate turns a customer, a car category, and a duration into a
//! priced [`veloz_core::Transaction`].
//!
//! ## Rental Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         rent(customer, category, days)                  │
//! │                                                                         │
//! │  validate days                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  choose_random_car(category) ──► IndexPicker picks i ──► car_ids[i]    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CarStore::find(id) ──────────► Car (or StoreError::NotFound)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  TaxTable::multiplier_for(age) ──► price x multiplier x days           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Clock::now() + days ──► due date ("14 de março de 2021")              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Transaction { customer, car, amount, due_date }                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`service`] - `RentalService`, the single business component
//! - [`ports`] - collaborator interfaces (`CarStore`, `Clock`, `IndexPicker`)
//! - [`clock`] - `SystemClock` production adapter
//! - [`random`] - `ThreadRngPicker` production adapter
//! - [`error`] - `RentalError`
//! - `mocks` - deterministic adapters (tests / `test-helpers` feature)

// =============================================================================
// Module Declarations
// =============================================================================

pub mod clock;
pub mod error;
pub mod ports;
pub mod random;
pub mod service;

#[cfg(any(test, feature = "test-helpers"))]
pub mod mocks;

// =============================================================================
// Re-exports
// =============================================================================

pub use clock::SystemClock;
pub use error::RentalError;
pub use ports::{CarStore, Clock, IndexPicker, StoreError};
pub use random::ThreadRngPicker;
pub use service::RentalService;
