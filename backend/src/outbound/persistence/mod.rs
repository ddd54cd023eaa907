//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of domain repository ports
//! backed by SQLite via the Diesel ORM over a single shared connection.
//!
//! # Architecture
//!
//! The persistence layer follows these principles:
//!
//! - **Thin adapters**: Repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are internal implementation details, never
//!   exposed to the domain layer.
//! - **Injected handle**: The mutex-guarded connection is owned by
//!   [`Storage`] and passed into each adapter, so tests substitute an
//!   in-memory store.
//! - **Strongly typed errors**: All database errors are mapped to domain
//!   persistence error types.
//!
//! # Example
//!
//! ```
//! use taxo_backend::outbound::persistence::{DieselAccountRepository, Storage};
//!
//! let storage = Storage::in_memory().expect("in-memory store");
//! let accounts = DieselAccountRepository::new(storage);
//! ```

mod diesel_account_repository;
mod diesel_payment_log;
mod diesel_property_repository;
mod models;
mod schema;
mod storage;

pub use diesel_account_repository::DieselAccountRepository;
pub use diesel_payment_log::DieselPaymentLog;
pub use diesel_property_repository::DieselPropertyRepository;
pub use storage::{MIGRATIONS, Storage, StorageError};
