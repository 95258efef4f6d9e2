//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the table and reservation repository ports
//! backed by PostgreSQL via `diesel-async` with `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and schema definitions
//!   (`schema.rs`) never leave this module.
//! - **Store-enforced overlap rule**: the migration installs an exclusion
//!   constraint; the reservation adapter maps its violations to
//!   `SlotTaken`.
//!
//! # Example
//!
//! ```ignore
//! use booking::outbound::persistence::{DbPool, DieselTableRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/booking")).await?;
//! let tables = DieselTableRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_reservation_repository;
mod diesel_table_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_reservation_repository::DieselReservationRepository;
pub use diesel_table_repository::DieselTableRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
