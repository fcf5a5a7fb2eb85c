//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs and table definitions stay private to this module, and
//! every database failure is mapped onto the owning port's error type.
//!
//! # Example
//!
//! ```no_run
//! use exercise_tracker::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! # async fn example() -> Result<(), exercise_tracker::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/tracker")).await?;
//! let repo = DieselUserRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_exercise_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_exercise_repository::DieselExerciseRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{SchemaMigrationError, apply_migrations, migrate_blocking};
pub use pool::{DbPool, PoolConfig, PoolError};
