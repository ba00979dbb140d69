/// Shared infrastructure concerns
///
/// This module contains infrastructure implementations that are shared across
/// multiple bounded contexts (modules).
pub mod database;
pub mod unit_of_work;

// Re-exports for convenience
pub use database::{Database, DatabaseConfig, DbConnection, DbPool, PoolStatus};
pub use unit_of_work::UnitOfWork;
