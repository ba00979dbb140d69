// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (database, unit of work)
pub mod utils; // Shared utilities

// Re-exports for convenience
pub use infrastructure::database::{Database, DatabaseConfig};
pub use infrastructure::unit_of_work::UnitOfWork;
