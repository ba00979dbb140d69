/// Isolated test database utility that creates and cleans up temporary databases
/// Each test gets its own SQLite file inside a temporary directory that is
/// removed when the `TestDb` is dropped.
use creature_catalog::{init_logger, Catalog, Database, DatabaseConfig};
use std::sync::Arc;
use tempfile::TempDir;

/// Isolated, migrated test database
///
/// # Example
/// ```rust
/// #[tokio::test]
/// async fn test_something() {
///     let test_db = TestDb::new();
///     let catalog = test_db.catalog();
///     // Test...
///     // Database file removed when test_db goes out of scope
/// }
/// ```
pub struct TestDb {
    // Held for its Drop; the directory goes away with the test.
    _dir: TempDir,
    db: Arc<Database>,
}

impl TestDb {
    pub fn new() -> Self {
        init_logger();

        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("catalog.db");

        let config = DatabaseConfig::new(path.to_string_lossy().into_owned()).with_pool_size(4);
        let db = Database::with_config(config).expect("Failed to open test database");
        db.run_migrations().expect("Failed to run migrations on test database");

        Self {
            _dir: dir,
            db: Arc::new(db),
        }
    }

    pub fn database(&self) -> Arc<Database> {
        Arc::clone(&self.db)
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::with_database(self.database())
    }
}
