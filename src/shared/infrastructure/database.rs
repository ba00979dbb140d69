use crate::log_info;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool};
use diesel::result::QueryResult;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tokio::task;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const DEFAULT_POOL_SIZE: u32 = 8;
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Connection settings for the catalog store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_pool_size: u32,
    pub busy_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_pool_size: DEFAULT_POOL_SIZE,
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        }
    }

    pub fn with_pool_size(mut self, max_pool_size: u32) -> Self {
        self.max_pool_size = max_pool_size;
        self
    }

    /// Reads `DATABASE_URL`, `DATABASE_POOL_SIZE` and `DATABASE_BUSY_TIMEOUT_MS`,
    /// loading a `.env` file first if one is present.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let url = env::var("DATABASE_URL").map_err(|_| {
            AppError::InvalidInput("DATABASE_URL environment variable not found".to_string())
        })?;

        let mut config = Self::new(url);
        if let Ok(size) = env::var("DATABASE_POOL_SIZE") {
            config.max_pool_size = size.trim().parse()?;
        }
        if let Ok(timeout) = env::var("DATABASE_BUSY_TIMEOUT_MS") {
            config.busy_timeout = Duration::from_millis(timeout.trim().parse()?);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(AppError::InvalidInput("Database URL is empty".to_string()));
        }

        if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
        {
            return Err(AppError::InvalidInput(
                "Invalid database URL. Expected a SQLite path or file: URI".to_string(),
            ));
        }

        if self.max_pool_size == 0 {
            return Err(AppError::InvalidInput(
                "Database pool size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Per-connection pragmas. Foreign keys are off by default in SQLite, and the
/// cascade rules on junction rows depend on them.
#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA foreign_keys = ON; PRAGMA journal_mode = WAL;",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new() -> AppResult<Self> {
        Self::with_config(DatabaseConfig::from_env()?)
    }

    pub fn with_config(config: DatabaseConfig) -> AppResult<Self> {
        config.validate()?;

        let manager = ConnectionManager::<SqliteConnection>::new(config.url.clone());
        let pool = r2d2::Pool::builder()
            .max_size(config.max_pool_size)
            .connection_timeout(Duration::from_secs(10))
            .test_on_check_out(true)
            .connection_customizer(Box::new(ConnectionOptions {
                busy_timeout: config.busy_timeout,
            }))
            .build(manager)
            .map_err(|e| {
                AppError::StorageFailure(format!("Failed to create connection pool: {}", e))
            })?;

        log_info!(
            "Database connection pool initialized for {} with max_size: {}",
            config.url,
            pool.max_size()
        );

        Ok(Self { pool })
    }

    /// Create a Database instance from an existing pool (useful for testing)
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Apply every embedded migration that has not run yet.
    pub fn run_migrations(&self) -> AppResult<usize> {
        let timer = TimedOperation::new("run_migrations");
        let mut conn = self.get_connection()?;
        let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            AppError::StorageFailure(format!("Failed to run database migrations: {}", e))
        })?;

        timer.finish_with_info(&format!("{} applied", applied.len()));
        log_info!("Database migrations completed");
        Ok(applied.len())
    }

    pub fn get_connection(&self) -> AppResult<DbConnection> {
        let start = std::time::Instant::now();

        match self.pool.get() {
            Ok(conn) => {
                let duration = start.elapsed().as_millis() as u64;
                if duration > 100 {
                    LogContext::performance_metric("db_connection_acquire", duration, Some("slow"));
                }
                Ok(conn)
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    "Failed to acquire database connection from pool",
                );
                Err(AppError::from(e))
            }
        }
    }

    /// Run a read-only query on a pooled connection off the async runtime.
    pub async fn read<T, F>(self: &Arc<Self>, op: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
    {
        let db = Arc::clone(self);

        task::spawn_blocking(move || -> AppResult<T> {
            let mut conn = db.get_connection()?;
            Ok(op(&mut *conn)?)
        })
        .await?
    }

    /// Get pool statistics for monitoring
    pub fn pool_status(&self) -> PoolStatus {
        let state = self.pool.state();
        PoolStatus {
            connections: state.connections,
            idle_connections: state.idle_connections,
            max_size: self.pool.max_size(),
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[derive(Debug)]
pub struct PoolStatus {
    pub connections: u32,
    pub idle_connections: u32,
    pub max_size: u32,
}
