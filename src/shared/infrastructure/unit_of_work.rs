use std::sync::Arc;
use std::time::Instant;

use diesel::connection::{AnsiTransactionManager, TransactionManager};
use diesel::result::QueryResult;
use diesel::sqlite::SqliteConnection;
use log::Level;
use tokio::task;

use super::database::{Database, DbConnection};
use crate::log_error;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;

type Tm = AnsiTransactionManager;

/// A single transactional write against the store.
///
/// The unit of work owns one pooled connection with an open transaction for
/// its whole lifetime. Writes go through [`UnitOfWork::insert`] and
/// [`UnitOfWork::execute`] so the affected-row count is tracked, and
/// [`UnitOfWork::commit`] treats a zero count as a failed write. A unit of
/// work dropped without committing is rolled back.
///
/// The transaction is opened with `BEGIN IMMEDIATE`: the write lock is taken
/// up front, so concurrent units of work queue on the connection's
/// `busy_timeout` instead of failing when a read snapshot tries to upgrade.
pub struct UnitOfWork {
    conn: DbConnection,
    affected: usize,
    open: bool,
    started: Instant,
}

impl UnitOfWork {
    pub fn begin(db: &Database) -> AppResult<Self> {
        let mut conn = db.get_connection()?;
        Tm::begin_transaction_sql(&mut *conn, "BEGIN IMMEDIATE").map_err(|e| {
            AppError::StorageFailure(format!("Failed to open unit of work: {}", e))
        })?;

        Ok(Self {
            conn,
            affected: 0,
            open: true,
            started: Instant::now(),
        })
    }

    /// Runs `work` on the blocking pool inside a fresh unit of work and commits it.
    pub async fn run<T, F>(db: &Arc<Database>, work: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut UnitOfWork) -> AppResult<T> + Send + 'static,
    {
        let db = Arc::clone(db);

        task::spawn_blocking(move || -> AppResult<T> {
            let mut uow = UnitOfWork::begin(&db)?;
            match work(&mut uow) {
                Ok(value) => {
                    uow.commit()?;
                    Ok(value)
                }
                Err(e) => {
                    uow.rollback(Self::rollback_level(Some(&e)));
                    Err(e)
                }
            }
        })
        .await?
    }

    /// Read inside the transaction; does not count toward affected rows.
    pub fn read<T, F>(&mut self, op: F) -> AppResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T>,
    {
        op(&mut *self.conn).map_err(AppError::from)
    }

    /// Insert a single row and hand back what the store returned for it.
    pub fn insert<T, F>(&mut self, op: F) -> AppResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T>,
    {
        let row = op(&mut *self.conn)?;
        self.affected += 1;
        Ok(row)
    }

    /// Statement whose result is an affected-row count (insert, update, delete).
    pub fn execute<F>(&mut self, op: F) -> AppResult<usize>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<usize>,
    {
        let rows = op(&mut *self.conn)?;
        self.affected += rows;
        Ok(rows)
    }

    pub fn affected_rows(&self) -> usize {
        self.affected
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    pub fn commit(mut self) -> AppResult<usize> {
        if self.affected == 0 {
            return Err(AppError::StorageFailure(
                "Write affected no rows".to_string(),
            ));
        }

        <Tm as TransactionManager<SqliteConnection>>::commit_transaction(&mut *self.conn)
            .map_err(|e| AppError::StorageFailure(format!("Failed to commit: {}", e)))?;
        self.open = false;

        LogContext::unit_of_work_committed(self.affected, self.elapsed_ms());
        Ok(self.affected)
    }

    /// Conflict and NotFound are ordinary answers to the caller, so discarding
    /// the work they abort is not worth a warning.
    fn rollback_level(cause: Option<&AppError>) -> Level {
        match cause {
            Some(e) if e.is_conflict() || e.is_not_found() => Level::Debug,
            _ => Level::Warn,
        }
    }

    fn rollback(&mut self, level: Level) {
        if !self.open {
            return;
        }
        self.open = false;

        LogContext::unit_of_work_rolled_back(level, self.affected, self.elapsed_ms());
        if let Err(e) =
            <Tm as TransactionManager<SqliteConnection>>::rollback_transaction(&mut *self.conn)
        {
            log_error!("Failed to roll back unit of work: {}", e);
        }
    }
}

impl Drop for UnitOfWork {
    fn drop(&mut self) {
        self.rollback(Self::rollback_level(None));
    }
}
