use log::{debug, error, info, log, warn, Level};
use std::sync::Once;
use std::time::Instant;

static INIT: Once = Once::new();

/// Initialize the logging system.
///
/// Safe to call more than once; tests call it from every case. `RUST_LOG`
/// overrides the defaults below.
pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .filter_module("creature_catalog", log::LevelFilter::Debug)
            .filter_module("diesel", log::LevelFilter::Warn)
            .filter_module("diesel_migrations", log::LevelFilter::Warn)
            .filter_module("r2d2", log::LevelFilter::Warn)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .try_init();

        info!("Logging system initialized");
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Structured logging helpers for the storage layer.
pub struct LogContext;

impl LogContext {
    pub fn unit_of_work_committed(rows: usize, duration_ms: u64) {
        debug!("UoW: committed {} rows in {}ms", rows, duration_ms);
    }

    pub fn unit_of_work_rolled_back(level: Level, staged_rows: usize, duration_ms: u64) {
        log!(
            level,
            "UoW: rolled back after {}ms ({} rows staged)",
            duration_ms,
            staged_rows
        );
    }

    /// A referenced id that did not resolve and was stored as an absent link.
    pub fn absent_reference(referenced: &str, id: i32, referrer: &str) {
        warn!(
            "Link: {} {} not found; {} stored with an absent {}",
            referenced,
            id,
            referrer,
            referenced.to_lowercase()
        );
    }

    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.elapsed_ms();
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
