pub mod logger;
pub mod natural_key;

pub use logger::{init_logger, LogContext, TimedOperation};
pub use natural_key::{normalize, NaturalKey};
