use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage failure: {0}")]
    StorageFailure(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => {
                AppError::NotFound("Record not found in database".to_string())
            }
            _ => AppError::StorageFailure(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::StorageFailure(format!("Database pool error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::StorageFailure(format!("Storage task did not complete: {}", err))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::InvalidInput(format!("Invalid number: {}", err))
    }
}

impl AppError {
    /// Status the controller layer answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::NotFound(_) => 404,
            AppError::Conflict(_) => 422,
            AppError::StorageFailure(_) => 500,
            AppError::InvalidInput(_) => 400,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, AppError::Conflict(_))
    }

    pub fn is_storage_failure(&self) -> bool {
        matches!(self, AppError::StorageFailure(_))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diesel_not_found_maps_to_not_found() {
        let err: AppError = diesel::result::Error::NotFound.into();
        assert!(err.is_not_found());
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_other_diesel_errors_map_to_storage_failure() {
        let err: AppError = diesel::result::Error::RollbackTransaction.into();
        assert!(err.is_storage_failure());
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_conflict_is_unprocessable() {
        let err = AppError::Conflict("Creature already exists".into());
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.to_string(), "Conflict: Creature already exists");
    }

    #[test]
    fn test_serializes_with_tag() {
        let err = AppError::InvalidInput("bad id".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "InvalidInput");
        assert_eq!(json["message"], "bad id");
    }
}
