use thiserror::Error;

/// Postgres SQLSTATE for serialization_failure
const SERIALIZATION_FAILURE: &str = "40001";
/// Postgres SQLSTATE for deadlock_detected
const DEADLOCK_DETECTED: &str = "40P01";

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("row not found")]
    NotFound,

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("concurrency conflict: {0}")]
    ConcurrencyConflict(String),

    #[error("database unreachable: {0}")]
    Connectivity(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl LedgerError {
    /// Whether a caller-level retry of the whole unit of work is
    /// appropriate. This crate never retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LedgerError::ConcurrencyConflict(_) | LedgerError::Connectivity(_)
        )
    }
}

/// SQLSTATE classes reported by concurrent-transaction aborts
fn is_concurrency_code(code: &str) -> bool {
    code == SERIALIZATION_FAILURE || code == DEADLOCK_DETECTED
}

/// SQLSTATE class 23: integrity constraint violations (FK, unique, check)
fn is_constraint_code(code: &str) -> bool {
    code.starts_with("23")
}

impl From<sqlx::Error> for LedgerError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => LedgerError::NotFound,
            sqlx::Error::Database(db) => match db.code().as_deref() {
                Some(code) if is_concurrency_code(code) => {
                    LedgerError::ConcurrencyConflict(db.message().to_string())
                }
                Some(code) if is_constraint_code(code) => {
                    LedgerError::ConstraintViolation(db.message().to_string())
                }
                _ => LedgerError::Database(sqlx::Error::Database(db)),
            },
            err @ (sqlx::Error::Io(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed) => LedgerError::Connectivity(err),
            other => LedgerError::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = LedgerError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, LedgerError::NotFound));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_pool_timeout_maps_to_connectivity() {
        let err = LedgerError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, LedgerError::Connectivity(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_sqlstate_classification() {
        assert!(is_concurrency_code("40001"));
        assert!(is_concurrency_code("40P01"));
        assert!(!is_concurrency_code("23505"));

        assert!(is_constraint_code("23503")); // foreign_key_violation
        assert!(is_constraint_code("23505")); // unique_violation
        assert!(!is_constraint_code("40001"));
    }

    #[test]
    fn test_concurrency_conflict_is_retryable() {
        let err = LedgerError::ConcurrencyConflict("deadlock detected".to_string());
        assert!(err.is_retryable());

        let err = LedgerError::ConstraintViolation("duplicate key".to_string());
        assert!(!err.is_retryable());
    }
}
