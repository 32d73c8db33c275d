//! Store error types.

use thiserror::Error;

/// Failures raised while talking to the relational store.
///
/// Absence of data is never an error here: an unconfigured store or an empty
/// result set is reported as `Ok(None)` by the executor.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("timed out waiting for a pooled connection or a query round trip")]
    Timeout,

    #[error("connection pool is closed")]
    PoolClosed,

    #[error("query execution failed: {0}")]
    Execution(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => Self::Timeout,
            sqlx::Error::PoolClosed => Self::PoolClosed,
            other => Self::Execution(other),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
