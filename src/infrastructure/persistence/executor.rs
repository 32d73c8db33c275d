//! Parameterized statement execution over the store pool.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{FromRow, Postgres};
use std::future::Future;
use std::time::Duration;

use super::error::{StoreError, StoreResult};
use super::pool::{StoreCapability, StorePool};

/// A positional statement parameter.
///
/// Only typed primitives are accepted; values are always bound, never
/// spliced into the statement text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParam {
    Text(String),
    Int(i64),
}

impl QueryParam {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl From<&str> for QueryParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for QueryParam {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Issues statements through a [`StorePool`].
///
/// When the pool is unconfigured every call returns `Ok(None)` immediately;
/// the caller decides whether that is an error.
pub struct QueryExecutor {
    pool: StorePool,
    query_timeout: Duration,
}

impl QueryExecutor {
    /// Creates an executor. `query_timeout` bounds connection acquisition
    /// plus the statement round trip.
    pub fn new(pool: StorePool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    pub fn capability(&self) -> StoreCapability {
        self.pool.capability()
    }

    /// Runs `query` and decodes every returned row into `T`.
    ///
    /// Statements that return no rows (mutations without `RETURNING`) yield
    /// an empty vector, so the result shape is the same for all statements.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Timeout`] if the deadline or pool acquire timeout expires
    /// - [`StoreError::PoolClosed`] after shutdown
    /// - [`StoreError::Execution`] for transport, syntax, or decode failures
    pub async fn execute<T>(&self, query: &str, params: &[QueryParam]) -> StoreResult<Option<Vec<T>>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let Some(pool) = self.pool.pg() else {
            return Ok(None);
        };

        let statement = bind_all(sqlx::query_as::<Postgres, T>(query), params);
        let rows = self.with_deadline(statement.fetch_all(pool)).await?;

        Ok(Some(rows))
    }

    /// Reports whether `query` returns at least one row.
    ///
    /// The row is never decoded, so any column shape works. Fetches a single
    /// row at most; callers should still add `LIMIT 1` so the store can stop
    /// early.
    ///
    /// # Errors
    ///
    /// Same as [`Self::execute`].
    pub async fn probe(&self, query: &str, params: &[QueryParam]) -> StoreResult<Option<bool>> {
        let Some(pool) = self.pool.pg() else {
            return Ok(None);
        };

        let statement = bind_params(sqlx::query::<Postgres>(query), params);
        let row = self.with_deadline(statement.fetch_optional(pool)).await?;

        Ok(Some(row.is_some()))
    }

    async fn with_deadline<F, O>(&self, fut: F) -> StoreResult<O>
    where
        F: Future<Output = Result<O, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, fut).await {
            Ok(result) => result.map_err(StoreError::from),
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.query_timeout.as_millis() as u64,
                    "Store round trip exceeded deadline"
                );
                Err(StoreError::Timeout)
            }
        }
    }
}

fn bind_all<'q, T>(
    mut statement: QueryAs<'q, Postgres, T, PgArguments>,
    params: &'q [QueryParam],
) -> QueryAs<'q, Postgres, T, PgArguments> {
    for param in params {
        statement = match param {
            QueryParam::Text(value) => statement.bind(value.as_str()),
            QueryParam::Int(value) => statement.bind(*value),
        };
    }
    statement
}

fn bind_params<'q>(
    mut statement: Query<'q, Postgres, PgArguments>,
    params: &'q [QueryParam],
) -> Query<'q, Postgres, PgArguments> {
    for param in params {
        statement = match param {
            QueryParam::Text(value) => statement.bind(value.as_str()),
            QueryParam::Int(value) => statement.bind(*value),
        };
    }
    statement
}
