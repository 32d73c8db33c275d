//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use std::sync::Arc;

use super::executor::{QueryExecutor, QueryParam};
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const FIND_BY_KEY: &str = r#"
    SELECT id, domain, "key", url, project_id, expires_at, created_at
    FROM links
    WHERE domain = $1 AND "key" = $2
"#;

const KEY_EXISTS: &str = r#"
    SELECT 1
    FROM links
    WHERE domain = $1 AND "key" = $2
    LIMIT 1
"#;

/// PostgreSQL repository for link lookups and key existence probes.
pub struct PgLinkRepository {
    executor: Arc<QueryExecutor>,
}

impl PgLinkRepository {
    /// Creates a new repository over a shared executor.
    pub fn new(executor: Arc<QueryExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_key(&self, domain: &str, key: &str) -> Result<Option<Link>, AppError> {
        let rows = self
            .executor
            .execute::<Link>(FIND_BY_KEY, &[QueryParam::text(domain), QueryParam::text(key)])
            .await?;

        Ok(rows.and_then(|rows| rows.into_iter().next()))
    }

    async fn exists(&self, domain: &str, key: &str) -> Result<bool, AppError> {
        let found = self
            .executor
            .probe(KEY_EXISTS, &[QueryParam::text(domain), QueryParam::text(key)])
            .await?;

        Ok(found.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::StorePool;
    use std::time::Duration;

    fn repo() -> PgLinkRepository {
        let executor = QueryExecutor::new(StorePool::unconfigured(), Duration::from_secs(1));
        PgLinkRepository::new(Arc::new(executor))
    }

    #[tokio::test]
    async fn test_unconfigured_store_finds_nothing() {
        let link = repo().find_by_key("example.com", "promo").await.unwrap();
        assert!(link.is_none());
    }

    #[tokio::test]
    async fn test_unconfigured_store_reports_absent() {
        let exists = repo().exists("example.com", "promo").await.unwrap();
        assert!(!exists);
    }
}
