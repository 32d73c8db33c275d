//! PostgreSQL implementation of domain repository.

use async_trait::async_trait;
use std::sync::Arc;

use super::executor::{QueryExecutor, QueryParam};
use crate::domain::entities::Domain;
use crate::domain::repositories::DomainRepository;
use crate::error::AppError;

const FIND_BY_SLUG: &str = r#"
    SELECT id, slug, target, verified, project_id, created_at
    FROM domains
    WHERE slug = $1
"#;

/// PostgreSQL repository for domain lookups.
///
/// Statements go through [`QueryExecutor`], so parameters are always bound
/// and an unconfigured store reads as "no such domain".
pub struct PgDomainRepository {
    executor: Arc<QueryExecutor>,
}

impl PgDomainRepository {
    /// Creates a new repository over a shared executor.
    pub fn new(executor: Arc<QueryExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl DomainRepository for PgDomainRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Domain>, AppError> {
        let rows = self
            .executor
            .execute::<Domain>(FIND_BY_SLUG, &[QueryParam::text(slug)])
            .await?;

        Ok(rows.and_then(|rows| rows.into_iter().next()))
    }
}
