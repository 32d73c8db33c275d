//! PostgreSQL implementation of project repository.

use async_trait::async_trait;
use std::sync::Arc;

use super::executor::{QueryExecutor, QueryParam};
use crate::domain::entities::Project;
use crate::domain::repositories::ProjectRepository;
use crate::error::AppError;

const FIND_BY_ID: &str = r#"
    SELECT id, name, slug, created_at
    FROM projects
    WHERE id = $1
"#;

/// PostgreSQL repository for project lookups.
pub struct PgProjectRepository {
    executor: Arc<QueryExecutor>,
}

impl PgProjectRepository {
    /// Creates a new repository over a shared executor.
    pub fn new(executor: Arc<QueryExecutor>) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, AppError> {
        let rows = self
            .executor
            .execute::<Project>(FIND_BY_ID, &[QueryParam::text(id)])
            .await?;

        Ok(rows.and_then(|rows| rows.into_iter().next()))
    }
}
