//! Repository trait for project lookups.

use crate::domain::entities::Project;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to projects.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProjectRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Finds a project by its primary id.
    ///
    /// Returns `Ok(None)` when no such project exists or no store is configured.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Unavailable`] on store failures.
    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, AppError>;
}
