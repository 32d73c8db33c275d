//! Project lookup service.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::Project;
use crate::domain::repositories::ProjectRepository;
use crate::error::AppError;

/// Looks up projects for API callers.
pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// Retrieves a project by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the project does not exist.
    pub async fn get_project(&self, id: &str) -> Result<Project, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found", json!({ "id": id })))
    }
}
