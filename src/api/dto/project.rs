//! DTOs for project lookup.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Project;

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            slug: project.slug,
            created_at: project.created_at,
        }
    }
}
