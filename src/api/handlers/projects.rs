//! Handler for project lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::project::ProjectResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a project by id.
///
/// # Endpoint
///
/// `GET /api/projects/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the project does not exist.
pub async fn project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project = state.project_service.get_project(&id).await?;
    Ok(Json(project.into()))
}
