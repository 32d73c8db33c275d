//! API route configuration.

use crate::api::handlers::{link_info_handler, project_handler, random_key_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET /links/info`     - What a domain and key resolve to
/// - `GET /links/random`   - Allocate an unused key
/// - `GET /projects/{id}`  - Project lookup
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links/info", get(link_info_handler))
        .route("/links/random", get(random_key_handler))
        .route("/projects/{id}", get(project_handler))
}
