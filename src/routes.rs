//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`        - Root redirect for the `Host` domain
//! - `GET  /health`  - Store health probe
//! - `/api/*`        - JSON API
//! - `GET  /{*key}`  - Keyed redirect (catch-all, matched last)
//!
//! Static routes take priority over the catch-all, so a link whose key is
//! literally `health` is shadowed by the probe.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, root_redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .route("/{*key}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}
