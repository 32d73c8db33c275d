//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{KeyAllocator, ProjectService, RedirectService};
use crate::infrastructure::persistence::QueryExecutor;

/// Services and store handle shared across requests.
///
/// Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService>,
    pub key_allocator: Arc<KeyAllocator>,
    pub project_service: Arc<ProjectService>,
    /// Used directly by the health probe.
    pub store: Arc<QueryExecutor>,
}

impl AppState {
    pub fn new(
        redirect_service: Arc<RedirectService>,
        key_allocator: Arc<KeyAllocator>,
        project_service: Arc<ProjectService>,
        store: Arc<QueryExecutor>,
    ) -> Self {
        Self {
            redirect_service,
            key_allocator,
            project_service,
            store,
        }
    }
}
