//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, service wiring, and Axum server lifecycle.

use crate::application::services::{KeyAllocator, ProjectService, RedirectService};
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgDomainRepository, PgLinkRepository, PgProjectRepository, QueryExecutor, StorePool,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared state on top of an opened pool.
///
/// Everything downstream of the pool is wired here, so the admin CLI and the
/// HTTP server resolve and allocate through exactly the same services.
pub fn build_state(pool: StorePool, config: &Config) -> AppState {
    let capability = pool.capability();
    let executor = Arc::new(QueryExecutor::new(pool, config.query_timeout()));

    let domain_repository = Arc::new(PgDomainRepository::new(executor.clone()));
    let link_repository = Arc::new(PgLinkRepository::new(executor.clone()));
    let project_repository = Arc::new(PgProjectRepository::new(executor.clone()));

    let redirect_service = Arc::new(RedirectService::new(
        domain_repository,
        link_repository.clone(),
    ));
    let key_allocator = Arc::new(KeyAllocator::new(
        link_repository,
        capability,
        config.key_max_attempts,
    ));
    let project_service = Arc::new(ProjectService::new(project_repository));

    AppState::new(redirect_service, key_allocator, project_service, executor)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Store pool (or an unconfigured store when no URL is set)
/// - Repositories and services
/// - Axum HTTP server with graceful shutdown
///
/// The pool is closed after the server stops accepting requests.
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = StorePool::open(config.database_url.as_deref(), config.pool_settings())
        .await
        .context("Failed to open store pool")?;
    tracing::info!(capability = ?pool.capability(), "Store ready");

    let state = build_state(pool.clone(), &config);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
