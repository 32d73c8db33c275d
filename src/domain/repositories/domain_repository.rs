//! Repository trait for domain lookups.

use crate::domain::entities::Domain;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to custom domains.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDomainRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_domain.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Finds a domain by its slug (e.g., "example.com").
    ///
    /// Returns `Ok(None)` when no such domain exists or no store is configured.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Unavailable`] on store failures.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Domain>, AppError>;
}
