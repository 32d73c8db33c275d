//! Repository trait for short link lookups.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to short links.
///
/// Keys are passed already percent-decoded and compared byte-for-byte.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by domain and key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found or no store is configured
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Unavailable`] on store failures.
    async fn find_by_key(&self, domain: &str, key: &str) -> Result<Option<Link>, AppError>;

    /// Checks whether a key is taken under a domain without loading the row.
    ///
    /// Returns `Ok(false)` when no store is configured.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] or [`AppError::Unavailable`] on store failures.
    async fn exists(&self, domain: &str, key: &str) -> Result<bool, AppError>;
}
