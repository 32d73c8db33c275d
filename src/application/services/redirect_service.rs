//! Redirect resolution service.

use std::sync::Arc;

use crate::domain::entities::{ROOT_KEY, RedirectResult};
use crate::domain::repositories::{DomainRepository, LinkRepository};
use crate::error::AppError;

/// Resolves a domain and optional key to a redirect.
///
/// A missing key, an empty key, and the literal `"_root"` all resolve
/// through the domain's own target, so one URL shape serves both root and
/// keyed redirects.
pub struct RedirectService {
    domain_repository: Arc<dyn DomainRepository>,
    link_repository: Arc<dyn LinkRepository>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(
        domain_repository: Arc<dyn DomainRepository>,
        link_repository: Arc<dyn LinkRepository>,
    ) -> Self {
        Self {
            domain_repository,
            link_repository,
        }
    }

    /// Resolves `domain` and `key` to a redirect.
    ///
    /// `key` must already be percent-decoded.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(result))` backed by either the domain row or the link row
    /// - `Ok(None)` if nothing matches (or no store is configured)
    ///
    /// # Errors
    ///
    /// Store failures propagate unchanged; nothing is retried.
    pub async fn resolve(
        &self,
        domain: &str,
        key: Option<&str>,
    ) -> Result<Option<RedirectResult>, AppError> {
        let result = match key {
            None | Some("") | Some(ROOT_KEY) => self
                .domain_repository
                .find_by_slug(domain)
                .await?
                .map(RedirectResult::root),
            Some(key) => self
                .link_repository
                .find_by_key(domain, key)
                .await?
                .map(RedirectResult::link),
        };

        let outcome = match &result {
            Some(r) if r.is_root() => "root",
            Some(_) => "link",
            None => "miss",
        };
        metrics::counter!("link_resolutions_total", "outcome" => outcome).increment(1);
        tracing::debug!(domain, key = key.unwrap_or(ROOT_KEY), outcome, "Resolved redirect");

        Ok(result)
    }
}
