//! Collision-free short key allocation.

use serde_json::json;
use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::persistence::StoreCapability;
use crate::utils::key_generator::{compose_key, generate_key, normalize_prefix};

/// Default bound on generate-and-check rounds per allocation.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Hands out keys that are not yet used under a domain.
///
/// The allocator only checks; it never inserts. Whoever persists the link
/// must still handle a unique-constraint failure, because two allocations
/// can race to the same candidate between the check and the insert.
pub struct KeyAllocator {
    link_repository: Arc<dyn LinkRepository>,
    capability: StoreCapability,
    max_attempts: usize,
}

impl KeyAllocator {
    /// Creates a new allocator.
    ///
    /// `capability` is the store state observed at start-up; an unconfigured
    /// store cannot vouch for uniqueness, so allocation is refused.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        capability: StoreCapability,
        max_attempts: usize,
    ) -> Self {
        Self {
            link_repository,
            capability,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Allocates a key for `domain`, optionally under `prefix`.
    ///
    /// Leading and trailing `/` are trimmed from the prefix and the
    /// existence check always runs against the full composed key.
    ///
    /// # Errors
    ///
    /// - [`AppError::Unavailable`] if no store is configured
    /// - [`AppError::AllocationExhausted`] after `max_attempts` collisions
    /// - Store failures from the existence check propagate unchanged
    pub async fn allocate(&self, domain: &str, prefix: Option<&str>) -> Result<String, AppError> {
        if !self.capability.is_backed() {
            return Err(AppError::unavailable(
                "Key allocation requires a configured store",
                json!({ "domain": domain }),
            ));
        }

        let prefix = prefix.and_then(normalize_prefix);

        for attempt in 1..=self.max_attempts {
            let candidate = compose_key(prefix, &generate_key());

            if !self.link_repository.exists(domain, &candidate).await? {
                tracing::debug!(domain, key = %candidate, attempt, "Allocated key");
                return Ok(candidate);
            }

            metrics::counter!("key_allocation_collisions_total").increment(1);
            tracing::warn!(domain, key = %candidate, attempt, "Generated key already taken");
        }

        metrics::counter!("key_allocation_exhausted_total").increment(1);
        tracing::error!(
            domain,
            attempts = self.max_attempts,
            "Key allocation exhausted"
        );

        Err(AppError::AllocationExhausted {
            domain: domain.to_string(),
            attempts: self.max_attempts,
        })
    }
}
