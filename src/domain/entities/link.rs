//! Link entity representing a keyed short link.

use chrono::{DateTime, Utc};

/// A short link identified by `(domain, key)`.
///
/// `key` is stored decoded and compared byte-for-byte, so `Promo` and
/// `promo` are different links.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Link {
    pub id: String,
    pub domain: String,
    pub key: String,
    pub url: String,
    pub project_id: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance with no owner and no expiry.
    pub fn new(
        id: String,
        domain: String,
        key: String,
        url: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            domain,
            key,
            url,
            project_id: None,
            expires_at: None,
            created_at,
        }
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }
}
