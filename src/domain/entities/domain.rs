//! Domain entity representing a custom short-link domain.

use chrono::{DateTime, Utc};

/// A domain that serves short links.
///
/// Identified by its unique `slug` (the DNS name). `target` is where a
/// request for the bare domain is sent; it may be unset until the owning
/// project configures a landing page.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Domain {
    pub id: String,
    pub slug: String,
    pub target: Option<String>,
    pub verified: bool,
    pub project_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Domain {
    /// Creates a new Domain instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let domain = Domain::new(
    ///     "cldom1".to_string(),
    ///     "example.com".to_string(),
    ///     Some("https://home.example".to_string()),
    ///     Utc::now(),
    /// );
    /// ```
    pub fn new(
        id: String,
        slug: String,
        target: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            slug,
            target,
            verified: true,
            project_id: None,
            created_at,
        }
    }
}
