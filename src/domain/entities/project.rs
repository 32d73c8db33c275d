//! Project entity.

use chrono::{DateTime, Utc};

/// A tenant workspace that owns domains and links.
///
/// Only `id` matters for resolution; the remaining columns are carried so
/// API callers get a useful view of the row.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}
