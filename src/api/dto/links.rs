//! DTOs for link resolution and key allocation endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{RedirectResult, RedirectSource};

/// Lowercase DNS name, optionally with a port-free IPv6 literal.
static DOMAIN_SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\[[0-9a-f:.]+\]|[a-z0-9]([a-z0-9-]*[a-z0-9])?(\.[a-z0-9]([a-z0-9-]*[a-z0-9])?)*)$")
        .unwrap()
});

/// Query for `GET /api/links/info`.
#[derive(Debug, Deserialize, Validate)]
pub struct LinkInfoQuery {
    #[validate(length(min = 1, max = 253))]
    #[validate(regex(path = "*DOMAIN_SLUG_REGEX", message = "Invalid domain"))]
    pub domain: String,

    /// Omit (or pass `_root`) for the domain's own target.
    #[validate(length(max = 190))]
    pub key: Option<String>,
}

/// Query for `GET /api/links/random`.
#[derive(Debug, Deserialize, Validate)]
pub struct RandomKeyQuery {
    #[validate(length(min = 1, max = 253))]
    #[validate(regex(path = "*DOMAIN_SLUG_REGEX", message = "Invalid domain"))]
    pub domain: String,

    #[validate(length(max = 100))]
    pub prefix: Option<String>,
}

/// Which stored row a resolution came from.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LinkSourceKind {
    Domain,
    Link,
}

/// Resolved redirect as seen by API callers.
#[derive(Debug, Serialize)]
pub struct LinkInfoResponse {
    pub domain: String,
    pub key: String,
    pub url: Option<String>,
    pub source: LinkSourceKind,
    pub id: String,
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub expired: bool,
    pub created_at: DateTime<Utc>,
}

impl LinkInfoResponse {
    pub fn new(domain: &str, result: RedirectResult) -> Self {
        let expired = result.is_expired();
        let RedirectResult { key, url, source } = result;

        match source {
            RedirectSource::Domain(d) => Self {
                domain: domain.to_string(),
                key,
                url,
                source: LinkSourceKind::Domain,
                id: d.id,
                project_id: d.project_id,
                expires_at: None,
                expired,
                created_at: d.created_at,
            },
            RedirectSource::Link(l) => Self {
                domain: domain.to_string(),
                key,
                url,
                source: LinkSourceKind::Link,
                id: l.id,
                project_id: l.project_id,
                expires_at: l.expires_at,
                expired,
                created_at: l.created_at,
            },
        }
    }
}

/// A freshly allocated, currently unused key.
#[derive(Debug, Serialize)]
pub struct RandomKeyResponse {
    pub domain: String,
    pub key: String,
}
