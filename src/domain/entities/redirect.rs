//! Derived redirect view produced by resolution.

use super::{Domain, Link};

/// Key reported for redirects served from a domain's own target.
pub const ROOT_KEY: &str = "_root";

/// The stored row a redirect was resolved from.
///
/// Exactly one of the two; a resolution that finds neither yields no
/// [`RedirectResult`] at all.
#[derive(Debug, Clone, PartialEq)]
pub enum RedirectSource {
    Domain(Domain),
    Link(Link),
}

/// Outcome of resolving a domain and optional key.
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectResult {
    /// The resolved key, or [`ROOT_KEY`] for a root redirect.
    pub key: String,
    /// Where to send the client. Only `None` for a domain with no target.
    pub url: Option<String>,
    pub source: RedirectSource,
}

impl RedirectResult {
    /// Builds a root redirect from a domain row.
    pub fn root(domain: Domain) -> Self {
        Self {
            key: ROOT_KEY.to_string(),
            url: domain.target.clone(),
            source: RedirectSource::Domain(domain),
        }
    }

    /// Builds a keyed redirect from a link row.
    pub fn link(link: Link) -> Self {
        Self {
            key: link.key.clone(),
            url: Some(link.url.clone()),
            source: RedirectSource::Link(link),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self.source, RedirectSource::Domain(_))
    }

    /// True when the underlying link has expired. Root redirects never expire.
    pub fn is_expired(&self) -> bool {
        match &self.source {
            RedirectSource::Link(link) => link.is_expired(),
            RedirectSource::Domain(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_root_result_uses_domain_target() {
        let domain = Domain::new(
            "d1".to_string(),
            "example.com".to_string(),
            Some("https://home.example".to_string()),
            Utc::now(),
        );

        let result = RedirectResult::root(domain.clone());

        assert_eq!(result.key, ROOT_KEY);
        assert_eq!(result.url.as_deref(), Some("https://home.example"));
        assert!(result.is_root());
        assert_eq!(result.source, RedirectSource::Domain(domain));
    }

    #[test]
    fn test_link_result_uses_link_url() {
        let link = Link::new(
            "l1".to_string(),
            "example.com".to_string(),
            "promo".to_string(),
            "https://promo.example".to_string(),
            Utc::now(),
        );

        let result = RedirectResult::link(link);

        assert_eq!(result.key, "promo");
        assert_eq!(result.url.as_deref(), Some("https://promo.example"));
        assert!(!result.is_root());
        assert!(!result.is_expired());
    }

    #[test]
    fn test_expired_link_result() {
        let mut link = Link::new(
            "l2".to_string(),
            "example.com".to_string(),
            "old".to_string(),
            "https://old.example".to_string(),
            Utc::now(),
        );
        link.expires_at = Some(Utc::now() - Duration::minutes(5));

        assert!(RedirectResult::link(link).is_expired());
    }
}
