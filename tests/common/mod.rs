#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use link_resolver::application::services::{KeyAllocator, ProjectService, RedirectService};
use link_resolver::domain::entities::{Domain, Link, Project};
use link_resolver::domain::repositories::{DomainRepository, LinkRepository, ProjectRepository};
use link_resolver::error::AppError;
use link_resolver::infrastructure::persistence::{QueryExecutor, StoreCapability, StorePool};
use link_resolver::state::AppState;

/// Repository set backed by hash maps, for router tests without PostgreSQL.
#[derive(Default)]
pub struct InMemoryStore {
    projects: Mutex<HashMap<String, Project>>,
    domains: Mutex<HashMap<String, Domain>>,
    links: Mutex<HashMap<(String, String), Link>>,
}

impl InMemoryStore {
    pub fn add_project(&self, id: &str, name: &str, slug: &str) {
        self.projects.lock().unwrap().insert(
            id.to_string(),
            Project {
                id: id.to_string(),
                name: name.to_string(),
                slug: slug.to_string(),
                created_at: Utc::now(),
            },
        );
    }

    pub fn add_domain(&self, slug: &str, target: Option<&str>) {
        self.domains.lock().unwrap().insert(
            slug.to_string(),
            Domain::new(
                format!("dom_{slug}"),
                slug.to_string(),
                target.map(str::to_string),
                Utc::now(),
            ),
        );
    }

    pub fn add_link(&self, domain: &str, key: &str, url: &str) {
        self.insert_link(Link::new(
            format!("link_{key}"),
            domain.to_string(),
            key.to_string(),
            url.to_string(),
            Utc::now(),
        ));
    }

    pub fn add_expired_link(&self, domain: &str, key: &str, url: &str) {
        let mut link = Link::new(
            format!("link_{key}"),
            domain.to_string(),
            key.to_string(),
            url.to_string(),
            Utc::now() - Duration::days(2),
        );
        link.expires_at = Some(Utc::now() - Duration::hours(1));
        self.insert_link(link);
    }

    fn insert_link(&self, link: Link) {
        self.links
            .lock()
            .unwrap()
            .insert((link.domain.clone(), link.key.clone()), link);
    }
}

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Project>, AppError> {
        Ok(self.projects.lock().unwrap().get(id).cloned())
    }
}

#[async_trait]
impl DomainRepository for InMemoryStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Domain>, AppError> {
        Ok(self.domains.lock().unwrap().get(slug).cloned())
    }
}

#[async_trait]
impl LinkRepository for InMemoryStore {
    async fn find_by_key(&self, domain: &str, key: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .get(&(domain.to_string(), key.to_string()))
            .cloned())
    }

    async fn exists(&self, domain: &str, key: &str) -> Result<bool, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .contains_key(&(domain.to_string(), key.to_string())))
    }
}

/// Store seeded with the fixtures most router tests share.
pub fn seeded_store() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::default());
    store.add_project("proj_1", "Acme", "acme");
    store.add_domain("example.com", Some("https://home.example"));
    store.add_domain("bare.example", None);
    store.add_link("example.com", "promo", "https://promo.example");
    store.add_link("example.com", "campaign/spring", "https://spring.example");
    store.add_link("example.com", "café", "https://cafe.example");
    store.add_expired_link("example.com", "old", "https://old.example");
    store
}

/// Builds application state over an in-memory store.
///
/// The executor is unconfigured, so the health probe reports degraded while
/// resolution and allocation go through `store`.
pub fn create_test_state(store: Arc<InMemoryStore>) -> AppState {
    create_test_state_with(store, StoreCapability::Backed)
}

pub fn create_test_state_with(store: Arc<InMemoryStore>, capability: StoreCapability) -> AppState {
    let executor = Arc::new(QueryExecutor::new(
        StorePool::unconfigured(),
        std::time::Duration::from_secs(5),
    ));

    AppState::new(
        Arc::new(RedirectService::new(store.clone(), store.clone())),
        Arc::new(KeyAllocator::new(store.clone(), capability, 10)),
        Arc::new(ProjectService::new(store)),
        executor,
    )
}
