use link_resolver::config::Config;
use link_resolver::domain::entities::RedirectSource;
use link_resolver::domain::repositories::LinkRepository;
use link_resolver::infrastructure::persistence::{PgLinkRepository, QueryExecutor, StorePool};
use link_resolver::server::build_state;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

fn test_config() -> Config {
    Config {
        database_url: None,
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        db_max_connections: 2,
        db_connect_timeout: 5,
        db_idle_timeout: 60,
        db_max_lifetime: 60,
        db_query_timeout: 5,
        key_max_attempts: 10,
    }
}

#[sqlx::test(migrations = "tests/migrations", fixtures("redirects"))]
async fn test_resolve_root_and_key(pool: PgPool) {
    let state = build_state(StorePool::from_pool(pool), &test_config());

    let root = state
        .redirect_service
        .resolve("example.com", None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(root.key, "_root");
    assert_eq!(root.url.as_deref(), Some("https://home.example"));
    assert!(matches!(root.source, RedirectSource::Domain(_)));

    let link = state
        .redirect_service
        .resolve("example.com", Some("promo"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(link.url.as_deref(), Some("https://promo.example"));

    let missing = state
        .redirect_service
        .resolve("example.com", Some("missing"))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "tests/migrations", fixtures("redirects"))]
async fn test_allocated_key_is_unused(pool: PgPool) {
    let state = build_state(StorePool::from_pool(pool.clone()), &test_config());
    let links = PgLinkRepository::new(Arc::new(QueryExecutor::new(
        StorePool::from_pool(pool),
        Duration::from_secs(5),
    )));

    let key = state
        .key_allocator
        .allocate("example.com", Some("campaign"))
        .await
        .unwrap();

    assert!(key.starts_with("campaign/"));
    assert!(!links.exists("example.com", &key).await.unwrap());
}

#[tokio::test]
async fn test_unconfigured_store_resolves_nothing() {
    let state = build_state(StorePool::unconfigured(), &test_config());

    let root = state
        .redirect_service
        .resolve("example.com", None)
        .await
        .unwrap();
    let link = state
        .redirect_service
        .resolve("example.com", Some("promo"))
        .await
        .unwrap();

    assert!(root.is_none());
    assert!(link.is_none());
    assert!(
        state
            .key_allocator
            .allocate("example.com", None)
            .await
            .is_err()
    );
}
