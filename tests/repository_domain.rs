use link_resolver::domain::repositories::{DomainRepository, ProjectRepository};
use link_resolver::infrastructure::persistence::{
    PgDomainRepository, PgProjectRepository, QueryExecutor, StorePool,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

fn executor(pool: PgPool) -> Arc<QueryExecutor> {
    Arc::new(QueryExecutor::new(
        StorePool::from_pool(pool),
        Duration::from_secs(5),
    ))
}

#[sqlx::test(migrations = "tests/migrations", fixtures("redirects"))]
async fn test_find_domain_by_slug(pool: PgPool) {
    let repo = PgDomainRepository::new(executor(pool));

    let domain = repo.find_by_slug("example.com").await.unwrap().unwrap();

    assert_eq!(domain.id, "dom_1");
    assert_eq!(domain.target.as_deref(), Some("https://home.example"));
    assert!(domain.verified);
    assert_eq!(domain.project_id.as_deref(), Some("proj_1"));
}

#[sqlx::test(migrations = "tests/migrations", fixtures("redirects"))]
async fn test_find_domain_without_target(pool: PgPool) {
    let repo = PgDomainRepository::new(executor(pool));

    let domain = repo.find_by_slug("bare.example").await.unwrap().unwrap();

    assert!(domain.target.is_none());
    assert!(!domain.verified);
}

#[sqlx::test(migrations = "tests/migrations", fixtures("redirects"))]
async fn test_find_domain_not_found(pool: PgPool) {
    let repo = PgDomainRepository::new(executor(pool));

    assert!(repo.find_by_slug("missing.example").await.unwrap().is_none());
}

#[sqlx::test(migrations = "tests/migrations", fixtures("redirects"))]
async fn test_find_project_by_id(pool: PgPool) {
    let repo = PgProjectRepository::new(executor(pool));

    let project = repo.find_by_id("proj_1").await.unwrap().unwrap();
    assert_eq!(project.slug, "acme");

    assert!(repo.find_by_id("proj_missing").await.unwrap().is_none());
}
