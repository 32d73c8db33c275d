//! PostgreSQL-backed store access.
//!
//! The pool and executor are the only components that touch connections;
//! repositories build on the executor with parameterized SQL.
//!
//! # Components
//!
//! - [`StorePool`] - Bounded connection pool, or an explicit unconfigured stub
//! - [`QueryExecutor`] - Parameterized execution with deadlines
//! - [`PgProjectRepository`] - Project lookups
//! - [`PgDomainRepository`] - Domain lookups
//! - [`PgLinkRepository`] - Link lookups and key existence probes

pub mod error;
pub mod executor;
pub mod pg_domain_repository;
pub mod pg_link_repository;
pub mod pg_project_repository;
pub mod pool;

pub use error::{StoreError, StoreResult};
pub use executor::{QueryExecutor, QueryParam};
pub use pg_domain_repository::PgDomainRepository;
pub use pg_link_repository::PgLinkRepository;
pub use pg_project_repository::PgProjectRepository;
pub use pool::{PoolSettings, StoreCapability, StorePool};
