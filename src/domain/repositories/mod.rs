//! Repository trait definitions for the domain layer.
//!
//! These traits are the entity resolvers of the resolution layer: narrow,
//! read-only lookups implemented by `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`ProjectRepository`] - Project by id
//! - [`DomainRepository`] - Domain by slug
//! - [`LinkRepository`] - Link by domain and key, plus existence probes
//!
//! Mock implementations are generated with `mockall` under `cfg(test)`.

pub mod domain_repository;
pub mod link_repository;
pub mod project_repository;

pub use domain_repository::DomainRepository;
pub use link_repository::LinkRepository;
pub use project_repository::ProjectRepository;

#[cfg(test)]
pub use domain_repository::MockDomainRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use project_repository::MockProjectRepository;
