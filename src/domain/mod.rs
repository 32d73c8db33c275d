//! Domain layer containing entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Projects, domains, links, and the derived redirect view
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; repository traits are implemented in
//! [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
