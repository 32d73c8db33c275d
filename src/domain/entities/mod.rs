//! Core entities read by the resolution layer.
//!
//! These are plain data structures decoded straight from store rows via
//! [`sqlx::FromRow`]. The resolution layer never writes them.
//!
//! # Entity Types
//!
//! - [`Project`] - A tenant workspace
//! - [`Domain`] - A custom domain with an optional root target
//! - [`Link`] - A keyed short link under a domain
//! - [`RedirectResult`] - Derived view returned by redirect resolution

pub mod domain;
pub mod link;
pub mod project;
pub mod redirect;

pub use domain::Domain;
pub use link::Link;
pub use project::Project;
pub use redirect::{ROOT_KEY, RedirectResult, RedirectSource};
