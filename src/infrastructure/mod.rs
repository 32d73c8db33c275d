//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`persistence`] - Connection pool, query executor, and PostgreSQL repositories

pub mod persistence;
