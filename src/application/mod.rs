//! Application layer services.
//!
//! Services compose repository lookups into the operations callers use.
//!
//! # Available Services
//!
//! - [`services::redirect_service::RedirectService`] - Domain/key to redirect resolution
//! - [`services::key_allocator::KeyAllocator`] - Collision-free key allocation
//! - [`services::project_service::ProjectService`] - Project lookups

pub mod services;
