//! Business logic services for the application layer.

pub mod key_allocator;
pub mod project_service;
pub mod redirect_service;

pub use key_allocator::{DEFAULT_MAX_ATTEMPTS, KeyAllocator};
pub use project_service::ProjectService;
pub use redirect_service::RedirectService;
