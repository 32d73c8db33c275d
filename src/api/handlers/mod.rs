//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod links;
pub mod projects;
pub mod redirect;

pub use health::health_handler;
pub use links::{link_info_handler, random_key_handler};
pub use projects::project_handler;
pub use redirect::{redirect_handler, root_redirect_handler};
