//! Data Transfer Objects for API requests and responses.
//!
//! DTOs provide serialization contracts separate from domain entities,
//! allowing the API to evolve independently of internal models.

pub mod health;
pub mod links;
pub mod project;
