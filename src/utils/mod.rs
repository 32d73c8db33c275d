//! Utility functions for key generation and request handling.
//!
//! - [`key_generator`] - Random key generation and prefix composition
//! - [`extract_domain`] - Domain extraction from HTTP headers

pub mod extract_domain;
pub mod key_generator;
