//! # Pattern Storage API
//!
//! Client for the simulator server's pattern endpoints. The `PatternStore`
//! trait is the seam: core and the TUI only ever see the trait, so tests can
//! swap in a recording double and integration tests can point the HTTP
//! client at a mock server.

pub mod client;
pub mod types;

pub use client::{ApiError, HttpPatternClient, PatternStore};
pub use types::{NewPattern, SavedPattern};
