//! Paperfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Paperfolio.
//! It is storage-agnostic and defines traits that are implemented
//! by the `storage-fs` crate.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod ids;
pub mod portfolio;

// Re-export common types from the domain modules
pub use assets::*;
pub use ids::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
