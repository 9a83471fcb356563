//! Paperfolio Storage FS - Filesystem persistence for Paperfolio
//!
//! This crate provides the file-backed implementations of the storage
//! traits defined in `paperfolio-core`. All filesystem access in the
//! application lives here; the core crate never touches a path.
//!
//! # Layout
//!
//! Records are plain JSON documents under a single data directory:
//!
//! ```text
//! <data_dir>/
//!   portfolio-<owner_id>.json    one document per portfolio owner
//!   seed.json                    last-used sequence seed
//! ```
//!
//! # Architecture
//!
//! ```text
//! paperfolio-core (traits)
//!        ↑
//! paperfolio-storage-fs (this crate)
//!        ↑
//! JSON files on disk
//! ```
//!
//! Writes go through a temp-file-and-rename step so an interrupted write
//! never truncates an existing record.

pub mod errors;
mod files;

// Repository implementations
pub mod ids;
pub mod portfolio;

// Re-export storage error types
pub use errors::StorageError;

// Re-export the repository implementations
pub use ids::FileSeedStore;
pub use portfolio::FilePortfolioRepository;
