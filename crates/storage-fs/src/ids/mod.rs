//! File storage implementation for the sequence seed.

mod seed_store;

pub use seed_store::FileSeedStore;

// Re-export trait from core for convenience
pub use paperfolio_core::ids::SeedStoreTrait;
