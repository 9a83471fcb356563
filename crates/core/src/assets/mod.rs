//! Assets module - holding line domain models.

mod assets_model;


// Re-export the public interface
pub use assets_model::{Asset, AssetKind};
