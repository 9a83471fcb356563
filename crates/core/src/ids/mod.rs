//! Ids module - sequence id generation and its persistence contract.

mod sequence_id;
mod sequence_service;
mod sequence_traits;


// Re-export the public interface
pub use sequence_id::{extract_seed, format_sequence_id, SEQUENCE_ID_DELIMITER};
pub use sequence_service::SequenceService;
pub use sequence_traits::{SeedStoreTrait, SequenceServiceTrait};
