//! Sequence id format helpers.
//!
//! Ids have the shape `"{seed}.{counter}"`: a per-process seed followed by
//! a per-call counter.

/// Separator between the seed and counter components.
pub const SEQUENCE_ID_DELIMITER: char = '.';

/// Formats a sequence id from its seed and counter components.
pub fn format_sequence_id(seed: u64, counter: u64) -> String {
    format!("{}{}{}", seed, SEQUENCE_ID_DELIMITER, counter)
}

/// Parses the seed component of a sequence id, `"300.5"` giving `300`.
///
/// Returns `None` when the id does not start with a numeric seed.
pub fn extract_seed(id: &str) -> Option<u64> {
    id.split(SEQUENCE_ID_DELIMITER).next()?.parse().ok()
}
