//! Sequence id generation contracts.

use async_trait::async_trait;

use crate::errors::Result;

/// Persistence capability for the sequence seed.
///
/// The store holds a single numeric value: the last-used seed.
#[async_trait]
pub trait SeedStoreTrait: Send + Sync {
    /// Whether a seed has ever been persisted.
    async fn exists(&self) -> Result<bool>;

    /// Read the persisted seed.
    async fn read(&self) -> Result<u64>;

    /// Persist `seed` as the last-used value.
    async fn write(&self, seed: u64) -> Result<()>;
}

/// Trait for sequence id generation
#[async_trait]
pub trait SequenceServiceTrait: Send + Sync {
    /// Generate the next id of the shape `"{seed}.{counter}"`.
    ///
    /// The seed is fetched once per service instance on the first call;
    /// the counter starts at 1 and increments per call.
    async fn next_id(&self) -> Result<String>;

    /// The counter component of the most recently generated id, `0` when
    /// no id has been generated yet.
    async fn last(&self) -> u64;
}
