//! Sequence id generation backed by a persisted seed.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use tokio::sync::Mutex;

use crate::errors::Result;
use crate::ids::sequence_id::format_sequence_id;
use crate::ids::sequence_traits::{SeedStoreTrait, SequenceServiceTrait};

/// Generates ids of the shape `"{seed}.{counter}"`.
///
/// One seed is fetched per service instance, lazily on the first
/// `next_id` call: an existing persisted seed is read, incremented, and
/// written back; a fresh store starts at 1. The counter increments per
/// call and resets only when the service is reconstructed, so a process
/// shares a single instance via `Arc`.
pub struct SequenceService {
    seed_store: Arc<dyn SeedStoreTrait>,
    state: Mutex<SequenceState>,
}

#[derive(Default)]
struct SequenceState {
    seed: Option<u64>,
    counter: u64,
}

impl SequenceService {
    pub fn new(seed_store: Arc<dyn SeedStoreTrait>) -> Self {
        SequenceService {
            seed_store,
            state: Mutex::new(SequenceState::default()),
        }
    }

    /// Determine this instance's seed and persist it as the last-used
    /// value, so the next instance starts above it.
    async fn fetch_seed(&self) -> Result<u64> {
        let seed = if self.seed_store.exists().await? {
            self.seed_store.read().await? + 1
        } else {
            1
        };
        self.seed_store.write(seed).await?;
        debug!("Sequence seed initialized to {}", seed);
        Ok(seed)
    }
}

#[async_trait]
impl SequenceServiceTrait for SequenceService {
    async fn next_id(&self) -> Result<String> {
        // The lock is held across the seed fetch so concurrent first calls
        // trigger exactly one store read/write cycle.
        let mut state = self.state.lock().await;
        let seed = match state.seed {
            Some(seed) => seed,
            None => {
                let seed = self.fetch_seed().await?;
                state.seed = Some(seed);
                seed
            }
        };
        state.counter += 1;
        Ok(format_sequence_id(seed, state.counter))
    }

    async fn last(&self) -> u64 {
        self.state.lock().await.counter
    }
}
