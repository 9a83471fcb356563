//! Portfolio persistence contract.

use async_trait::async_trait;

use crate::errors::Result;
use crate::portfolio::Portfolio;

/// Trait for portfolio persistence operations
#[async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync {
    /// Load the stored portfolio for `owner_id`.
    ///
    /// Fails with `StoreError::NotFound` when no portfolio has been saved
    /// for that owner, and `StoreError::ParseFailed` when the stored
    /// payload is not a valid portfolio record.
    async fn load(&self, owner_id: &str) -> Result<Portfolio>;

    /// Persist the full portfolio snapshot, replacing any previous one.
    async fn save(&self, portfolio: &Portfolio) -> Result<()>;
}
