//! Quote provider trait definitions.
//!
//! This module defines the core `QuoteProvider` trait that all
//! quote sources must implement.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Trait for quote providers.
///
/// Implement this trait to add support for a new price source.
/// The trading engine consults the provider for the current price of a
/// symbol before booking a trade, so implementations must be safe to
/// share across tasks.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use paperfolio_market_data::{MarketDataError, Quote, QuoteProvider};
///
/// struct FixedPriceProvider;
///
/// #[async_trait]
/// impl QuoteProvider for FixedPriceProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
///         Ok(Quote::new(symbol, rust_decimal::Decimal::ONE_HUNDRED))
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "SIMULATED".
    /// Used for logging and error reporting.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a symbol.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The ticker symbol to quote (e.g., "MSFT")
    ///
    /// # Returns
    ///
    /// The latest quote on success, or a `MarketDataError` on failure.
    /// Unknown symbols fail with `MarketDataError::SymbolNotFound`.
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;
}
