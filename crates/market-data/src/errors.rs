//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching market data.
///
/// The enum is the shared failure vocabulary for every [`QuoteProvider`]
/// implementation, simulated or real.
///
/// [`QuoteProvider`]: crate::provider::QuoteProvider
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol is not known to the provider.
    /// This is a terminal error - retrying the same symbol won't help.
    #[error("Symbol {0} not found")]
    SymbolNotFound(String),

    /// A provider-specific failure (connectivity, malformed payload, ...).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },
}

impl MarketDataError {
    /// True when the failure is tied to the symbol rather than the provider,
    /// so callers may retry with a different symbol but not the same one.
    pub fn is_symbol_not_found(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_))
    }
}
