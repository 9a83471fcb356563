//! Simulated quote provider for paper trading.
//!
//! Prices are drawn uniformly from [1.00, 500.00] with two decimal
//! places, so no real market connection is needed. An optional listing
//! restricts the symbol universe, and an optional latency range makes
//! the provider behave like a remote source.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::traits::QuoteProvider;

/// Lowest price the simulation will quote, in cents.
const MIN_PRICE_CENTS: i64 = 100;
/// Highest price the simulation will quote, in cents.
const MAX_PRICE_CENTS: i64 = 50_000;

/// A quote provider backed by a random price generator.
///
/// By default every symbol is quotable. Call [`with_listing`] to
/// restrict quotes to a known set of symbols, and [`with_latency`] to
/// add a simulated network delay.
///
/// [`with_listing`]: SimulatedQuoteProvider::with_listing
/// [`with_latency`]: SimulatedQuoteProvider::with_latency
#[derive(Debug, Default)]
pub struct SimulatedQuoteProvider {
    /// Known symbols mapped to display names. `None` accepts any symbol.
    listing: Option<HashMap<String, String>>,
    /// Simulated latency bounds in milliseconds, inclusive.
    latency_ms: Option<(u64, u64)>,
}

impl SimulatedQuoteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the provider to a fixed listing of symbols.
    ///
    /// Each entry maps a ticker symbol to a display name. Quotes for
    /// symbols outside the listing fail with
    /// [`MarketDataError::SymbolNotFound`].
    pub fn with_listing<I, S, N>(mut self, listing: I) -> Self
    where
        I: IntoIterator<Item = (S, N)>,
        S: Into<String>,
        N: Into<String>,
    {
        self.listing = Some(
            listing
                .into_iter()
                .map(|(symbol, name)| (symbol.into(), name.into()))
                .collect(),
        );
        self
    }

    /// Add a simulated per-request delay, drawn uniformly from
    /// `[min_ms, max_ms]` milliseconds.
    pub fn with_latency(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.latency_ms = Some((min_ms.min(max_ms), min_ms.max(max_ms)));
        self
    }

    /// Look up the display name for a symbol, failing when a listing is
    /// configured and the symbol is not part of it.
    fn resolve_name(&self, symbol: &str) -> Result<Option<String>, MarketDataError> {
        match &self.listing {
            Some(listing) => listing
                .get(symbol)
                .cloned()
                .map(Some)
                .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string())),
            None => Ok(None),
        }
    }

    fn random_price() -> Decimal {
        let cents = rand::thread_rng().gen_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS);
        Decimal::new(cents, 2)
    }
}

#[async_trait]
impl QuoteProvider for SimulatedQuoteProvider {
    fn id(&self) -> &'static str {
        "SIMULATED"
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let name = self.resolve_name(symbol)?;

        if let Some((min_ms, max_ms)) = self.latency_ms {
            // The rng handle must not live across the await.
            let delay = rand::thread_rng().gen_range(min_ms..=max_ms);
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
        }

        let price = Self::random_price();
        debug!("Simulated quote for {}: {}", symbol, price);

        let mut quote = Quote::new(symbol, price).with_timestamp(Utc::now());
        if let Some(name) = name {
            quote = quote.with_name(name);
        }
        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_provider_id() {
        assert_eq!(SimulatedQuoteProvider::new().id(), "SIMULATED");
    }

    #[tokio::test]
    async fn test_quote_price_within_bounds() {
        let provider = SimulatedQuoteProvider::new();

        for _ in 0..50 {
            let quote = provider.get_latest_quote("MSFT").await.unwrap();
            assert_eq!(quote.symbol, "MSFT");
            assert!(quote.price >= dec!(1.00), "price too low: {}", quote.price);
            assert!(quote.price <= dec!(500.00), "price too high: {}", quote.price);
            assert!(quote.price.scale() <= 2, "more than 2dp: {}", quote.price);
        }
    }

    #[tokio::test]
    async fn test_quote_carries_timestamp() {
        let provider = SimulatedQuoteProvider::new();
        let quote = provider.get_latest_quote("AAPL").await.unwrap();
        assert!(quote.timestamp.is_some());
        assert!(quote.name.is_none());
    }

    #[tokio::test]
    async fn test_listing_resolves_display_name() {
        let provider = SimulatedQuoteProvider::new()
            .with_listing([("MSFT", "Microsoft Corporation"), ("BTC", "Bitcoin")]);

        let quote = provider.get_latest_quote("MSFT").await.unwrap();
        assert_eq!(quote.name.as_deref(), Some("Microsoft Corporation"));
    }

    #[tokio::test]
    async fn test_listing_rejects_unknown_symbol() {
        let provider = SimulatedQuoteProvider::new().with_listing([("MSFT", "Microsoft")]);

        let err = provider.get_latest_quote("NOPE").await.unwrap_err();
        assert!(matches!(err, MarketDataError::SymbolNotFound(ref s) if s == "NOPE"));
        assert_eq!(err.to_string(), "Symbol NOPE not found");
    }

    #[tokio::test]
    async fn test_latency_still_returns_quote() {
        let provider = SimulatedQuoteProvider::new().with_latency(1, 2);
        let quote = provider.get_latest_quote("ETH").await.unwrap();
        assert!(quote.price >= dec!(1.00));
    }
}
