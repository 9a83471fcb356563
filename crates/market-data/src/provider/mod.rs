//! Quote provider abstraction and implementations.
//!
//! This module contains:
//! - The `QuoteProvider` trait that all price sources implement
//! - The `SimulatedQuoteProvider` used for paper trading
//!
//! Providers are injected into the trading engine behind the trait; the
//! engine never special-cases a concrete implementation.

mod simulated;
mod traits;

// Re-exports
pub use simulated::SimulatedQuoteProvider;
pub use traits::QuoteProvider;
