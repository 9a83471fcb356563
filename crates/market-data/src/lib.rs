//! Paperfolio Market Data Crate
//!
//! Provider-agnostic quote fetching for the paperfolio trading engine.
//!
//! # Overview
//!
//! The trading engine only ever talks to the [`QuoteProvider`] trait; where
//! the prices come from is this crate's business. The crate ships with
//! [`SimulatedQuoteProvider`], a random-price feed good enough for paper
//! trading, and the trait is public so a real feed can be dropped in without
//! touching the engine.
//!
//! # Core Types
//!
//! - [`Quote`] - A price observation for a symbol at a point in time
//! - [`QuoteProvider`] - The contract every price source implements
//! - [`SimulatedQuoteProvider`] - Random-price implementation with an
//!   optional symbol listing and optional simulated latency
//! - [`MarketDataError`] - Failure vocabulary shared by all providers

pub mod errors;
pub mod models;
pub mod provider;

// Re-export the public surface
pub use errors::MarketDataError;
pub use models::Quote;
pub use provider::{QuoteProvider, SimulatedQuoteProvider};
