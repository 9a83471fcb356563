//! Core error types for the Paperfolio application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (io, serde, etc.) are converted to these types by the storage layer.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::assets::AssetKind;
use paperfolio_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio application.
///
/// Trade, store, and market data failures pass their messages through
/// unchanged so callers can display or log them directly.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Trade(#[from] TradeError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    MarketData(#[from] MarketDataError),
}

/// Errors raised while validating or executing a trade.
///
/// Every trade validates fully before mutating, so any of these means the
/// portfolio is exactly as it was before the call.
#[derive(Error, Debug)]
pub enum TradeError {
    /// A buy cost more than the available cash balance.
    #[error("Not enough cash. Need: {needed} - Have: {available}")]
    InsufficientFunds { needed: Decimal, available: Decimal },

    /// A sell targeted a holding the portfolio does not contain.
    #[error("Asset {symbol} ({kind}) not found in portfolio")]
    AssetNotFound { symbol: String, kind: AssetKind },

    /// A sell requested more units than the holding carries.
    #[error("Not enough {symbol} to sell. Available: {available}, trying to sell: {requested}")]
    InsufficientQuantity {
        symbol: String,
        available: Decimal,
        requested: Decimal,
    },

    /// The cash asset was gone when a trade needed it. This signals a prior
    /// invariant violation, not a user error.
    #[error("Cash asset not found in portfolio. Portfolio state is inconsistent")]
    MissingCashAsset,

    /// The engine was used before a portfolio was built or loaded.
    #[error("No portfolio loaded. Build or load one first")]
    PortfolioNotInitialized,
}

/// Storage-agnostic error type for persistence operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert its backend-specific errors into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Reading a stored record failed.
    #[error("Store read failed: {0}")]
    ReadFailed(String),

    /// Writing a record failed.
    #[error("Store write failed: {0}")]
    WriteFailed(String),

    /// A stored payload could not be parsed.
    #[error("Stored record could not be parsed: {0}")]
    ParseFailed(String),
}

/// Validation errors for caller input and loaded state.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Portfolio invariant violated: {0}")]
    InvariantViolation(String),
}
