use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price observation for a symbol.
///
/// Quotes are ephemeral value objects - they are consumed by the trading
/// engine at trade time and never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    /// Ticker the price applies to
    pub symbol: String,

    /// Unit price (always positive)
    pub price: Decimal,

    /// Display name for the instrument, when the provider knows one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// When the price was observed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Quote {
    /// Create a quote with only the required fields.
    pub fn new(symbol: impl Into<String>, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            name: None,
            timestamp: None,
        }
    }

    /// Attach a display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach an observation timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_new() {
        let quote = Quote::new("MSFT", dec!(150.25));
        assert_eq!(quote.symbol, "MSFT");
        assert_eq!(quote.price, dec!(150.25));
        assert!(quote.name.is_none());
        assert!(quote.timestamp.is_none());
    }

    #[test]
    fn test_quote_builders() {
        let now = Utc::now();
        let quote = Quote::new("MSFT", dec!(150.25))
            .with_name("Microsoft Corporation")
            .with_timestamp(now);
        assert_eq!(quote.name.as_deref(), Some("Microsoft Corporation"));
        assert_eq!(quote.timestamp, Some(now));
    }
}
