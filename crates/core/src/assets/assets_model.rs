//! Asset domain models.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Asset behavior classification.
///
/// Closed set, extensible by adding variants. `Cash` is the portfolio's
/// base-currency balance; everything else is a tradable position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Cash,
    #[default]
    #[serde(rename = "stocks")]
    Stock,
    Crypto,
}

impl AssetKind {
    /// Returns the persisted string representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Cash => "cash",
            AssetKind::Stock => "stocks",
            AssetKind::Crypto => "crypto",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One holding line inside a portfolio.
///
/// Identity is opaque, assigned at creation by the sequence service, and
/// immutable after. `last_price` is the most recent known unit price; cash
/// is always priced at par and a position without a price values at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub symbol: String,
    pub quantity: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_price: Option<Decimal>,
    pub updated_at: DateTime<Utc>,
}

impl Asset {
    /// The cash balance line for `currency`, priced at par.
    pub fn new_cash(id: String, currency: &str, quantity: Decimal) -> Self {
        Asset {
            id,
            name: format!("{} Cash", currency),
            kind: AssetKind::Cash,
            symbol: currency.to_string(),
            quantity,
            last_price: Some(Decimal::ONE),
            updated_at: Utc::now(),
        }
    }

    /// A tradable position line priced at `price` per unit.
    pub fn new_position(
        id: String,
        name: String,
        kind: AssetKind,
        symbol: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Asset {
            id,
            name,
            kind,
            symbol: symbol.to_string(),
            quantity,
            last_price: Some(price),
            updated_at: Utc::now(),
        }
    }

    pub fn is_cash(&self) -> bool {
        self.kind == AssetKind::Cash
    }

    /// Value of this line: the quantity itself for cash, quantity times the
    /// last known price otherwise. Unpriced positions value at zero.
    pub fn market_value(&self) -> Decimal {
        if self.is_cash() {
            self.quantity
        } else {
            match self.last_price {
                Some(price) => self.quantity * price,
                None => Decimal::ZERO,
            }
        }
    }
}
