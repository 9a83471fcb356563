//! Portfolio aggregate root.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::{Asset, AssetKind};
use crate::constants::DECIMAL_PRECISION;
use crate::errors::ValidationError;

/// A single owner's portfolio: one cash asset plus tradable positions.
///
/// Assets keep insertion order, cash first. The total value is always
/// derived from the asset list; no cached total exists in the model or
/// the persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub owner_id: String,
    pub name: String,
    /// Base currency, the symbol of the single cash asset.
    pub currency: String,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    pub assets: Vec<Asset>,
}

impl Portfolio {
    /// An empty portfolio shell; the caller adds the cash asset.
    pub fn new(owner_id: &str, name: &str, currency: &str) -> Self {
        Portfolio {
            owner_id: owner_id.to_string(),
            name: name.to_string(),
            currency: currency.to_string(),
            created_at: Utc::now(),
            assets: Vec::new(),
        }
    }

    /// The cash asset anchoring the portfolio's base currency.
    pub fn cash_asset(&self) -> Option<&Asset> {
        self.assets
            .iter()
            .find(|a| a.is_cash() && a.symbol == self.currency)
    }

    pub fn cash_asset_mut(&mut self) -> Option<&mut Asset> {
        let currency = self.currency.clone();
        self.assets
            .iter_mut()
            .find(|a| a.is_cash() && a.symbol == currency)
    }

    /// Look up a holding by its `(symbol, kind)` pair.
    pub fn find_asset(&self, symbol: &str, kind: AssetKind) -> Option<&Asset> {
        self.assets
            .iter()
            .find(|a| a.symbol == symbol && a.kind == kind)
    }

    pub fn find_asset_mut(&mut self, symbol: &str, kind: AssetKind) -> Option<&mut Asset> {
        self.assets
            .iter_mut()
            .find(|a| a.symbol == symbol && a.kind == kind)
    }

    /// Total portfolio value: cash counts at face value, positions at
    /// quantity times their last known price, unpriced positions at zero.
    pub fn total_value(&self) -> Decimal {
        self.assets
            .iter()
            .map(Asset::market_value)
            .sum::<Decimal>()
            .round_dp(DECIMAL_PRECISION)
    }

    /// Check the portfolio invariants: exactly one cash asset matching the
    /// base currency, unique `(symbol, kind)` pairs, no negative quantity.
    ///
    /// Run on every loaded portfolio before it is installed in an engine.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let cash_count = self.assets.iter().filter(|a| a.is_cash()).count();
        if cash_count != 1 {
            return Err(ValidationError::InvariantViolation(format!(
                "expected exactly one cash asset, found {}",
                cash_count
            )));
        }
        if self.cash_asset().is_none() {
            return Err(ValidationError::InvariantViolation(format!(
                "cash asset does not match portfolio currency {}",
                self.currency
            )));
        }

        let mut seen: HashSet<(&str, AssetKind)> = HashSet::new();
        for asset in &self.assets {
            if !seen.insert((asset.symbol.as_str(), asset.kind)) {
                return Err(ValidationError::InvariantViolation(format!(
                    "duplicate asset {} ({})",
                    asset.symbol, asset.kind
                )));
            }
            if asset.quantity < Decimal::ZERO {
                return Err(ValidationError::InvariantViolation(format!(
                    "negative quantity {} for asset {}",
                    asset.quantity, asset.symbol
                )));
            }
        }

        Ok(())
    }
}
