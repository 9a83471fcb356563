//! Trading engine: owns one portfolio and applies validated trades.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info};
use rust_decimal::Decimal;

use paperfolio_market_data::QuoteProvider;

use crate::assets::{Asset, AssetKind};
use crate::constants::{DEFAULT_CURRENCY, DEFAULT_PORTFOLIO_NAME};
use crate::errors::{Error, Result, TradeError, ValidationError};
use crate::ids::SequenceServiceTrait;
use crate::portfolio::{Portfolio, PortfolioRepositoryTrait};

/// The trading engine.
///
/// One instance owns one in-memory portfolio; concurrent owners get
/// distinct instances. Mutating calls take `&mut self` and perform no
/// internal locking, so a caller serializes access to a given engine.
/// Every trade validates fully before mutating: a failed `buy` or `sell`
/// leaves the portfolio exactly as it was.
pub struct TradingService {
    quote_provider: Arc<dyn QuoteProvider>,
    repository: Arc<dyn PortfolioRepositoryTrait>,
    sequence: Arc<dyn SequenceServiceTrait>,
    base_currency: String,
    portfolio: Option<Portfolio>,
}

impl TradingService {
    pub fn new(
        quote_provider: Arc<dyn QuoteProvider>,
        repository: Arc<dyn PortfolioRepositoryTrait>,
        sequence: Arc<dyn SequenceServiceTrait>,
    ) -> Self {
        TradingService {
            quote_provider,
            repository,
            sequence,
            base_currency: DEFAULT_CURRENCY.to_string(),
            portfolio: None,
        }
    }

    /// Override the base currency used for portfolios built by this engine.
    pub fn with_base_currency(mut self, currency: &str) -> Self {
        self.base_currency = currency.to_string();
        self
    }

    /// The engine's current portfolio, once one has been built or loaded.
    pub fn portfolio(&self) -> Option<&Portfolio> {
        self.portfolio.as_ref()
    }

    /// Replace any prior in-memory portfolio with a fresh one for
    /// `owner_id`, holding `initial_cash` in the engine's base currency as
    /// its single asset.
    pub async fn build_for(&mut self, owner_id: &str, initial_cash: Decimal) -> Result<()> {
        if owner_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "owner_id".to_string(),
            )));
        }
        if initial_cash < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "initial cash must not be negative, got {}",
                initial_cash
            ))));
        }

        let id = self.sequence.next_id().await?;
        let mut portfolio = Portfolio::new(owner_id, DEFAULT_PORTFOLIO_NAME, &self.base_currency);
        portfolio
            .assets
            .push(Asset::new_cash(id, &self.base_currency, initial_cash));

        debug!(
            "Built portfolio for {} with {} {}",
            owner_id, initial_cash, self.base_currency
        );
        self.portfolio = Some(portfolio);
        Ok(())
    }

    /// Buy `quantity` of `symbol` at the provider's current price.
    ///
    /// The quote lookup and the cash check both run before any mutation.
    /// Buys book against the `(symbol, Stock)` holding: an existing
    /// position gains quantity and has its price overwritten, otherwise a
    /// new position is appended under a fresh sequence id. Returns the
    /// resulting position.
    pub async fn buy(&mut self, symbol: &str, quantity: Decimal) -> Result<Asset> {
        if quantity <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "buy quantity must be positive, got {}",
                quantity
            ))));
        }

        let quote_provider = Arc::clone(&self.quote_provider);
        let sequence = Arc::clone(&self.sequence);
        let portfolio = self
            .portfolio
            .as_mut()
            .ok_or(TradeError::PortfolioNotInitialized)?;

        // Quote lookup comes first: an unknown symbol fails before the
        // portfolio is touched.
        let quote = quote_provider.get_latest_quote(symbol).await?;
        let cost = quantity * quote.price;

        let available = portfolio
            .cash_asset()
            .map(|cash| cash.quantity)
            .ok_or(TradeError::MissingCashAsset)?;
        if available < cost {
            return Err(Error::Trade(TradeError::InsufficientFunds {
                needed: cost,
                available,
            }));
        }

        let position_index = portfolio
            .assets
            .iter()
            .position(|a| a.symbol == symbol && a.kind == AssetKind::Stock);
        let now = Utc::now();

        let asset = match position_index {
            Some(index) => {
                debit_cash(portfolio, cost, now)?;
                let existing = &mut portfolio.assets[index];
                existing.quantity += quantity;
                existing.last_price = Some(quote.price);
                existing.updated_at = now;
                existing.clone()
            }
            None => {
                // The id fetch can fail, so it runs before the debit.
                let id = sequence.next_id().await?;
                let name = quote.name.clone().unwrap_or_else(|| symbol.to_string());
                debit_cash(portfolio, cost, now)?;
                let position =
                    Asset::new_position(id, name, AssetKind::Stock, symbol, quantity, quote.price);
                portfolio.assets.push(position.clone());
                position
            }
        };

        debug!(
            "Bought {} {} at {} for {}",
            quantity, symbol, quote.price, cost
        );
        Ok(asset)
    }

    /// Sell `quantity` of the non-cash `(symbol, kind)` holding at `price`
    /// per unit.
    ///
    /// All checks run before any mutation. Proceeds are credited to the
    /// cash asset; a position sold down to exactly zero is removed from
    /// the portfolio. Returns the asset's state after the sale.
    pub fn sell(
        &mut self,
        symbol: &str,
        kind: AssetKind,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Asset> {
        if quantity <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "sell quantity must be positive, got {}",
                quantity
            ))));
        }
        if price <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "sell price must be positive, got {}",
                price
            ))));
        }

        let portfolio = self
            .portfolio
            .as_mut()
            .ok_or(TradeError::PortfolioNotInitialized)?;

        let index = portfolio
            .assets
            .iter()
            .position(|a| a.symbol == symbol && a.kind == kind && !a.is_cash())
            .ok_or_else(|| TradeError::AssetNotFound {
                symbol: symbol.to_string(),
                kind,
            })?;

        let available = portfolio.assets[index].quantity;
        if available < quantity {
            return Err(Error::Trade(TradeError::InsufficientQuantity {
                symbol: symbol.to_string(),
                available,
                requested: quantity,
            }));
        }
        // Crediting into a missing cash asset would be impossible; fail
        // before the position is touched.
        if portfolio.cash_asset().is_none() {
            return Err(Error::Trade(TradeError::MissingCashAsset));
        }

        let now = Utc::now();
        let proceeds = quantity * price;

        let asset = &mut portfolio.assets[index];
        asset.quantity -= quantity;
        asset.last_price = Some(price);
        asset.updated_at = now;
        let sold = asset.clone();

        credit_cash(portfolio, proceeds, now)?;

        if sold.quantity.is_zero() {
            portfolio.assets.remove(index);
        }

        debug!("Sold {} {} at {} for {}", quantity, symbol, price, proceeds);
        Ok(sold)
    }

    /// Total portfolio value, derived from the asset list alone.
    pub fn calculate_value(&self) -> Result<Decimal> {
        let portfolio = self
            .portfolio
            .as_ref()
            .ok_or(TradeError::PortfolioNotInitialized)?;
        Ok(portfolio.total_value())
    }

    /// Persist the full current portfolio through the repository.
    ///
    /// Store failures propagate unchanged.
    pub async fn save(&self) -> Result<()> {
        let portfolio = self
            .portfolio
            .as_ref()
            .ok_or(TradeError::PortfolioNotInitialized)?;
        self.repository.save(portfolio).await?;
        info!("Portfolio {} saved", portfolio.owner_id);
        Ok(())
    }

    /// Load the stored portfolio for `owner_id` and wholesale-replace the
    /// in-memory one.
    ///
    /// The loaded portfolio is validated first; an invalid stored record
    /// never becomes the engine's state.
    pub async fn load(&mut self, owner_id: &str) -> Result<()> {
        let portfolio = self.repository.load(owner_id).await?;
        portfolio.validate()?;
        info!(
            "Portfolio {} loaded with {} assets",
            owner_id,
            portfolio.assets.len()
        );
        self.portfolio = Some(portfolio);
        Ok(())
    }
}

fn debit_cash(portfolio: &mut Portfolio, amount: Decimal, now: DateTime<Utc>) -> Result<()> {
    let cash = portfolio
        .cash_asset_mut()
        .ok_or(TradeError::MissingCashAsset)?;
    cash.quantity -= amount;
    cash.updated_at = now;
    Ok(())
}

fn credit_cash(portfolio: &mut Portfolio, amount: Decimal, now: DateTime<Utc>) -> Result<()> {
    let cash = portfolio
        .cash_asset_mut()
        .ok_or(TradeError::MissingCashAsset)?;
    cash.quantity += amount;
    cash.updated_at = now;
    Ok(())
}
