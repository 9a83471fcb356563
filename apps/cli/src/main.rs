//! Paperfolio CLI - paper trading against a simulated market.
//!
//! Thin glue over the library crates: wires the simulated quote provider,
//! the file-backed stores, and the trading engine, then maps each
//! subcommand onto one engine operation. All domain rules live in
//! `paperfolio-core`.

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use paperfolio_core::assets::AssetKind;
use paperfolio_core::constants::DISPLAY_DECIMAL_PRECISION;
use paperfolio_core::ids::SequenceService;
use paperfolio_core::portfolio::{Portfolio, TradingService};
use paperfolio_market_data::SimulatedQuoteProvider;
use paperfolio_storage_fs::{FilePortfolioRepository, FileSeedStore};

use config::Config;

#[derive(Parser)]
#[command(name = "paperfolio")]
#[command(version)]
#[command(about = "Paper trading portfolio simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory for the JSON records (overrides PAPERFOLIO_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Portfolio owner id (overrides PAPERFOLIO_OWNER)
    #[arg(long, global = true)]
    owner: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a portfolio funded with a starting cash balance
    Init {
        /// Starting cash balance in the base currency
        #[arg(long, default_value = "1000")]
        cash: Decimal,
    },

    /// Buy a quantity of a symbol at the current quoted price
    Buy { symbol: String, quantity: Decimal },

    /// Sell a quantity of a held asset at the given price
    Sell {
        symbol: String,
        quantity: Decimal,
        price: Decimal,

        /// Asset type of the holding (stocks, crypto or cash)
        #[arg(long, default_value = "stocks", value_parser = parse_kind)]
        kind: AssetKind,
    },

    /// Print the current total portfolio value
    Value,

    /// Print the portfolio owner, currency and assets
    Show,
}

fn parse_kind(value: &str) -> Result<AssetKind, String> {
    match value.to_ascii_lowercase().as_str() {
        "cash" => Ok(AssetKind::Cash),
        "stocks" => Ok(AssetKind::Stock),
        "crypto" => Ok(AssetKind::Crypto),
        other => Err(format!(
            "unknown asset type '{}' (expected cash, stocks or crypto)",
            other
        )),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env();
    run(cli, config).await
}

async fn run(cli: Cli, config: Config) -> Result<()> {
    let data_dir = cli
        .data_dir
        .unwrap_or_else(|| PathBuf::from(&config.data_dir));
    let owner = cli.owner.unwrap_or_else(|| config.owner.clone());
    tracing::debug!("Using data directory {}", data_dir.display());

    let provider = Arc::new(SimulatedQuoteProvider::new());
    let repository = Arc::new(FilePortfolioRepository::new(&data_dir));
    let seed_store = Arc::new(FileSeedStore::new(&data_dir));
    let sequence = Arc::new(SequenceService::new(seed_store));
    let mut engine = TradingService::new(provider, repository, sequence)
        .with_base_currency(&config.base_currency);

    match cli.command {
        Commands::Init { cash } => {
            engine.build_for(&owner, cash).await?;
            engine.save().await?;
            println!(
                "Created portfolio for {} with {} {}",
                owner,
                cash.round_dp(DISPLAY_DECIMAL_PRECISION),
                config.base_currency
            );
        }
        Commands::Buy { symbol, quantity } => {
            engine.load(&owner).await?;
            let asset = engine.buy(&symbol, quantity).await?;
            engine.save().await?;
            let price = asset.last_price.unwrap_or_default();
            println!(
                "Bought {} {} at {} ({} total). Cash balance: {}",
                quantity,
                asset.symbol,
                price.round_dp(DISPLAY_DECIMAL_PRECISION),
                (quantity * price).round_dp(DISPLAY_DECIMAL_PRECISION),
                cash_balance(&engine)
            );
        }
        Commands::Sell {
            symbol,
            quantity,
            price,
            kind,
        } => {
            engine.load(&owner).await?;
            let asset = engine.sell(&symbol, kind, quantity, price)?;
            engine.save().await?;
            println!(
                "Sold {} {} at {} ({} total). Cash balance: {}",
                quantity,
                asset.symbol,
                price.round_dp(DISPLAY_DECIMAL_PRECISION),
                (quantity * price).round_dp(DISPLAY_DECIMAL_PRECISION),
                cash_balance(&engine)
            );
        }
        Commands::Value => {
            engine.load(&owner).await?;
            let value = engine.calculate_value()?;
            let currency = engine
                .portfolio()
                .map(|p| p.currency.as_str())
                .unwrap_or(config.base_currency.as_str());
            println!(
                "Total value: {} {}",
                value.round_dp(DISPLAY_DECIMAL_PRECISION),
                currency
            );
        }
        Commands::Show => {
            engine.load(&owner).await?;
            if let Some(portfolio) = engine.portfolio() {
                print_portfolio(portfolio);
            }
        }
    }

    Ok(())
}

fn cash_balance(engine: &TradingService) -> Decimal {
    engine
        .portfolio()
        .and_then(Portfolio::cash_asset)
        .map(|asset| asset.quantity.round_dp(DISPLAY_DECIMAL_PRECISION))
        .unwrap_or_default()
}

fn print_portfolio(portfolio: &Portfolio) {
    println!(
        "{} ({}) - {}",
        portfolio.name, portfolio.owner_id, portfolio.currency
    );
    for asset in &portfolio.assets {
        let price = asset
            .last_price
            .map(|p| format!(" @ {}", p.round_dp(DISPLAY_DECIMAL_PRECISION)))
            .unwrap_or_default();
        println!(
            "  {:<6} {:<8} {:<28} {}{}",
            asset.id, asset.kind, asset.name, asset.quantity, price
        );
    }
    println!(
        "Total value: {} {}",
        portfolio.total_value().round_dp(DISPLAY_DECIMAL_PRECISION),
        portfolio.currency
    );
}
