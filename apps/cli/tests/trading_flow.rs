//! End-to-end flow over the public crate APIs: the simulated quote
//! provider, the trading engine, and the file-backed stores working
//! together against a real data directory.

use std::sync::Arc;

use rust_decimal_macros::dec;
use tempfile::TempDir;

use paperfolio_core::assets::AssetKind;
use paperfolio_core::ids::{extract_seed, SeedStoreTrait, SequenceService, SequenceServiceTrait};
use paperfolio_core::portfolio::TradingService;
use paperfolio_market_data::SimulatedQuoteProvider;
use paperfolio_storage_fs::{FilePortfolioRepository, FileSeedStore};

fn engine_for(dir: &TempDir) -> TradingService {
    let provider =
        Arc::new(SimulatedQuoteProvider::new().with_listing([("MSFT", "Microsoft Corporation")]));
    let repository = Arc::new(FilePortfolioRepository::new(dir.path()));
    let seed_store = Arc::new(FileSeedStore::new(dir.path()));
    let sequence = Arc::new(SequenceService::new(seed_store));
    TradingService::new(provider, repository, sequence)
}

#[tokio::test]
async fn test_full_trading_session_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();

    // Session one: fund, buy, persist. The starting balance covers the
    // most expensive quote the simulated provider can produce.
    let mut engine = engine_for(&dir);
    engine.build_for("user123", dec!(10000)).await.unwrap();
    let bought = engine.buy("MSFT", dec!(5)).await.unwrap();
    engine.save().await.unwrap();

    assert!(dir.path().join("portfolio-user123.json").exists());
    let price = bought.last_price.unwrap();
    assert_eq!(bought.name, "Microsoft Corporation");

    // Session two: reload from disk and check nothing was lost.
    let mut engine = engine_for(&dir);
    engine.load("user123").await.unwrap();

    let portfolio = engine.portfolio().unwrap();
    assert_eq!(portfolio.assets.len(), 2);
    let cash = portfolio.cash_asset().unwrap();
    assert_eq!(cash.quantity, dec!(10000) - dec!(5) * price);
    assert_eq!(engine.calculate_value().unwrap(), dec!(10000));

    // Sell the whole position and persist again.
    engine
        .sell("MSFT", AssetKind::Stock, dec!(5), dec!(120))
        .unwrap();
    engine.save().await.unwrap();

    let mut engine = engine_for(&dir);
    engine.load("user123").await.unwrap();
    let portfolio = engine.portfolio().unwrap();
    assert_eq!(portfolio.assets.len(), 1);
    let expected_cash = dec!(10000) - dec!(5) * price + dec!(600);
    assert_eq!(portfolio.cash_asset().unwrap().quantity, expected_cash);
    assert_eq!(engine.calculate_value().unwrap(), expected_cash);
}

#[tokio::test]
async fn test_seed_advances_across_service_generations() {
    let dir = TempDir::new().unwrap();
    let seed_store: Arc<FileSeedStore> = Arc::new(FileSeedStore::new(dir.path()));

    let first = SequenceService::new(Arc::clone(&seed_store) as Arc<dyn SeedStoreTrait>);
    assert_eq!(first.next_id().await.unwrap(), "1.1");
    assert_eq!(first.next_id().await.unwrap(), "1.2");
    assert_eq!(first.last().await, 2);

    // A new service generation reads the persisted seed and moves past it.
    let second = SequenceService::new(Arc::clone(&seed_store) as Arc<dyn SeedStoreTrait>);
    let id = second.next_id().await.unwrap();
    assert_eq!(id, "2.1");
    assert_eq!(extract_seed(&id), Some(2));

    assert_eq!(seed_store.read().await.unwrap(), 2);
}

#[tokio::test]
async fn test_unknown_symbol_fails_without_touching_the_portfolio() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_for(&dir);
    engine.build_for("user123", dec!(1000)).await.unwrap();

    let err = engine.buy("AAPL", dec!(1)).await.unwrap_err();

    assert_eq!(err.to_string(), "Symbol AAPL not found");
    assert_eq!(engine.calculate_value().unwrap(), dec!(1000));
    assert_eq!(engine.portfolio().unwrap().assets.len(), 1);
}
