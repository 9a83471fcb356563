//! Portfolio module - aggregate root, trading engine, and persistence contract.

mod portfolio_model;
mod trading_service;
mod trading_traits;


// Re-export the public interface
pub use portfolio_model::Portfolio;
pub use trading_service::TradingService;
pub use trading_traits::PortfolioRepositoryTrait;
