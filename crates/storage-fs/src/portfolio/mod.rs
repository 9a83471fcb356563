//! File storage implementation for portfolios.

mod repository;

pub use repository::FilePortfolioRepository;

// Re-export trait from core for convenience
pub use paperfolio_core::portfolio::PortfolioRepositoryTrait;
