//! File-backed implementation of the portfolio repository trait.

use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;

use paperfolio_core::errors::{Error, Result, StoreError};
use paperfolio_core::portfolio::{Portfolio, PortfolioRepositoryTrait};

use crate::files;

/// Stores each portfolio as `portfolio-<owner_id>.json` under a data
/// directory.
///
/// The repository never caches: every `load` reads the document from disk
/// and every `save` rewrites it in full.
pub struct FilePortfolioRepository {
    data_dir: PathBuf,
}

impl FilePortfolioRepository {
    /// Creates a repository rooted at `data_dir`.
    ///
    /// The directory does not need to exist yet; it is created on the
    /// first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        FilePortfolioRepository {
            data_dir: data_dir.into(),
        }
    }

    fn portfolio_path(&self, owner_id: &str) -> PathBuf {
        self.data_dir.join(format!("portfolio-{}.json", owner_id))
    }
}

#[async_trait]
impl PortfolioRepositoryTrait for FilePortfolioRepository {
    async fn load(&self, owner_id: &str) -> Result<Portfolio> {
        let path = self.portfolio_path(owner_id);
        if !files::exists(&path) {
            return Err(Error::Store(StoreError::NotFound(format!(
                "no portfolio stored for owner {}",
                owner_id
            ))));
        }

        let portfolio: Portfolio = files::read_json(&path)?;
        debug!("Loaded portfolio for {} from {}", owner_id, path.display());
        Ok(portfolio)
    }

    async fn save(&self, portfolio: &Portfolio) -> Result<()> {
        let path = self.portfolio_path(&portfolio.owner_id);
        files::write_json(&path, portfolio)?;
        debug!(
            "Saved portfolio for {} to {}",
            portfolio.owner_id,
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use paperfolio_core::assets::{Asset, AssetKind};
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    fn sample_portfolio(owner_id: &str) -> Portfolio {
        let mut portfolio = Portfolio::new(owner_id, "My Portfolio", "USD");
        portfolio
            .assets
            .push(Asset::new_cash("1.1".to_string(), "USD", dec!(1000)));
        portfolio.assets.push(Asset::new_position(
            "1.2".to_string(),
            "Microsoft Corporation".to_string(),
            AssetKind::Stock,
            "MSFT",
            dec!(5),
            dec!(100),
        ));
        portfolio
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let repository = FilePortfolioRepository::new(dir.path());
        let portfolio = sample_portfolio("user123");

        repository.save(&portfolio).await.unwrap();
        let loaded = repository.load("user123").await.unwrap();

        assert_eq!(loaded, portfolio);
    }

    #[tokio::test]
    async fn test_save_writes_one_document_per_owner() {
        let dir = tempdir().unwrap();
        let repository = FilePortfolioRepository::new(dir.path());

        repository.save(&sample_portfolio("user123")).await.unwrap();
        repository.save(&sample_portfolio("user456")).await.unwrap();

        assert!(dir.path().join("portfolio-user123.json").exists());
        assert!(dir.path().join("portfolio-user456.json").exists());
    }

    #[tokio::test]
    async fn test_save_overwrites_the_previous_document() {
        let dir = tempdir().unwrap();
        let repository = FilePortfolioRepository::new(dir.path());
        let mut portfolio = sample_portfolio("user123");

        repository.save(&portfolio).await.unwrap();
        portfolio.assets.remove(1);
        repository.save(&portfolio).await.unwrap();

        let loaded = repository.load("user123").await.unwrap();
        assert_eq!(loaded.assets.len(), 1);
    }

    #[tokio::test]
    async fn test_load_missing_owner_reports_not_found() {
        let dir = tempdir().unwrap();
        let repository = FilePortfolioRepository::new(dir.path());

        let err = repository.load("unknown").await.unwrap_err();

        match err {
            Error::Store(StoreError::NotFound(msg)) => {
                assert!(msg.contains("unknown"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_load_corrupt_document_reports_parse_failure() {
        let dir = tempdir().unwrap();
        let repository = FilePortfolioRepository::new(dir.path());
        std::fs::write(dir.path().join("portfolio-user123.json"), "{ broken").unwrap();

        let err = repository.load("user123").await.unwrap_err();

        assert!(matches!(err, Error::Store(StoreError::ParseFailed(_))));
    }

    #[tokio::test]
    async fn test_saved_document_uses_the_wire_field_names() {
        let dir = tempdir().unwrap();
        let repository = FilePortfolioRepository::new(dir.path());

        repository.save(&sample_portfolio("user123")).await.unwrap();

        let raw = std::fs::read_to_string(dir.path().join("portfolio-user123.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["ownerId"], "user123");
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["assets"][1]["type"], "stocks");
        assert!(json.get("date").is_some());
    }
}
