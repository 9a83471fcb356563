//! File-backed implementation of the seed store trait.

use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;

use paperfolio_core::errors::Result;
use paperfolio_core::ids::SeedStoreTrait;

use crate::files;

const SEED_FILE_NAME: &str = "seed.json";

/// Persists the last-used sequence seed as a bare JSON number in
/// `seed.json` under the data directory.
pub struct FileSeedStore {
    path: PathBuf,
}

impl FileSeedStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        FileSeedStore {
            path: data_dir.into().join(SEED_FILE_NAME),
        }
    }
}

#[async_trait]
impl SeedStoreTrait for FileSeedStore {
    async fn exists(&self) -> Result<bool> {
        Ok(files::exists(&self.path))
    }

    async fn read(&self) -> Result<u64> {
        let seed = files::read_json(&self.path)?;
        Ok(seed)
    }

    async fn write(&self, seed: u64) -> Result<()> {
        files::write_json(&self.path, &seed)?;
        debug!("Persisted seed {} to {}", seed, self.path.display());
        Ok(())
    }
}
