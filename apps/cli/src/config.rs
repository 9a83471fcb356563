//! Environment-driven configuration for the CLI.

use std::env;

use paperfolio_core::constants::DEFAULT_CURRENCY;

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_OWNER: &str = "local";

/// Runtime configuration, resolved once at startup.
pub struct Config {
    /// Directory holding the portfolio and seed documents.
    pub data_dir: String,
    /// Base currency for newly created portfolios.
    pub base_currency: String,
    /// Owner id used when no `--owner` flag is given.
    pub owner: String,
}

impl Config {
    /// Reads configuration from the environment, falling back to defaults
    /// suitable for a local demo. `.env` files are honoured when present.
    pub fn from_env() -> Self {
        Config {
            data_dir: env::var("PAPERFOLIO_DATA_DIR")
                .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
            base_currency: env::var("PAPERFOLIO_BASE_CURRENCY")
                .unwrap_or_else(|_| DEFAULT_CURRENCY.to_string()),
            owner: env::var("PAPERFOLIO_OWNER").unwrap_or_else(|_| DEFAULT_OWNER.to_string()),
        }
    }
}
