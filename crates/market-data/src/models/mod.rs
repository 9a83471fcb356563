//! Market data models
//!
//! This module contains the data types exchanged with quote providers:
//! - `quote` - Quote data structures (Quote)

mod quote;

pub use quote::Quote;
