//! # Catalog Loader
//!
//! Produces the catalog the storefront shows once it leaves the loading
//! state.
//!
//! ```text
//! load_catalog(config)
//!      │
//!      ├── sleep(config.load_delay())        (default 1000 ms)
//!      │
//!      ├── HANDPHONE_CATALOG_PATH set? ──yes──► read file ──► Catalog::from_json
//!      │
//!      └── no ──────────────────────────────► Catalog::sample()
//! ```

use std::path::PathBuf;

use handphone_core::{Catalog, CoreError};
use thiserror::Error;
use tracing::{debug, info};

use crate::state::ConfigState;

/// Errors while loading the catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a valid catalog.
    #[error(transparent)]
    Catalog(#[from] CoreError),
}

/// Waits the configured delay, then loads the catalog.
pub async fn load_catalog(config: &ConfigState) -> Result<Catalog, LoadError> {
    let delay = config.load_delay();
    if !delay.is_zero() {
        debug!(delay_ms = config.load_delay_ms, "Waiting before catalog load");
        tokio::time::sleep(delay).await;
    }

    let catalog = match &config.catalog_path {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?;
            let catalog = Catalog::from_json(&json)?;
            info!(path = %path.display(), products = catalog.len(), "Catalog file loaded");
            catalog
        }
        None => Catalog::sample(),
    };

    Ok(catalog)
}
