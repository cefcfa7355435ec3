//! CLI command implementations.

pub mod cart;
pub mod seed;
pub mod shop;
pub mod wishlist;

use std::sync::Arc;

use cratify_storefront::catalog::Catalog;
use cratify_storefront::config::StorefrontConfig;
use cratify_storefront::error::Result;
use cratify_storefront::notify::{BufferedNotifier, Notice};
use cratify_storefront::storage::FileStore;

/// Shared handles for commands operating on persisted store state.
pub struct StoreContext {
    pub catalog: Catalog,
    pub storage: Arc<FileStore>,
    pub notifier: Arc<BufferedNotifier>,
}

impl StoreContext {
    /// Open file-backed storage and load the active catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created or the
    /// catalog file cannot be loaded.
    pub fn open(config: &StorefrontConfig) -> Result<Self> {
        Ok(Self {
            catalog: load_catalog(config)?,
            storage: Arc::new(FileStore::new(&config.data_dir)?),
            notifier: Arc::new(BufferedNotifier::new()),
        })
    }

    /// Print buffered notices the way a UI would toast them.
    pub fn flush_notices(&self) {
        for notice in self.notifier.take() {
            match notice {
                Notice::Success(message) => println!("✔ {message}"),
                Notice::Error(message) => println!("✘ {message}"),
            }
        }
    }
}

/// Load the active catalog: explicit override first, then the seeded
/// file in the data directory, then the embedded seed catalog.
///
/// # Errors
///
/// Returns an error if a catalog file exists but cannot be loaded.
pub fn load_catalog(config: &StorefrontConfig) -> Result<Catalog> {
    if let Some(path) = &config.catalog_path {
        return Ok(Catalog::load(path)?);
    }
    let seeded = config.seeded_catalog_path();
    if seeded.exists() {
        return Ok(Catalog::load(&seeded)?);
    }
    tracing::debug!("No catalog file found, using embedded seed catalog");
    Ok(Catalog::seed())
}
