//! Export the embedded catalog to the data directory.
//!
//! The exported file is what `shop`/`cart`/`wishlist` load on later
//! runs, so it can be edited to try out a different catalog.

use tracing::info;

use cratify_storefront::catalog;
use cratify_storefront::config::StorefrontConfig;
use cratify_storefront::error::Result;

/// Write the seed catalog to `<data_dir>/catalog.json`.
///
/// # Errors
///
/// Returns an error if the file cannot be written or reads back
/// malformed.
pub fn run(config: &StorefrontConfig, force: bool) -> Result<()> {
    let path = config.seeded_catalog_path();

    if path.exists() && !force {
        info!(path = %path.display(), "Catalog already exists, use --force to overwrite");
        return Ok(());
    }

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(cratify_storefront::storage::StorageError::from)?;
    }
    std::fs::write(&path, catalog::seed_json())
        .map_err(cratify_storefront::storage::StorageError::from)?;

    // Parse it back so a broken write is caught immediately
    let written = catalog::Catalog::load(&path)?;
    info!(path = %path.display(), products = written.len(), "Seeded catalog");

    Ok(())
}
