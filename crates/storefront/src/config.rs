//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults make a fresh checkout work
//! with no setup.
//!
//! - `CRATIFY_DATA_DIR` - Directory for snapshot files (default:
//!   `.cratify`)
//! - `CRATIFY_CATALOG` - Path to a catalog JSON file. When unset, a
//!   catalog file inside the data directory is used if present,
//!   otherwise the embedded seed catalog.

use std::path::PathBuf;

/// Default data directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = ".cratify";

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the `cart`/`wishlist` snapshot files and the
    /// seeded catalog.
    pub data_dir: PathBuf,
    /// Explicit catalog file override.
    pub catalog_path: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Load configuration from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            data_dir: PathBuf::from(get_env_or_default("CRATIFY_DATA_DIR", DEFAULT_DATA_DIR)),
            catalog_path: get_optional_env("CRATIFY_CATALOG").map(PathBuf::from),
        }
    }

    /// The catalog file the seed command writes and loaders prefer.
    #[must_use]
    pub fn seeded_catalog_path(&self) -> PathBuf {
        self.data_dir.join("catalog.json")
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: None,
        }
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
