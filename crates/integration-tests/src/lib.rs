//! Integration tests for Cratify.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p cratify-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart mutations and totals over file-backed snapshots
//! - `wishlist_flow` - Wishlist membership and persistence
//! - `catalog_filter` - Filter/sort pipeline against the seed catalog
//! - `checkout_flow` - Checkout validation and cart clearing
//!
//! The tests run in-process against the storefront library with
//! `FileStore` snapshots in a temp directory, exercising the same
//! load/mutate/persist cycle a client runs per interaction.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use cratify_storefront::notify::BufferedNotifier;
use cratify_storefront::storage::FileStore;

/// Shared fixture: file-backed storage in a fresh temp directory plus a
/// buffered notifier for asserting on the notice stream.
pub struct TestContext {
    pub storage: Arc<FileStore>,
    pub notifier: Arc<BufferedNotifier>,
    // Held so the directory outlives the storage handle
    _dir: tempfile::TempDir,
}

impl TestContext {
    /// Create a fresh context backed by a new temp directory.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory or storage cannot be created; tests
    /// cannot proceed without them.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(FileStore::new(dir.path()).unwrap());
        Self {
            storage,
            notifier: Arc::new(BufferedNotifier::new()),
            _dir: dir,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
