//! Saved-for-later wishlist store.
//!
//! A deduplicated, insertion-ordered set of product snapshots. Unlike
//! cart lines, entries carry no quantity and are never mutated after
//! insertion; insertion order is the only display order.

use std::sync::Arc;

use cratify_core::ProductId;

use crate::catalog::Product;
use crate::notify::Notifier;
use crate::storage::SnapshotStore;

/// Snapshot key for the wishlist, matching the original client-local
/// store.
pub const WISHLIST_SNAPSHOT_KEY: &str = "wishlist";

/// Wishlist state container.
///
/// Rehydrates from its snapshot on construction and rewrites the
/// snapshot synchronously after every mutation.
pub struct WishlistStore {
    entries: Vec<Product>,
    storage: Arc<dyn SnapshotStore>,
    notifier: Arc<dyn Notifier>,
}

impl WishlistStore {
    /// Create a wishlist store, rehydrating any persisted snapshot.
    ///
    /// A missing or malformed snapshot degrades to an empty wishlist;
    /// the parse failure is logged, never propagated.
    #[must_use]
    pub fn new(storage: Arc<dyn SnapshotStore>, notifier: Arc<dyn Notifier>) -> Self {
        let entries = match storage.get(WISHLIST_SNAPSHOT_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(error = %e, "Malformed wishlist snapshot, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read wishlist snapshot, starting empty");
                Vec::new()
            }
        };
        Self {
            entries,
            storage,
            notifier,
        }
    }

    /// Save a product for later.
    ///
    /// Idempotent with respect to membership: adding a product that is
    /// already saved leaves the stored entry untouched and surfaces an
    /// "already in wishlist" notice instead of an error.
    pub fn add_to_wishlist(&mut self, product: &Product) {
        if self.is_in_wishlist(&product.id) {
            self.notifier.error("Item already in wishlist");
            return;
        }
        self.entries.push(product.clone());
        self.persist();
        self.notifier.success("Added to wishlist");
    }

    /// Remove the entry for `product_id`, if present.
    pub fn remove_from_wishlist(&mut self, product_id: &ProductId) {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.id != product_id);
        if self.entries.len() != before {
            self.persist();
            self.notifier.success("Removed from wishlist");
        }
    }

    /// Whether `product_id` is saved. Used by UIs to toggle icon state.
    #[must_use]
    pub fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.entries.iter().any(|entry| &entry.id == product_id)
    }

    /// Empty the wishlist.
    pub fn clear_wishlist(&mut self) {
        self.entries.clear();
        self.persist();
        self.notifier.success("Wishlist cleared");
    }

    /// Saved products in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    /// Number of saved products.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.entries.len()
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) {
        match serde_json::to_string(&self.entries) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(WISHLIST_SNAPSHOT_KEY, &raw) {
                    tracing::warn!(error = %e, "Failed to persist wishlist snapshot");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize wishlist snapshot");
            }
        }
    }
}
