//! Shopping cart store.
//!
//! Holds the cart lines for the active session and derives totals.
//! The contract is deliberately permissive: ordinary misuse (removing an
//! unknown id, updating a line that does not exist) is a silent no-op,
//! never an error. Stock limits are advisory and enforced by callers
//! before [`CartStore::add_to_cart`], not here.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use cratify_core::{ArtisanId, Price, ProductId};

use crate::catalog::Product;
use crate::notify::Notifier;
use crate::storage::SnapshotStore;

/// Snapshot key for the cart, matching the original client-local store.
pub const CART_SNAPSHOT_KEY: &str = "cart";

/// One product's quantity entry within the cart.
///
/// Product fields are denormalized at add time, so a line keeps the
/// name, price, and artisan the shopper saw even if the catalog is
/// reloaded later. Invariants: at most one line per product id, and
/// `quantity >= 1` always.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub artisan_id: ArtisanId,
    pub artisan_name: String,
    pub category: String,
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            artisan_id: product.artisan.id.clone(),
            artisan_name: product.artisan.name.clone(),
            category: product.category.clone(),
            quantity,
        }
    }

    /// Unit price times quantity, unrounded.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.line_total(self.quantity)
    }
}

/// Shopping cart state container.
///
/// Rehydrates from its snapshot on construction and rewrites the
/// snapshot synchronously after every mutation.
pub struct CartStore {
    lines: Vec<CartLine>,
    storage: Arc<dyn SnapshotStore>,
    notifier: Arc<dyn Notifier>,
}

impl CartStore {
    /// Create a cart store, rehydrating any persisted snapshot.
    ///
    /// A missing or malformed snapshot degrades to an empty cart; the
    /// parse failure is logged, never propagated.
    #[must_use]
    pub fn new(storage: Arc<dyn SnapshotStore>, notifier: Arc<dyn Notifier>) -> Self {
        let lines = match storage.get(CART_SNAPSHOT_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(lines) => lines,
                Err(e) => {
                    tracing::warn!(error = %e, "Malformed cart snapshot, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read cart snapshot, starting empty");
                Vec::new()
            }
        };
        Self {
            lines,
            storage,
            notifier,
        }
    }

    /// Add `quantity` of `product` to the cart.
    ///
    /// If a line for the product already exists its quantity is
    /// incremented, not replaced. A zero quantity or an id-less product
    /// is invalid input and ignored. No stock check happens here.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            tracing::warn!(product_id = %product.id, "Ignoring add to cart with zero quantity");
            return;
        }
        if product.id.is_empty() {
            tracing::warn!(product = %product.name, "Ignoring add to cart for product without id");
            return;
        }

        if let Some(line) = self.line_mut(&product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine::from_product(product, quantity));
        }
        self.persist();
        self.notifier.success("Added to cart");
    }

    /// Set the quantity of an existing line.
    ///
    /// Callers are responsible for clamping to available stock; the
    /// store only floors at 1 to keep the line invariant (removal is an
    /// explicit separate action). Unknown ids are a silent no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity.max(1);
            self.persist();
        }
    }

    /// Remove the line for `product_id`, if present.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) {
        let before = self.lines.len();
        self.lines.retain(|line| &line.product_id != product_id);
        if self.lines.len() != before {
            self.persist();
        }
    }

    /// Empty the cart. Used after successful checkout.
    pub fn clear_cart(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of `price * quantity` across all lines, unrounded.
    ///
    /// Rounding happens at display time only, via [`Price::display`].
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| &line.product_id == product_id)
    }

    fn persist(&self) {
        match serde_json::to_string(&self.lines) {
            Ok(raw) => {
                if let Err(e) = self.storage.set(CART_SNAPSHOT_KEY, &raw) {
                    tracing::warn!(error = %e, "Failed to persist cart snapshot");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize cart snapshot");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::notify::{BufferedNotifier, Notice};
    use crate::storage::MemoryStore;

    fn cart() -> (CartStore, Arc<MemoryStore>, Arc<BufferedNotifier>) {
        let storage = Arc::new(MemoryStore::new());
        let notifier = Arc::new(BufferedNotifier::new());
        let store = CartStore::new(storage.clone(), notifier.clone());
        (store, storage, notifier)
    }

    fn seed_product(id: &str) -> Product {
        Catalog::seed().get(&ProductId::new(id)).unwrap().clone()
    }

    #[test]
    fn test_add_twice_merges_into_one_line() {
        let (mut cart, _, _) = cart();
        let mug = seed_product("1");

        cart.add_to_cart(&mug, 1);
        cart.add_to_cart(&mug, 2);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_add_snapshots_product_fields() {
        let (mut cart, _, notifier) = cart();
        let mug = seed_product("1");

        cart.add_to_cart(&mug, 1);

        let line = &cart.lines()[0];
        assert_eq!(line.product_id, mug.id);
        assert_eq!(line.name, mug.name);
        assert_eq!(line.price, mug.price);
        assert_eq!(line.artisan_id, mug.artisan.id);
        assert_eq!(line.category, mug.category);
        assert_eq!(
            notifier.take(),
            vec![Notice::Success("Added to cart".to_string())]
        );
    }

    #[test]
    fn test_zero_quantity_and_empty_id_are_ignored() {
        let (mut cart, _, notifier) = cart();
        let mug = seed_product("1");

        cart.add_to_cart(&mug, 0);

        let mut bad = mug;
        bad.id = ProductId::new("");
        cart.add_to_cart(&bad, 1);

        assert!(cart.is_empty());
        assert!(notifier.take().is_empty());
    }

    #[test]
    fn test_update_quantity_sets_exact_value() {
        let (mut cart, _, _) = cart();
        cart.add_to_cart(&seed_product("1"), 1);

        cart.update_quantity(&ProductId::new("1"), 5);
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_update_quantity_floors_at_one() {
        let (mut cart, _, _) = cart();
        cart.add_to_cart(&seed_product("1"), 3);

        cart.update_quantity(&ProductId::new("1"), 0);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_a_no_op() {
        let (mut cart, _, _) = cart();
        cart.add_to_cart(&seed_product("1"), 2);

        cart.update_quantity(&ProductId::new("99"), 7);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_remove_and_remove_unknown() {
        let (mut cart, _, _) = cart();
        cart.add_to_cart(&seed_product("1"), 1);
        cart.add_to_cart(&seed_product("3"), 1);

        cart.remove_from_cart(&ProductId::new("1"));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].product_id, ProductId::new("3"));

        // Unknown id: no error, no change
        cart.remove_from_cart(&ProductId::new("no-such-id"));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_totals_track_any_mutation_sequence() {
        let (mut cart, _, _) = cart();
        let mug = seed_product("1"); // $28.00
        let earrings = seed_product("3"); // $42.00

        cart.add_to_cart(&mug, 2);
        cart.add_to_cart(&earrings, 1);
        assert_eq!(cart.total_price(), Price::from_cents(9800));

        cart.update_quantity(&mug.id, 1);
        assert_eq!(cart.total_price(), Price::from_cents(7000));

        cart.remove_from_cart(&earrings.id);
        assert_eq!(cart.total_price(), Price::from_cents(2800));
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_three_items_at_ten_dollars() {
        let (mut cart, _, _) = cart();
        let mut product = seed_product("1");
        product.price = Price::from_cents(1000);

        cart.add_to_cart(&product, 3);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price().display(), "$30.00");

        cart.clear_cart();
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Price::ZERO);
    }

    #[test]
    fn test_rehydrates_from_snapshot() {
        let storage = Arc::new(MemoryStore::new());
        let notifier = Arc::new(BufferedNotifier::new());

        let mut first = CartStore::new(storage.clone(), notifier.clone());
        first.add_to_cart(&seed_product("2"), 2);
        drop(first);

        let second = CartStore::new(storage, notifier);
        assert_eq!(second.total_items(), 2);
        assert_eq!(second.lines()[0].product_id, ProductId::new("2"));
    }

    #[test]
    fn test_malformed_snapshot_degrades_to_empty() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(CART_SNAPSHOT_KEY, "not json").unwrap();

        let cart = CartStore::new(storage, Arc::new(BufferedNotifier::new()));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_snapshot_written_after_every_mutation() {
        let (mut cart, storage, _) = cart();
        cart.add_to_cart(&seed_product("1"), 1);

        let raw = storage.get(CART_SNAPSHOT_KEY).unwrap().unwrap();
        let lines: Vec<CartLine> = serde_json::from_str(&raw).unwrap();
        assert_eq!(lines, cart.lines());

        cart.clear_cart();
        let raw = storage.get(CART_SNAPSHOT_KEY).unwrap().unwrap();
        assert_eq!(raw, "[]");
    }
}
