//! Immutable product catalog.
//!
//! The catalog is supplied at load time and is read-only for the duration
//! of a session: no cart or wishlist operation ever mutates it. A
//! [`Catalog`] is a cheap `Arc` handle and can be cloned freely.
//!
//! Product data lives in JSON (camelCase fields, decimal prices as
//! strings). A seed catalog is embedded in the crate so binaries and
//! tests work without any files on disk; [`Catalog::load`] reads a
//! catalog file exported with [`seed_json`].

pub mod filter;

use std::path::Path;
use std::sync::{Arc, LazyLock};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cratify_core::{ArtisanId, Price, ProductId};

pub use filter::{FilterParams, SortOption, filter_and_sort};

/// Embedded seed catalog, distilled from the marketplace's launch data.
const SEED_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

static SEED_PRODUCTS: LazyLock<Arc<Vec<Product>>> = LazyLock::new(|| {
    let products: Vec<Product> =
        serde_json::from_str(SEED_CATALOG_JSON).expect("embedded seed catalog is valid JSON");
    Arc::new(products)
});

/// The artisan who makes a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artisan {
    pub id: ArtisanId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A catalog product record.
///
/// Field names follow the catalog JSON (camelCase). `stock` is advisory
/// data for callers; the cart store never enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub description: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    pub artisan: Artisan,
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub new_arrival: bool,
    #[serde(default)]
    pub bestseller: bool,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_reviews: Option<u32>,
}

/// Error loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable, shareable product collection.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Catalog {
    /// Create a catalog from an in-memory product list.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// The embedded seed catalog.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            products: Arc::clone(&SEED_PRODUCTS),
        }
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as
    /// a product array.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&raw)?;
        tracing::info!(count = products.len(), path = %path.display(), "Loaded catalog");
        Ok(Self::new(products))
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Category names for filter menus: the `All` sentinel followed by
    /// each distinct category in first-seen catalog order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![filter::ALL_CATEGORIES.to_string()];
        for product in self.products() {
            if !categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&product.category))
            {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// Price slider bounds: floor of the cheapest price and ceiling of
    /// the most expensive. `(0, 0)` for an empty catalog.
    #[must_use]
    pub fn price_bounds(&self) -> (Decimal, Decimal) {
        let mut prices = self.products.iter().map(|p| p.price.amount());
        let Some(first) = prices.next() else {
            return (Decimal::ZERO, Decimal::ZERO);
        };
        let (min, max) = prices.fold((first, first), |(min, max), price| {
            (min.min(price), max.max(price))
        });
        (min.floor(), max.ceil())
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// The embedded seed catalog as pretty-printed JSON, for exporting a
/// catalog file that [`Catalog::load`] accepts.
#[must_use]
pub fn seed_json() -> &'static str {
    SEED_CATALOG_JSON
}
