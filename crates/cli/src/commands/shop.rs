//! Product listing with filters, the shop page in terminal form.

use rust_decimal::Decimal;

use cratify_storefront::catalog::{FilterParams, Product, SortOption, filter_and_sort};
use cratify_storefront::config::StorefrontConfig;
use cratify_storefront::error::Result;

use super::load_catalog;

/// Run the catalog filter and print the resulting listing.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub fn run(
    config: &StorefrontConfig,
    category: Option<String>,
    query: Option<String>,
    min: Option<Decimal>,
    max: Option<Decimal>,
    sort: SortOption,
) -> Result<()> {
    let catalog = load_catalog(config)?;
    let (floor, ceiling) = catalog.price_bounds();

    let defaults = FilterParams::default();
    let params = FilterParams {
        category: category.unwrap_or(defaults.category),
        search_query: query.unwrap_or_default(),
        price_range: (min.unwrap_or(floor), max.unwrap_or(ceiling)),
        sort,
    };

    let results = filter_and_sort(catalog.products(), &params);

    println!(
        "{} of {} products (category: {}, sort: {})",
        results.len(),
        catalog.len(),
        params.category,
        params.sort
    );
    for product in results {
        print_product_row(product);
    }

    if !catalog.categories().is_empty() {
        println!();
        println!("Categories: {}", catalog.categories().join(", "));
    }

    Ok(())
}

fn print_product_row(product: &Product) {
    let mut flags = Vec::new();
    if product.featured {
        flags.push("featured");
    }
    if product.new_arrival {
        flags.push("new");
    }
    if product.bestseller {
        flags.push("bestseller");
    }
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(", "))
    };

    println!(
        "  {:>3}  {:<40} {:>8}  {:<12} by {} (stock: {}){}",
        product.id,
        product.name,
        product.price.display(),
        product.category,
        product.artisan.name,
        product.stock,
        flags
    );
}
