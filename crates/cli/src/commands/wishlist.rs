//! Wishlist commands.

use cratify_core::ProductId;
use cratify_storefront::config::StorefrontConfig;
use cratify_storefront::error::{AppError, Result};
use cratify_storefront::stores::WishlistStore;

use super::StoreContext;

fn open_wishlist(ctx: &StoreContext) -> WishlistStore {
    WishlistStore::new(ctx.storage.clone(), ctx.notifier.clone())
}

/// Save a product for later.
///
/// # Errors
///
/// Returns an error if stores cannot be opened or the product id is
/// not in the catalog.
pub fn add(config: &StorefrontConfig, product_id: &str) -> Result<()> {
    let ctx = StoreContext::open(config)?;
    let id = ProductId::new(product_id);
    let product = ctx
        .catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let mut wishlist = open_wishlist(&ctx);
    wishlist.add_to_wishlist(product);
    ctx.flush_notices();
    Ok(())
}

/// Remove a product from the wishlist.
///
/// # Errors
///
/// Returns an error if stores cannot be opened.
pub fn remove(config: &StorefrontConfig, product_id: &str) -> Result<()> {
    let ctx = StoreContext::open(config)?;
    let mut wishlist = open_wishlist(&ctx);
    wishlist.remove_from_wishlist(&ProductId::new(product_id));
    ctx.flush_notices();
    Ok(())
}

/// Show saved products in insertion order.
///
/// # Errors
///
/// Returns an error if stores cannot be opened.
pub fn show(config: &StorefrontConfig) -> Result<()> {
    let ctx = StoreContext::open(config)?;
    let wishlist = open_wishlist(&ctx);

    if wishlist.is_empty() {
        println!("Your wishlist is empty");
        return Ok(());
    }

    println!("{} saved item(s)", wishlist.total_items());
    for product in wishlist.entries() {
        println!(
            "  {:>3}  {:<40} {:>8}  by {}",
            product.id,
            product.name,
            product.price.display(),
            product.artisan.name
        );
    }
    Ok(())
}

/// Empty the wishlist.
///
/// # Errors
///
/// Returns an error if stores cannot be opened.
pub fn clear(config: &StorefrontConfig) -> Result<()> {
    let ctx = StoreContext::open(config)?;
    let mut wishlist = open_wishlist(&ctx);
    wishlist.clear_wishlist();
    ctx.flush_notices();
    Ok(())
}
