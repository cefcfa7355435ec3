//! Cart commands: mutations, totals, and checkout.
//!
//! Each invocation rehydrates the cart from the data directory, applies
//! one mutation, and lets the store write its snapshot back - the same
//! load/mutate/persist cycle the web client runs per interaction.

use cratify_core::ProductId;
use cratify_storefront::checkout::{CheckoutForm, place_order};
use cratify_storefront::config::StorefrontConfig;
use cratify_storefront::error::{AppError, Result};
use cratify_storefront::stores::CartStore;

use super::StoreContext;

fn open_cart(ctx: &StoreContext) -> CartStore {
    CartStore::new(ctx.storage.clone(), ctx.notifier.clone())
}

/// Add a product from the catalog to the cart.
///
/// # Errors
///
/// Returns an error if stores cannot be opened or the product id is
/// not in the catalog.
pub fn add(config: &StorefrontConfig, product_id: &str, quantity: u32) -> Result<()> {
    let ctx = StoreContext::open(config)?;
    let id = ProductId::new(product_id);
    let product = ctx
        .catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    // Stock checks are advisory, surfaced here the way the product page
    // surfaces them; the store itself stays permissive.
    if quantity > product.stock {
        tracing::warn!(
            stock = product.stock,
            requested = quantity,
            "Requested quantity exceeds listed stock"
        );
    }

    let mut cart = open_cart(&ctx);
    cart.add_to_cart(product, quantity);
    ctx.flush_notices();
    print_totals(&cart);
    Ok(())
}

/// Set the quantity of an existing cart line.
///
/// # Errors
///
/// Returns an error if stores cannot be opened.
pub fn update(config: &StorefrontConfig, product_id: &str, quantity: u32) -> Result<()> {
    let ctx = StoreContext::open(config)?;
    let mut cart = open_cart(&ctx);
    cart.update_quantity(&ProductId::new(product_id), quantity);
    ctx.flush_notices();
    print_totals(&cart);
    Ok(())
}

/// Remove a product from the cart.
///
/// # Errors
///
/// Returns an error if stores cannot be opened.
pub fn remove(config: &StorefrontConfig, product_id: &str) -> Result<()> {
    let ctx = StoreContext::open(config)?;
    let mut cart = open_cart(&ctx);
    cart.remove_from_cart(&ProductId::new(product_id));
    ctx.flush_notices();
    print_totals(&cart);
    Ok(())
}

/// Show the cart lines and totals.
///
/// # Errors
///
/// Returns an error if stores cannot be opened.
pub fn show(config: &StorefrontConfig) -> Result<()> {
    let ctx = StoreContext::open(config)?;
    let cart = open_cart(&ctx);

    if cart.is_empty() {
        println!("Your cart is empty");
        return Ok(());
    }

    for line in cart.lines() {
        println!(
            "  {:>3}  {:<40} {:>8} x{:<3} = {:>9}",
            line.product_id,
            line.name,
            line.price.display(),
            line.quantity,
            line.line_total().display()
        );
    }
    print_totals(&cart);
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if stores cannot be opened.
pub fn clear(config: &StorefrontConfig) -> Result<()> {
    let ctx = StoreContext::open(config)?;
    let mut cart = open_cart(&ctx);
    cart.clear_cart();
    ctx.flush_notices();
    println!("Cart cleared");
    Ok(())
}

/// Validate the shipping form and place a simulated order.
///
/// # Errors
///
/// Returns an error if stores cannot be opened, a required field is
/// blank, or the cart is empty.
pub fn checkout(config: &StorefrontConfig, form: &CheckoutForm) -> Result<()> {
    let ctx = StoreContext::open(config)?;
    let mut cart = open_cart(&ctx);

    let confirmation = place_order(&mut cart, form)?;
    ctx.flush_notices();

    println!("Thank you for your order!");
    println!("Order ID: {}", confirmation.order_id);
    println!("Total:    {}", confirmation.total.display());
    println!("A confirmation email is on its way to {}", confirmation.email);
    Ok(())
}

fn print_totals(cart: &CartStore) {
    println!(
        "Items: {}  Total: {}",
        cart.total_items(),
        cart.total_price().display()
    );
}
