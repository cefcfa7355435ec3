//! Cratify CLI - Command-line storefront client.
//!
//! # Usage
//!
//! ```bash
//! # Write the seed catalog into the data directory
//! cratify seed
//!
//! # Browse the catalog
//! cratify shop --category Jewelry --sort price-low
//! cratify shop --query ceramic --min 20 --max 50
//!
//! # Manage the cart (state persists in CRATIFY_DATA_DIR)
//! cratify cart add 1 --quantity 2
//! cratify cart show
//! cratify cart checkout --first-name Ada --last-name Lovelace \
//!     --email ada@example.com --address "1 Analytical Way" \
//!     --city London --state LDN --zip-code 12345
//!
//! # Manage the wishlist
//! cratify wishlist add 3
//! cratify wishlist show
//! ```
//!
//! # Commands
//!
//! - `seed` - Export the embedded catalog to the data directory
//! - `shop` - Filter and sort the product listing
//! - `cart` - Cart operations and checkout
//! - `wishlist` - Wishlist operations

#![cfg_attr(not(test), forbid(unsafe_code))]
// User-facing browse surface: command output goes to stdout by design
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use cratify_storefront::catalog::SortOption;
use cratify_storefront::config::StorefrontConfig;

mod commands;

#[derive(Parser)]
#[command(name = "cratify")]
#[command(author, version, about = "Cratify storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the embedded catalog to the data directory
    Seed {
        /// Overwrite an existing catalog file
        #[arg(long)]
        force: bool,
    },
    /// Filter and sort the product listing
    Shop {
        /// Category to filter by (default: All)
        #[arg(short, long)]
        category: Option<String>,

        /// Free-text search over name, description, artisan, and tags
        #[arg(short, long)]
        query: Option<String>,

        /// Minimum price, inclusive
        #[arg(long)]
        min: Option<Decimal>,

        /// Maximum price, inclusive
        #[arg(long)]
        max: Option<Decimal>,

        /// Sort order (`featured`, `price-low`, `price-high`, `newest`,
        /// `bestselling`)
        #[arg(short, long, default_value = "featured")]
        sort: SortOption,
    },
    /// Cart operations
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Wishlist operations
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id from the catalog
        product_id: String,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a cart line
    Update {
        product_id: String,
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove { product_id: String },
    /// Show cart lines and totals
    Show,
    /// Empty the cart
    Clear,
    /// Place a (simulated) order and empty the cart
    Checkout {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: String,
        #[arg(long)]
        zip_code: String,
    },
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Save a product for later
    Add { product_id: String },
    /// Remove a product from the wishlist
    Remove { product_id: String },
    /// Show saved products
    Show,
    /// Empty the wishlist
    Clear,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = StorefrontConfig::from_env();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, &config);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { force } => commands::seed::run(config, force)?,
        Commands::Shop {
            category,
            query,
            min,
            max,
            sort,
        } => commands::shop::run(config, category, query, min, max, sort)?,
        Commands::Cart { action } => match action {
            CartAction::Add {
                product_id,
                quantity,
            } => commands::cart::add(config, &product_id, quantity)?,
            CartAction::Update {
                product_id,
                quantity,
            } => commands::cart::update(config, &product_id, quantity)?,
            CartAction::Remove { product_id } => commands::cart::remove(config, &product_id)?,
            CartAction::Show => commands::cart::show(config)?,
            CartAction::Clear => commands::cart::clear(config)?,
            CartAction::Checkout {
                first_name,
                last_name,
                email,
                address,
                city,
                state,
                zip_code,
            } => {
                let form = cratify_storefront::checkout::CheckoutForm {
                    first_name,
                    last_name,
                    email,
                    address,
                    city,
                    state,
                    zip_code,
                };
                commands::cart::checkout(config, &form)?;
            }
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Add { product_id } => commands::wishlist::add(config, &product_id)?,
            WishlistAction::Remove { product_id } => {
                commands::wishlist::remove(config, &product_id)?;
            }
            WishlistAction::Show => commands::wishlist::show(config)?,
            WishlistAction::Clear => commands::wishlist::clear(config)?,
        },
    }
    Ok(())
}
