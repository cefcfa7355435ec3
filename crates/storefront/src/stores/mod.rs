//! Client-local commerce state containers.
//!
//! The cart and wishlist stores are independent: they share no state and
//! each owns its own persisted snapshot. Mutations are synchronous and
//! apply fully before the snapshot write; a failed write is logged and
//! the in-memory state remains the source of truth.

pub mod cart;
pub mod wishlist;

pub use cart::{CART_SNAPSHOT_KEY, CartLine, CartStore};
pub use wishlist::{WISHLIST_SNAPSHOT_KEY, WishlistStore};
