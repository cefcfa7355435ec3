//! Cratify Core - Shared types library.
//!
//! This crate provides common types used across all Cratify components:
//! - `storefront` - Catalog, cart/wishlist stores, and checkout
//! - `cli` - Command-line storefront client
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no catalog data. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
