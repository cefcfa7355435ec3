//! Cratify Storefront library.
//!
//! This crate provides the commerce core of the Cratify artisan
//! marketplace as a library, allowing it to be tested and reused:
//!
//! - [`catalog`] - Immutable product catalog and the pure filter/sort
//!   pipeline used by listing surfaces
//! - [`stores`] - Cart and wishlist state containers with snapshot
//!   persistence after every mutation
//! - [`storage`] - Snapshot storage port (in-memory and file-backed)
//! - [`notify`] - Toast-style notification surface
//! - [`checkout`] - Checkout validation and simulated order placement
//!
//! # Ownership model
//!
//! The catalog is read-only for the lifetime of a session and is never
//! mutated by cart or wishlist operations. Each store owns its own
//! persisted snapshot; in-memory state is the source of truth and
//! snapshot writes are fire-and-forget.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod notify;
pub mod storage;
pub mod stores;

pub use catalog::{Catalog, Product};
pub use error::{AppError, Result};
pub use stores::{CartStore, WishlistStore};
