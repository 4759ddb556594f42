//! Sleep Outside Core - Shared types library.
//!
//! This crate provides common types used across all Sleep Outside components:
//! - `cart` - The cart/wishlist state engine
//! - `cli` - Command-line tools for inspecting and mutating the cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, line items, order totals, persisted records,
//!   and money formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
