//! Core types for the Sleep Outside cart engine.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod item;
pub mod price;
pub mod record;
pub mod totals;

pub use id::*;
pub use item::{LineItem, LineItemError};
pub use price::format_price;
pub use record::{ItemColor, ItemImages, ItemRecord};
pub use totals::OrderTotals;
