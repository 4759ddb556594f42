//! Derived order totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals derived from a cart snapshot.
///
/// Never stored; recomputed from the cart on every mutation and on load so
/// it can never go stale across a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Sum of extended line prices.
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    /// Sales tax on the subtotal, rounded to cents.
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    /// Tiered shipping fee; zero for an empty cart.
    #[serde(with = "rust_decimal::serde::float")]
    pub shipping: Decimal,
    /// `subtotal + tax + shipping`.
    #[serde(with = "rust_decimal::serde::float")]
    pub grand_total: Decimal,
}

impl OrderTotals {
    /// Totals for an empty cart: everything zero, including shipping.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            tax: Decimal::ZERO,
            shipping: Decimal::ZERO,
            grand_total: Decimal::ZERO,
        }
    }
}

impl Default for OrderTotals {
    fn default() -> Self {
        Self::empty()
    }
}
