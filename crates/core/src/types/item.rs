//! The canonical line item representation.
//!
//! A [`LineItem`] is one product row in a cart or wishlist: per-unit price
//! plus an integer quantity. The persisted boundary form lives in
//! [`crate::types::record`]; this type is what the engine operates on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::ProductId;

/// Errors constructing a [`LineItem`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineItemError {
    /// Unit price must not be negative.
    #[error("negative unit price: {0}")]
    NegativePrice(Decimal),

    /// Quantity must be at least 1.
    #[error("zero quantity")]
    ZeroQuantity,
}

/// One product entry with a per-unit price and quantity.
///
/// Identity is the `id`: a ledger holds at most one `LineItem` per id, and
/// duplicate adds merge by summing `quantity`. The price is always the
/// per-unit price; extended totals are derived via [`LineItem::line_total`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Per-unit price, never negative.
    pub unit_price: Decimal,
    /// Number of units, at least 1 while the item exists.
    pub quantity: u32,
    /// Selected color, if the product has one.
    pub color_label: Option<String>,
    /// Primary product image reference.
    pub image_ref: String,
}

impl LineItem {
    /// Create a validated line item.
    ///
    /// # Errors
    ///
    /// Returns an error if `unit_price` is negative or `quantity` is zero.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) -> Result<Self, LineItemError> {
        if unit_price.is_sign_negative() && !unit_price.is_zero() {
            return Err(LineItemError::NegativePrice(unit_price));
        }
        if quantity == 0 {
            return Err(LineItemError::ZeroQuantity);
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity,
            color_label: None,
            image_ref: String::new(),
        })
    }

    /// Set the color label.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color_label = Some(color.into());
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image_ref = image.into();
        self
    }

    /// Extended price for this row (`unit_price` × `quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}
