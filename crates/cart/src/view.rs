//! Read-only view models for a rendering layer.
//!
//! Pure conversions from ledger snapshots to display data: formatted price
//! strings, the pluralized item-count label, and the checkout totals
//! summary. The engine never touches presentation markup; whatever renders
//! these is a downstream consumer.

use sleep_outside_core::{LineItem, OrderTotals, format_price};

use crate::cart::CartLedger;
use crate::wishlist::WishlistLedger;

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    /// Color label, `"N/A"` when the product has none.
    pub color: String,
    pub quantity: u32,
    /// Formatted per-unit price.
    pub unit_price: String,
    /// Formatted extended price for the row.
    pub line_price: String,
    pub image: String,
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.as_str().to_owned(),
            name: item.name.clone(),
            color: item
                .color_label
                .clone()
                .unwrap_or_else(|| "N/A".to_owned()),
            quantity: item.quantity,
            unit_price: format_price(item.unit_price),
            line_price: format_price(item.line_total()),
            image: item.image_ref.clone(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Formatted subtotal.
    pub subtotal: String,
    /// Total unit count across all rows.
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_string(),
            item_count: 0,
        }
    }

    /// Pluralized badge label: `"1 item"`, otherwise `"N items"`.
    #[must_use]
    pub fn count_label(&self) -> String {
        if self.item_count == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", self.item_count)
        }
    }
}

impl From<&CartLedger> for CartView {
    fn from(cart: &CartLedger) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: format_price(cart.subtotal()),
            item_count: cart.item_count(),
        }
    }
}

impl From<&WishlistLedger> for CartView {
    fn from(wishlist: &WishlistLedger) -> Self {
        Self {
            items: wishlist.items().iter().map(CartItemView::from).collect(),
            subtotal: format_price(
                wishlist.items().iter().map(LineItem::line_total).sum(),
            ),
            item_count: u32::try_from(wishlist.items().len()).unwrap_or(u32::MAX),
        }
    }
}

/// Order summary display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsView {
    pub subtotal: String,
    pub tax: String,
    pub shipping: String,
    pub grand_total: String,
}

impl From<&OrderTotals> for TotalsView {
    fn from(totals: &OrderTotals) -> Self {
        Self {
            subtotal: format_price(totals.subtotal),
            tax: format_price(totals.tax),
            shipping: format_price(totals.shipping),
            grand_total: format_price(totals.grand_total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use rust_decimal::Decimal;

    fn cart() -> CartLedger {
        let mut store = MemoryStore::new();
        let mut cart = CartLedger::empty("so-cart");
        let item = LineItem::new("880RR", "Ajax Tent", Decimal::new(19999, 2), 2)
            .unwrap()
            .with_color("Pumpkin")
            .with_image("images/tents/880RR.jpg");
        cart.add_or_merge(&mut store, item).unwrap();
        cart
    }

    #[test]
    fn test_cart_view_formats_prices() {
        let view = CartView::from(&cart());
        assert_eq!(view.subtotal, "$399.98");
        assert_eq!(view.items[0].unit_price, "$199.99");
        assert_eq!(view.items[0].line_price, "$399.98");
        assert_eq!(view.items[0].color, "Pumpkin");
    }

    #[test]
    fn test_count_label_pluralization() {
        let mut view = CartView::empty();
        assert_eq!(view.count_label(), "0 items");
        view.item_count = 1;
        assert_eq!(view.count_label(), "1 item");
        view.item_count = 2;
        assert_eq!(view.count_label(), "2 items");
    }

    #[test]
    fn test_missing_color_falls_back_to_na() {
        let item = LineItem::new("A", "Pad", Decimal::new(10, 0), 1).unwrap();
        assert_eq!(CartItemView::from(&item).color, "N/A");
    }

    #[test]
    fn test_totals_view_formats_all_fields() {
        let totals = OrderTotals {
            subtotal: Decimal::new(80, 0),
            tax: Decimal::new(480, 2),
            shipping: Decimal::new(12, 0),
            grand_total: Decimal::new(9680, 2),
        };
        let view = TotalsView::from(&totals);
        assert_eq!(view.subtotal, "$80.00");
        assert_eq!(view.tax, "$4.80");
        assert_eq!(view.shipping, "$12.00");
        assert_eq!(view.grand_total, "$96.80");
    }
}
