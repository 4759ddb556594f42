//! Pricing calculator.
//!
//! Pure derivation of [`OrderTotals`] from a cart snapshot. Shipping is
//! tiered by distinct line count - the number of product rows, not the
//! summed unit quantity - with a flat base fee for the first row and a
//! per-additional-row increment. An empty cart costs nothing: no tax, no
//! shipping.

use rust_decimal::Decimal;

use sleep_outside_core::OrderTotals;

use crate::cart::CartLedger;

/// Sales tax rate applied to the subtotal (6%).
pub const TAX_RATE: Decimal = Decimal::from_parts(6, 0, 0, false, 2);

/// Flat shipping fee for the first distinct line ($10).
pub const BASE_SHIPPING: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Shipping increment per additional distinct line ($2).
pub const PER_EXTRA_ITEM: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Compute totals for the current cart snapshot.
///
/// Tax and grand total are rounded to cents. Call this after every cart
/// mutation and on load; totals are never cached.
#[must_use]
pub fn order_totals(cart: &CartLedger) -> OrderTotals {
    if cart.is_empty() {
        return OrderTotals::empty();
    }

    let subtotal = cart.subtotal();
    let tax = (subtotal * TAX_RATE).round_dp(2);
    let extra_lines = Decimal::from(cart.line_count().saturating_sub(1));
    let shipping = BASE_SHIPPING + extra_lines * PER_EXTRA_ITEM;
    let grand_total = (subtotal + tax + shipping).round_dp(2);

    OrderTotals {
        subtotal,
        tax,
        shipping,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use sleep_outside_core::LineItem;

    fn cart_with(items: &[(&str, i64, u32)]) -> CartLedger {
        let mut store = MemoryStore::new();
        let mut cart = CartLedger::empty("so-cart");
        for &(id, price, quantity) in items {
            let item =
                LineItem::new(id, format!("Item {id}"), Decimal::new(price, 0), quantity).unwrap();
            cart.add_or_merge(&mut store, item).unwrap();
        }
        cart
    }

    #[test]
    fn test_two_line_cart_scenario() {
        // A: $20 x1, B: $30 x2 -> subtotal 80, 2 lines, shipping 10 + 1*2,
        // tax 4.80, total 96.80.
        let cart = cart_with(&[("A", 20, 1), ("B", 30, 2)]);
        let totals = order_totals(&cart);

        assert_eq!(totals.subtotal, Decimal::new(80, 0));
        assert_eq!(totals.tax, Decimal::new(480, 2));
        assert_eq!(totals.shipping, Decimal::new(12, 0));
        assert_eq!(totals.grand_total, Decimal::new(9680, 2));
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let cart = cart_with(&[]);
        assert_eq!(order_totals(&cart), OrderTotals::empty());
    }

    #[test]
    fn test_shipping_scales_with_distinct_lines_not_units() {
        // One line with many units still ships at the base fee.
        let single = cart_with(&[("A", 20, 7)]);
        assert_eq!(order_totals(&single).shipping, BASE_SHIPPING);

        // Three distinct lines add two increments.
        let three = cart_with(&[("A", 20, 1), ("B", 30, 1), ("C", 40, 1)]);
        assert_eq!(
            order_totals(&three).shipping,
            BASE_SHIPPING + Decimal::from(2u32) * PER_EXTRA_ITEM
        );
    }

    #[test]
    fn test_tax_rounds_to_cents() {
        // $10.99 * 0.06 = 0.6594 -> 0.66
        let mut store = MemoryStore::new();
        let mut cart = CartLedger::empty("so-cart");
        let item = LineItem::new("A", "Item A", Decimal::new(1099, 2), 1).unwrap();
        cart.add_or_merge(&mut store, item).unwrap();

        let totals = order_totals(&cart);
        assert_eq!(totals.tax, Decimal::new(66, 2));
        assert_eq!(totals.grand_total, Decimal::new(2165, 2));
    }
}
