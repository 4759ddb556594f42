//! Cart ledger commands.
//!
//! # Usage
//!
//! ```bash
//! so-cli cart list
//! so-cli cart add -i 880RR -n "Ajax Tent" -p 199.99 -q 1 --color Pumpkin
//! so-cli cart qty -i 880RR -d -1
//! so-cli cart save -i 880RR
//! so-cli cart clear
//! ```

use rust_decimal::Decimal;

use sleep_outside_cart::{CartView, MoveOutcome, TotalsView, order_totals};
use sleep_outside_core::{LineItem, ProductId};

use super::{CliError, Session};

/// Show the cart contents and totals.
pub fn list() -> Result<(), CliError> {
    let session = Session::open()?;
    let view = CartView::from(&session.cart);

    if view.items.is_empty() {
        tracing::info!("Cart is empty");
        return Ok(());
    }

    for item in &view.items {
        tracing::info!(
            "  {} x{} {} ({}) - {}",
            item.id,
            item.quantity,
            item.name,
            item.color,
            item.line_price
        );
    }
    tracing::info!("{}, subtotal {}", view.count_label(), view.subtotal);
    Ok(())
}

/// Show the computed order totals.
pub fn totals() -> Result<(), CliError> {
    let session = Session::open()?;
    let view = TotalsView::from(&order_totals(&session.cart));

    tracing::info!("Subtotal: {}", view.subtotal);
    tracing::info!("Tax:      {}", view.tax);
    tracing::info!("Shipping: {}", view.shipping);
    tracing::info!("Total:    {}", view.grand_total);
    Ok(())
}

/// Add a product to the cart, merging by id.
pub fn add(
    id: &str,
    name: &str,
    price: Decimal,
    quantity: u32,
    color: Option<String>,
    image: Option<String>,
) -> Result<(), CliError> {
    let mut session = Session::open()?;

    let mut item = LineItem::new(id, name, price, quantity.max(1))?;
    item.color_label = color;
    item.image_ref = image.unwrap_or_default();

    session.cart.add_or_merge(&mut session.store, item)?;

    let view = CartView::from(&session.cart);
    tracing::info!("Added {id}; cart now holds {}", view.count_label());
    Ok(())
}

/// Remove a row by product ID.
pub fn remove(id: &str) -> Result<(), CliError> {
    let mut session = Session::open()?;
    let id = ProductId::new(id);
    session.cart.remove(&mut session.store, &id)?;
    tracing::info!("Removed {id}");
    Ok(())
}

/// Adjust a row's quantity by a delta.
pub fn update_quantity(id: &str, delta: i64) -> Result<(), CliError> {
    let mut session = Session::open()?;
    let id = ProductId::new(id);
    session.cart.update_quantity(&mut session.store, &id, delta)?;

    if session.cart.contains(&id) {
        tracing::info!("Updated {id}");
    } else {
        tracing::info!("Removed {id}");
    }
    Ok(())
}

/// Set a row's quantity directly.
pub fn set_quantity(id: &str, quantity: i64) -> Result<(), CliError> {
    let mut session = Session::open()?;
    let id = ProductId::new(id);
    session.cart.set_quantity(&mut session.store, &id, quantity)?;
    tracing::info!("Set {id} quantity to {quantity}");
    Ok(())
}

/// Move a cart row to the wishlist.
pub fn save_for_later(id: &str) -> Result<(), CliError> {
    let mut session = Session::open()?;
    let id = ProductId::new(id);
    let outcome =
        session
            .cart
            .move_to_wishlist(&mut session.store, &mut session.wishlist, &id)?;

    match outcome {
        MoveOutcome::Moved => tracing::info!("Saved {id} for later"),
        MoveOutcome::AlreadyPresent => tracing::warn!("{id} is already in the wishlist"),
        MoveOutcome::NotFound => tracing::warn!("{id} is not in the cart"),
    }
    Ok(())
}

/// Empty the cart.
pub fn clear() -> Result<(), CliError> {
    let mut session = Session::open()?;
    session.cart.clear(&mut session.store)?;
    tracing::info!("Cart cleared");
    Ok(())
}
