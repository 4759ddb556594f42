//! Wishlist ledger commands.
//!
//! # Usage
//!
//! ```bash
//! so-cli wishlist list
//! so-cli wishlist move -i 880RR
//! so-cli wishlist remove -i 880RR
//! ```

use sleep_outside_cart::{CartView, MoveOutcome};
use sleep_outside_core::ProductId;

use super::{CliError, Session};

/// Show the wishlist contents.
pub fn list() -> Result<(), CliError> {
    let session = Session::open()?;
    let view = CartView::from(&session.wishlist);

    if view.items.is_empty() {
        tracing::info!("Wishlist is empty");
        return Ok(());
    }

    for item in &view.items {
        tracing::info!("  {} {} ({}) - {}", item.id, item.name, item.color, item.unit_price);
    }
    Ok(())
}

/// Remove an entry by product ID.
pub fn remove(id: &str) -> Result<(), CliError> {
    let mut session = Session::open()?;
    let id = ProductId::new(id);
    session.wishlist.remove(&mut session.store, &id)?;
    tracing::info!("Removed {id} from the wishlist");
    Ok(())
}

/// Move an entry back to the cart.
pub fn move_to_cart(id: &str) -> Result<(), CliError> {
    let mut session = Session::open()?;
    let id = ProductId::new(id);
    let outcome =
        session
            .wishlist
            .move_to_cart(&mut session.store, &mut session.cart, &id)?;

    match outcome {
        MoveOutcome::Moved => tracing::info!("Moved {id} to the cart"),
        MoveOutcome::AlreadyPresent | MoveOutcome::NotFound => {
            tracing::warn!("{id} is not in the wishlist");
        }
    }
    Ok(())
}
