//! Checkout command.
//!
//! Assembles an order from the current cart and the form arguments,
//! submits it to the configured order service, and clears the cart when
//! the service accepts it. A rejected submission leaves the cart exactly
//! as it was.
//!
//! # Environment Variables
//!
//! - `SO_ORDER_API_URL` - Base URL of the order service (required)

use sleep_outside_cart::{
    CheckoutProcess, CustomerInfo, OrderApiClient, build_order, order_totals,
};

use super::{CliError, Session};
use crate::CheckoutArgs;

/// Assemble and submit an order.
pub async fn submit(args: CheckoutArgs) -> Result<(), CliError> {
    let mut session = Session::open()?;

    if session.cart.is_empty() {
        tracing::warn!("Cart is empty; nothing to check out");
        return Ok(());
    }

    let base_url = session.config.order_api_url()?.clone();
    let customer = CustomerInfo {
        first_name: args.fname,
        last_name: args.lname,
        street: args.street,
        city: args.city,
        state: args.state,
        zip: args.zip,
        card_number: args.card_number,
        expiration: args.expiration,
        security_code: args.code,
    };

    let totals = order_totals(&session.cart);
    let order = build_order(customer, &session.cart, &totals);

    let client = OrderApiClient::new(base_url);
    let process = CheckoutProcess::new();
    let confirmation = process.submit(&client, &order).await?;

    // Success owns the post-submission cart lifecycle: empty it.
    session.cart.clear(&mut session.store)?;

    match confirmation.order_id {
        Some(order_id) => tracing::info!("Order {order_id} placed; cart cleared"),
        None => tracing::info!("Order placed; cart cleared"),
    }
    Ok(())
}
