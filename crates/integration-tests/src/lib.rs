//! Integration tests for the Sleep Outside cart engine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sleep-outside-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Ledger mutations and cart/wishlist transfers
//! - `checkout_flow` - Order assembly and submission against a mock service
//! - `persistence` - Store round trips and legacy-data interop
//!
//! This crate holds the shared helpers: an item factory and
//! [`MockOrderService`], an [`OrderService`] implementation that records
//! every submitted order and can be told to reject.

use std::cell::RefCell;

use rust_decimal::Decimal;

use sleep_outside_cart::{Order, OrderApiError, OrderConfirmation, OrderService};
use sleep_outside_core::LineItem;

/// Build a valid line item for tests.
///
/// `price_cents` is the per-unit price in cents.
#[must_use]
pub fn line_item(id: &str, price_cents: i64, quantity: u32) -> LineItem {
    LineItem::new(
        id,
        format!("Item {id}"),
        Decimal::new(price_cents, 2),
        quantity,
    )
    .expect("valid test item")
    .with_image(format!("images/{id}.jpg"))
}

/// Order service double: records submissions, optionally rejects them or
/// never answers at all.
#[derive(Default)]
pub struct MockOrderService {
    /// Every order handed to [`OrderService::submit_order`], in order.
    pub submitted: RefCell<Vec<Order>>,
    /// When set, submissions fail with this HTTP status.
    pub reject_with_status: Option<u16>,
    /// When set, submissions suspend forever after recording the order.
    pub stall: bool,
}

impl MockOrderService {
    /// A service that accepts every order.
    #[must_use]
    pub fn accepting() -> Self {
        Self::default()
    }

    /// A service that rejects every order with `status`.
    #[must_use]
    pub fn rejecting(status: u16) -> Self {
        Self {
            reject_with_status: Some(status),
            ..Self::default()
        }
    }

    /// A service that records every order but never responds.
    #[must_use]
    pub fn stalled() -> Self {
        Self {
            stall: true,
            ..Self::default()
        }
    }
}

impl OrderService for MockOrderService {
    async fn submit_order(&self, order: &Order) -> Result<OrderConfirmation, OrderApiError> {
        self.submitted.borrow_mut().push(order.clone());
        if self.stall {
            std::future::pending::<()>().await;
        }
        if let Some(status) = self.reject_with_status {
            return Err(OrderApiError::Api {
                status,
                message: "rejected".to_string(),
            });
        }
        Ok(OrderConfirmation {
            order_id: Some(1000),
            message: Some("Order placed".to_string()),
        })
    }
}
