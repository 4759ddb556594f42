//! Checkout assembly.
//!
//! [`build_order`] packages the customer's form input, the computed totals,
//! and the cart's line items into a write-once [`Order`]; it never mutates
//! the cart. [`CheckoutProcess`] owns the submission lifecycle: it refuses
//! a second submission while one is in flight, surfaces rejection as a
//! distinct error with the cart untouched, and leaves clearing the cart
//! after success to the caller.

use std::cell::Cell;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use sleep_outside_core::{OrderTotals, ProductId};

use crate::cart::CartLedger;
use crate::order_api::{OrderApiError, OrderConfirmation, OrderService};

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A submission for this process is already awaiting its response.
    #[error("an order submission is already in flight")]
    SubmissionInFlight,

    /// The order service rejected the submission; the order is discarded
    /// and the cart left unchanged.
    #[error("order submission failed: {0}")]
    Submission(#[from] OrderApiError),
}

/// Checkout form fields, serialized with the field names the order service
/// expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    #[serde(rename = "fname")]
    pub first_name: String,
    #[serde(rename = "lname")]
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[serde(rename = "cardNumber")]
    pub card_number: String,
    pub expiration: String,
    #[serde(rename = "code")]
    pub security_code: String,
}

/// One cart row packaged for the order payload.
///
/// `price` is the per-unit price, not the extended line total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackagedItem {
    pub id: ProductId,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub name: String,
    pub quantity: u32,
}

/// A write-once order: submitted, then discarded by this engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(flatten)]
    pub customer: CustomerInfo,

    /// Submission timestamp, stamped when the order is built.
    #[serde(rename = "orderDate")]
    pub order_date: DateTime<Utc>,

    #[serde(rename = "orderTotal", with = "rust_decimal::serde::float")]
    pub order_total: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,

    #[serde(with = "rust_decimal::serde::float")]
    pub shipping: Decimal,

    pub items: Vec<PackagedItem>,
}

/// Assemble an order from form input, the cart snapshot, and its totals.
///
/// Stamps `order_date` with the current time. Does not mutate the cart:
/// clearing after a successful submission is the caller's responsibility.
#[must_use]
pub fn build_order(customer: CustomerInfo, cart: &CartLedger, totals: &OrderTotals) -> Order {
    let items = cart
        .items()
        .iter()
        .map(|item| PackagedItem {
            id: item.id.clone(),
            price: item.unit_price,
            name: item.name.clone(),
            quantity: item.quantity,
        })
        .collect();

    Order {
        customer,
        order_date: Utc::now(),
        order_total: totals.grand_total,
        tax: totals.tax,
        shipping: totals.shipping,
        items,
    }
}

/// Tracks whether an order submission is in flight.
///
/// The engine is single-threaded and event-driven; the one operation that
/// suspends is the order submission, and a caller must be able to tell that
/// one is pending so it can refuse a concurrent second submission of the
/// same cart snapshot.
#[derive(Debug, Default)]
pub struct CheckoutProcess {
    in_flight: Cell<bool>,
}

/// Clears the in-flight flag when dropped, whether the submission
/// settled or its future was cancelled mid-await.
struct InFlightGuard<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

impl CheckoutProcess {
    /// Create an idle checkout process.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            in_flight: Cell::new(false),
        }
    }

    /// Whether a submission is currently awaiting its response.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Submit `order` through `service`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::SubmissionInFlight`] if a previous
    /// submission has not settled yet, or [`CheckoutError::Submission`]
    /// when the service rejects the order. A rejected order is discarded;
    /// the remote side effect, if any occurred, cannot be rolled back here.
    /// Dropping the returned future before it settles releases the guard,
    /// so an abandoned submission never blocks the next one.
    pub async fn submit<S: OrderService>(
        &self,
        service: &S,
        order: &Order,
    ) -> Result<OrderConfirmation, CheckoutError> {
        if self.in_flight.replace(true) {
            return Err(CheckoutError::SubmissionInFlight);
        }
        let _guard = InFlightGuard {
            flag: &self.in_flight,
        };
        let result = service.submit_order(order).await;
        result.map_err(CheckoutError::Submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::order_totals;
    use crate::store::MemoryStore;
    use sleep_outside_core::LineItem;

    fn customer() -> CustomerInfo {
        CustomerInfo {
            first_name: "June".to_string(),
            last_name: "Rivers".to_string(),
            street: "123 Main".to_string(),
            city: "Rexburg".to_string(),
            state: "ID".to_string(),
            zip: "83440".to_string(),
            card_number: "1234123412341234".to_string(),
            expiration: "8/28".to_string(),
            security_code: "123".to_string(),
        }
    }

    fn sample_cart() -> CartLedger {
        let mut store = MemoryStore::new();
        let mut cart = CartLedger::empty("so-cart");
        cart.add_or_merge(
            &mut store,
            LineItem::new("A", "Tent", Decimal::new(20, 0), 1).unwrap(),
        )
        .unwrap();
        cart.add_or_merge(
            &mut store,
            LineItem::new("B", "Bag", Decimal::new(30, 0), 2).unwrap(),
        )
        .unwrap();
        cart
    }

    #[test]
    fn test_build_order_packages_unit_price_and_quantity() {
        let cart = sample_cart();
        let totals = order_totals(&cart);
        let order = build_order(customer(), &cart, &totals);

        assert_eq!(order.order_total, Decimal::new(9680, 2));
        assert_eq!(order.tax, Decimal::new(480, 2));
        assert_eq!(order.shipping, Decimal::new(12, 0));
        assert_eq!(
            order.items,
            vec![
                PackagedItem {
                    id: ProductId::new("A"),
                    price: Decimal::new(20, 0),
                    name: "Tent".to_string(),
                    quantity: 1,
                },
                PackagedItem {
                    id: ProductId::new("B"),
                    price: Decimal::new(30, 0),
                    name: "Bag".to_string(),
                    quantity: 2,
                },
            ]
        );
        // Building an order leaves the cart intact.
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_order_payload_field_names() {
        let cart = sample_cart();
        let order = build_order(customer(), &cart, &order_totals(&cart));
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["fname"], "June");
        assert_eq!(json["lname"], "Rivers");
        assert_eq!(json["cardNumber"], "1234123412341234");
        assert_eq!(json["code"], "123");
        assert_eq!(json["orderTotal"], 96.80);
        assert_eq!(json["items"][0]["price"], 20.0);
        assert_eq!(json["items"][0]["quantity"], 1);
        // RFC 3339 / ISO-8601 timestamp.
        assert!(json["orderDate"].as_str().unwrap().contains('T'));
    }

    struct RejectingService;

    impl OrderService for RejectingService {
        async fn submit_order(&self, _order: &Order) -> Result<OrderConfirmation, OrderApiError> {
            Err(OrderApiError::Api {
                status: 500,
                message: "server error".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_rejected_submission_surfaces_error_and_resets_guard() {
        let cart = sample_cart();
        let order = build_order(customer(), &cart, &order_totals(&cart));
        let process = CheckoutProcess::new();

        let err = process.submit(&RejectingService, &order).await.unwrap_err();
        assert!(matches!(err, CheckoutError::Submission(_)));
        // The guard resets after settlement; a retry is allowed.
        assert!(!process.is_in_flight());
    }

    struct PendingService;

    impl OrderService for PendingService {
        async fn submit_order(&self, _order: &Order) -> Result<OrderConfirmation, OrderApiError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_second_submission_while_in_flight_is_refused() {
        let cart = sample_cart();
        let order = build_order(customer(), &cart, &order_totals(&cart));
        let process = CheckoutProcess::new();

        let pending = process.submit(&PendingService, &order);
        tokio::pin!(pending);
        // Drive the first submission to its suspension point.
        assert!(
            futures_poll_once(pending.as_mut()).await.is_none(),
            "first submission should still be pending"
        );
        assert!(process.is_in_flight());

        let err = process.submit(&PendingService, &order).await.unwrap_err();
        assert!(matches!(err, CheckoutError::SubmissionInFlight));
    }

    #[tokio::test]
    async fn test_dropping_a_pending_submission_releases_the_guard() {
        let cart = sample_cart();
        let order = build_order(customer(), &cart, &order_totals(&cart));
        let process = CheckoutProcess::new();

        {
            let pending = process.submit(&PendingService, &order);
            tokio::pin!(pending);
            assert!(futures_poll_once(pending.as_mut()).await.is_none());
            assert!(process.is_in_flight());
        }

        // Cancellation released the guard; the next submission proceeds
        // instead of reporting one in flight.
        assert!(!process.is_in_flight());
        let err = process.submit(&RejectingService, &order).await.unwrap_err();
        assert!(matches!(err, CheckoutError::Submission(_)));
    }

    /// Poll a future exactly once, returning its output if ready.
    async fn futures_poll_once<F: Future>(future: std::pin::Pin<&mut F>) -> Option<F::Output> {
        let mut future = Some(future);
        std::future::poll_fn(move |cx| {
            let polled = future
                .take()
                .map(|f| f.poll(cx))
                .unwrap_or(std::task::Poll::Pending);
            match polled {
                std::task::Poll::Ready(output) => std::task::Poll::Ready(Some(output)),
                std::task::Poll::Pending => std::task::Poll::Ready(None),
            }
        })
        .await
    }
}
