//! Order service seam and its HTTP client.
//!
//! The engine never owns the order wire protocol; it hands an assembled
//! [`Order`] to whatever implements [`OrderService`]. [`OrderApiClient`] is
//! the production implementation: a JSON POST to the order endpoint of the
//! configured API. Tests substitute their own implementations.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::checkout::Order;

/// Errors that can occur submitting an order.
#[derive(Debug, Error)]
pub enum OrderApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the confirmation response.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Confirmation returned by the order service on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Server-assigned order number, when the service provides one.
    #[serde(rename = "orderId", default)]
    pub order_id: Option<i64>,

    /// Human-readable confirmation message, when provided.
    #[serde(default)]
    pub message: Option<String>,
}

/// An injected collaborator that accepts assembled orders.
///
/// Submission is the only suspending operation in the engine; the returned
/// future's settlement is the only ordering signal a caller gets.
pub trait OrderService {
    /// Submit `order` to the remote service.
    ///
    /// # Errors
    ///
    /// Returns an error if the service rejects the order or cannot be
    /// reached; the order is discarded and the cart is left untouched.
    fn submit_order(
        &self,
        order: &Order,
    ) -> impl Future<Output = Result<OrderConfirmation, OrderApiError>>;
}

/// HTTP order API client.
#[derive(Debug, Clone)]
pub struct OrderApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl OrderApiClient {
    /// Path of the order submission endpoint, relative to the base URL.
    const CHECKOUT_PATH: &'static str = "checkout";

    /// Create a client for the order API at `base_url`.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn checkout_url(&self) -> Result<Url, OrderApiError> {
        self.base_url
            .join(Self::CHECKOUT_PATH)
            .map_err(|e| OrderApiError::Parse(format!("Invalid order API URL: {e}")))
    }
}

impl OrderService for OrderApiClient {
    async fn submit_order(&self, order: &Order) -> Result<OrderConfirmation, OrderApiError> {
        let url = self.checkout_url()?;
        tracing::info!(items = order.items.len(), "Submitting order");

        let response = self.client.post(url).json(order).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "Order submission rejected");
            return Err(OrderApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| OrderApiError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_api_error_display() {
        let err = OrderApiError::Api {
            status: 400,
            message: "missing card number".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 400 - missing card number");
    }

    #[test]
    fn test_confirmation_parses_sparse_response() {
        let confirmation: OrderConfirmation = serde_json::from_str("{}").unwrap();
        assert_eq!(confirmation.order_id, None);
        assert_eq!(confirmation.message, None);

        let confirmation: OrderConfirmation =
            serde_json::from_str(r#"{"orderId":3051,"message":"Order placed"}"#).unwrap();
        assert_eq!(confirmation.order_id, Some(3051));
        assert_eq!(confirmation.message.as_deref(), Some("Order placed"));
    }

    #[test]
    fn test_checkout_url_joins_base() {
        let client = OrderApiClient::new(Url::parse("https://orders.example.com/api/").unwrap());
        assert_eq!(
            client.checkout_url().unwrap().as_str(),
            "https://orders.example.com/api/checkout"
        );
    }
}
