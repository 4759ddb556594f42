//! Sleep Outside cart engine.
//!
//! The state engine behind the Sleep Outside storefront: cart and wishlist
//! ledgers, pricing, and checkout assembly, backed by a durable key-value
//! store that plays the role of browser local storage.
//!
//! # Architecture
//!
//! Data flows one direction per operation:
//!
//! ```text
//! caller event -> ledger mutation -> store persist -> totals recompute -> view model
//! ```
//!
//! - [`store`] - `LocalStore` trait with file-backed and in-memory stores
//! - [`cart`] - the cart ledger (merge-by-id, quantity updates, transfers)
//! - [`wishlist`] - the wishlist ledger (id-unique, no quantity semantics)
//! - [`pricing`] - pure totals derivation (tax, tiered shipping)
//! - [`checkout`] - order assembly and the single-submission guard
//! - [`order_api`] - the injected order service seam and its HTTP client
//! - [`view`] - read-only view models for a rendering layer
//! - [`config`] - environment-driven configuration
//!
//! Rendering and the order service's wire protocol are external
//! collaborators; the engine never touches presentation markup and only
//! hands an assembled order to whatever implements
//! [`order_api::OrderService`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod config;
pub mod order_api;
pub mod pricing;
pub mod store;
pub mod view;
pub mod wishlist;

pub use cart::{CartError, CartLedger, MoveOutcome};
pub use checkout::{CheckoutError, CheckoutProcess, CustomerInfo, Order, PackagedItem, build_order};
pub use config::{CartConfig, ConfigError};
pub use order_api::{OrderApiClient, OrderApiError, OrderConfirmation, OrderService};
pub use pricing::order_totals;
pub use store::{JsonFileStore, LocalStore, MemoryStore, StoreError};
pub use view::{CartItemView, CartView, TotalsView};
pub use wishlist::{WishlistAdd, WishlistLedger};
