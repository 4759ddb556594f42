//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod wishlist;

use thiserror::Error;

use sleep_outside_cart::{
    CartConfig, CartError, CartLedger, CheckoutError, ConfigError, JsonFileStore, StoreError,
    WishlistLedger,
};
use sleep_outside_core::LineItemError;

/// Errors that can occur running a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Persisting a ledger failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// A cart operation was rejected.
    #[error("cart error: {0}")]
    Cart(#[from] CartError),

    /// An item argument was invalid.
    #[error("invalid item: {0}")]
    Item(#[from] LineItemError),

    /// Checkout failed.
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),
}

/// Everything a command needs: config, the open store, and both ledgers.
pub struct Session {
    pub config: CartConfig,
    pub store: JsonFileStore,
    pub cart: CartLedger,
    pub wishlist: WishlistLedger,
}

impl Session {
    /// Load configuration, open the store, and load both ledgers.
    pub fn open() -> Result<Self, CliError> {
        let config = CartConfig::from_env()?;
        let store = JsonFileStore::open(&config.data_dir)?;
        let cart = CartLedger::load(&store, &config.cart_key);
        let wishlist = WishlistLedger::load(&store, &config.wishlist_key);
        Ok(Self {
            config,
            store,
            cart,
            wishlist,
        })
    }
}
