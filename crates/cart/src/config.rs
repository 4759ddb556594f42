//! Engine configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SO_DATA_DIR` - Directory for persisted collections (default: `.sleep-outside`)
//! - `SO_CART_KEY` - Storage key for the cart (default: `so-cart`)
//! - `SO_WISHLIST_KEY` - Storage key for the wishlist (default: `so-wishlist`)
//! - `SO_ORDER_API_URL` - Base URL of the order service; required only when
//!   submitting a checkout

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_DATA_DIR: &str = ".sleep-outside";
const DEFAULT_CART_KEY: &str = "so-cart";
const DEFAULT_WISHLIST_KEY: &str = "so-wishlist";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart engine configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Directory holding the persisted collections.
    pub data_dir: PathBuf,
    /// Storage key for the cart ledger.
    pub cart_key: String,
    /// Storage key for the wishlist ledger.
    pub wishlist_key: String,
    /// Base URL of the order service, when configured.
    pub order_api_url: Option<Url>,
}

impl CartConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable has an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let data_dir = lookup("SO_DATA_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let cart_key = lookup("SO_CART_KEY").unwrap_or_else(|| DEFAULT_CART_KEY.to_owned());
        let wishlist_key =
            lookup("SO_WISHLIST_KEY").unwrap_or_else(|| DEFAULT_WISHLIST_KEY.to_owned());

        let order_api_url = match lookup("SO_ORDER_API_URL") {
            Some(raw) => Some(Url::parse(&raw).map_err(|e| {
                ConfigError::InvalidEnvVar("SO_ORDER_API_URL".to_owned(), e.to_string())
            })?),
            None => None,
        };

        Ok(Self {
            data_dir,
            cart_key,
            wishlist_key,
            order_api_url,
        })
    }

    /// The order service base URL, required for checkout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when `SO_ORDER_API_URL` was
    /// not set.
    pub fn order_api_url(&self) -> Result<&Url, ConfigError> {
        self.order_api_url
            .as_ref()
            .ok_or_else(|| ConfigError::MissingEnvVar("SO_ORDER_API_URL".to_owned()))
    }
}
