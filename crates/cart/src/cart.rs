//! The cart ledger.
//!
//! An ordered, id-unique collection of [`LineItem`]s. Adding a product that
//! is already present merges by summing quantity rather than duplicating the
//! row, so quantity stays the single source of truth and the per-unit price
//! is never pre-multiplied. Every mutation persists through the injected
//! [`LocalStore`] before returning.

use rust_decimal::Decimal;
use thiserror::Error;

use sleep_outside_core::{ItemRecord, LineItem, ProductId};

use crate::store::{LocalStore, StoreError};
use crate::wishlist::WishlistLedger;

/// Errors from cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Persisting the ledger failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// A direct quantity set with a negative value.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),
}

/// Outcome of a transfer between the cart and the wishlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The item changed ledgers.
    Moved,
    /// The destination already holds this id; the source is left untouched.
    AlreadyPresent,
    /// The source ledger has no entry with this id.
    NotFound,
}

/// Ordered, id-unique cart of line items.
///
/// Owned by the caller and handed to the pricing calculator and checkout
/// assembler as a snapshot; there is no ambient cart state anywhere else.
#[derive(Debug, Clone)]
pub struct CartLedger {
    key: String,
    items: Vec<LineItem>,
}

impl CartLedger {
    /// Create an empty ledger persisted under `key`.
    #[must_use]
    pub fn empty(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            items: Vec::new(),
        }
    }

    /// Load the ledger persisted under `key`.
    ///
    /// A missing or corrupt persisted collection loads as an empty cart.
    #[must_use]
    pub fn load<S: LocalStore>(store: &S, key: impl Into<String>) -> Self {
        let key = key.into();
        let records: Vec<ItemRecord> = store.load(&key).unwrap_or_default();
        let items = records.into_iter().map(LineItem::from).collect();
        Self { key, items }
    }

    /// Storage key this ledger persists under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current line items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct product rows (feeds the shipping tier).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total unit count across all rows (feeds "N items" display).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of extended line prices; zero for an empty cart.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Whether the cart holds an entry with `id`.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    pub(crate) fn persist<S: LocalStore>(&self, store: &mut S) -> Result<(), StoreError> {
        let records: Vec<ItemRecord> = self.items.iter().map(ItemRecord::from).collect();
        store.save(&self.key, &records)
    }

    /// Add `item`, merging into an existing row with the same id.
    ///
    /// A merge sums quantities; a zero-quantity incoming item counts as 1.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the ledger fails.
    pub fn add_or_merge<S: LocalStore>(
        &mut self,
        store: &mut S,
        item: LineItem,
    ) -> Result<(), StoreError> {
        let added = item.quantity.max(1);
        if let Some(existing) = self.items.iter_mut().find(|existing| existing.id == item.id) {
            existing.quantity = existing.quantity.saturating_add(added);
        } else {
            let mut item = item;
            item.quantity = added;
            self.items.push(item);
        }
        self.persist(store)
    }

    /// Adjust the quantity of `id` by `delta`.
    ///
    /// A result of zero or less removes the row entirely; a quantity of
    /// zero is never persisted. An unknown id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the ledger fails.
    pub fn update_quantity<S: LocalStore>(
        &mut self,
        store: &mut S,
        id: &ProductId,
        delta: i64,
    ) -> Result<(), StoreError> {
        let Some(pos) = self.position(id) else {
            return Ok(());
        };
        let Some(item) = self.items.get_mut(pos) else {
            return Ok(());
        };
        let next = i64::from(item.quantity).saturating_add(delta);
        if next <= 0 {
            self.items.remove(pos);
        } else {
            item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        }
        self.persist(store)
    }

    /// Set the quantity of `id` directly.
    ///
    /// Zero removes the row; a negative value is rejected and nothing is
    /// persisted. An unknown id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] for a negative quantity, or a
    /// storage error if persisting fails.
    pub fn set_quantity<S: LocalStore>(
        &mut self,
        store: &mut S,
        id: &ProductId,
        quantity: i64,
    ) -> Result<(), CartError> {
        if quantity < 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }
        let Some(pos) = self.position(id) else {
            return Ok(());
        };
        if quantity == 0 {
            self.items.remove(pos);
        } else if let Some(item) = self.items.get_mut(pos) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        self.persist(store)?;
        Ok(())
    }

    /// Remove the row with `id`; a no-op (still persisted) if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the ledger fails.
    pub fn remove<S: LocalStore>(&mut self, store: &mut S, id: &ProductId) -> Result<(), StoreError> {
        self.items.retain(|item| &item.id != id);
        self.persist(store)
    }

    /// Empty the cart and persist (used by the caller after a successful
    /// checkout).
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the ledger fails.
    pub fn clear<S: LocalStore>(&mut self, store: &mut S) -> Result<(), StoreError> {
        self.items.clear();
        self.persist(store)
    }

    /// Move the row with `id` into the wishlist.
    ///
    /// The item is appended to the wishlist and that ledger persisted
    /// before the cart row is removed, so a failed write cannot lose the
    /// item. A wishlist that already holds the id leaves the cart row
    /// untouched and reports [`MoveOutcome::AlreadyPresent`].
    ///
    /// # Errors
    ///
    /// Returns an error if persisting either ledger fails.
    pub fn move_to_wishlist<S: LocalStore>(
        &mut self,
        store: &mut S,
        wishlist: &mut WishlistLedger,
        id: &ProductId,
    ) -> Result<MoveOutcome, StoreError> {
        let Some(pos) = self.position(id) else {
            return Ok(MoveOutcome::NotFound);
        };
        if wishlist.contains(id) {
            return Ok(MoveOutcome::AlreadyPresent);
        }
        let Some(item) = self.items.get(pos).cloned() else {
            return Ok(MoveOutcome::NotFound);
        };
        wishlist.append(store, item)?;
        self.items.remove(pos);
        self.persist(store)?;
        Ok(MoveOutcome::Moved)
    }
}
