//! The wishlist ledger.
//!
//! Saved-for-later items, unique by id with no quantity semantics. Adding
//! an id that is already present reports [`WishlistAdd::AlreadyPresent`]
//! so the caller can tell the user, rather than silently re-adding.

use sleep_outside_core::{ItemRecord, LineItem, ProductId};

use crate::cart::{CartLedger, MoveOutcome};
use crate::store::{LocalStore, StoreError};

/// Outcome of a wishlist add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistAdd {
    /// The item was appended.
    Added,
    /// The wishlist already holds this id; nothing changed.
    AlreadyPresent,
}

/// Ordered, id-unique collection of saved-for-later items.
#[derive(Debug, Clone)]
pub struct WishlistLedger {
    key: String,
    items: Vec<LineItem>,
}

impl WishlistLedger {
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
    /// A missing or corrupt persisted collection loads as an empty list.
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

    /// Current items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the wishlist holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the wishlist holds an entry with `id`.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    fn persist<S: LocalStore>(&self, store: &mut S) -> Result<(), StoreError> {
        let records: Vec<ItemRecord> = self.items.iter().map(ItemRecord::from).collect();
        store.save(&self.key, &records)
    }

    /// Append without the already-present check; the caller has verified it.
    pub(crate) fn append<S: LocalStore>(
        &mut self,
        store: &mut S,
        mut item: LineItem,
    ) -> Result<(), StoreError> {
        // Wishlist entries carry no quantity.
        item.quantity = 1;
        self.items.push(item);
        self.persist(store)
    }

    /// Add `item` unless its id is already present.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the ledger fails.
    pub fn add<S: LocalStore>(
        &mut self,
        store: &mut S,
        item: LineItem,
    ) -> Result<WishlistAdd, StoreError> {
        if self.contains(&item.id) {
            return Ok(WishlistAdd::AlreadyPresent);
        }
        self.append(store, item)?;
        Ok(WishlistAdd::Added)
    }

    /// Remove the entry with `id`; a no-op (still persisted) if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the ledger fails.
    pub fn remove<S: LocalStore>(&mut self, store: &mut S, id: &ProductId) -> Result<(), StoreError> {
        self.items.retain(|item| &item.id != id);
        self.persist(store)
    }

    /// Move the entry with `id` into the cart.
    ///
    /// The item lands in the cart with quantity 1 (the wishlist kept none);
    /// if the cart already holds the id, the quantities merge. The cart is
    /// persisted before the wishlist entry is removed, so a failed write
    /// cannot lose the item.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting either ledger fails.
    pub fn move_to_cart<S: LocalStore>(
        &mut self,
        store: &mut S,
        cart: &mut CartLedger,
        id: &ProductId,
    ) -> Result<MoveOutcome, StoreError> {
        let Some(pos) = self.items.iter().position(|item| &item.id == id) else {
            return Ok(MoveOutcome::NotFound);
        };
        let Some(mut item) = self.items.get(pos).cloned() else {
            return Ok(MoveOutcome::NotFound);
        };
        item.quantity = 1;
        cart.add_or_merge(store, item)?;
        self.items.remove(pos);
        self.persist(store)?;
        Ok(MoveOutcome::Moved)
    }
}
