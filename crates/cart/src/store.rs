//! Durable key-value storage for persisted collections.
//!
//! The storefront keeps its cart and wishlist as JSON arrays under string
//! keys (`so-cart`, `so-wishlist`), the way browser local storage would.
//! [`LocalStore`] is that contract: typed load/save of JSON-serializable
//! sequences, where a missing or corrupt key loads as `None` and the caller
//! substitutes an empty collection.
//!
//! Two implementations: [`JsonFileStore`] persists one `<key>.json` file
//! per key under a data directory; [`MemoryStore`] backs tests and
//! ephemeral sessions. Writes are single synchronous last-write-wins;
//! reconciling concurrent writers is explicitly out of scope.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur while persisting a collection.
///
/// Load-side problems (missing key, corrupt JSON) are not errors: they are
/// recovered as `None` so a bad persisted payload can never wedge the
/// storefront.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serializing the collection failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The key would name a file outside the data directory.
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),
}

/// Typed get/set of JSON-serializable collections under string keys.
pub trait LocalStore {
    /// Load the collection stored under `key`.
    ///
    /// Returns `None` when the key is absent or the stored payload cannot
    /// be parsed; callers substitute an empty collection.
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>>;

    /// Replace the collection stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be serialized or written.
    fn save<T: Serialize>(&mut self, key: &str, values: &[T]) -> Result<(), StoreError>;
}

fn parse<T: DeserializeOwned>(key: &str, raw: &str) -> Option<Vec<T>> {
    match serde_json::from_str(raw) {
        Ok(values) => Some(values),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding corrupt persisted collection");
            None
        }
    }
}

/// File-per-key JSON store rooted at a data directory.
///
/// The local-storage analog: key `so-cart` lives at `<dir>/so-cart.json`
/// as a plain JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Path of the file backing `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] for an empty key or one containing
    /// a path separator; keys name files directly under the data directory
    /// and must never escape it.
    pub fn path(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() || key.contains(['/', '\\']) {
            return Err(StoreError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    /// Root data directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl LocalStore for JsonFileStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        let path = match self.path(key) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(key, error = %e, "Refusing to load persisted collection");
                return None;
            }
        };
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read persisted collection");
                return None;
            }
        };
        parse(key, &raw)
    }

    fn save<T: Serialize>(&mut self, key: &str, values: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(values)?;
        let path = self.path(key)?;
        // Write-then-rename so an interrupted write leaves the previous
        // payload intact rather than a truncated file.
        let staged = path.with_extension("json.tmp");
        fs::write(&staged, raw)?;
        fs::rename(&staged, &path)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
///
/// Holds the serialized JSON per key, so load/save exercise the same
/// round-trip path as the file store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject a raw payload under `key`, bypassing serialization.
    ///
    /// Lets tests stage legacy or corrupt persisted data.
    pub fn insert_raw(&mut self, key: impl Into<String>, raw: impl Into<String>) {
        self.entries.insert(key.into(), raw.into());
    }

    /// The raw payload stored under `key`, if any.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl LocalStore for MemoryStore {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        parse(key, self.entries.get(key)?)
    }

    fn save<T: Serialize>(&mut self, key: &str, values: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(values)?;
        self.entries.insert(key.to_owned(), raw);
        Ok(())
    }
}
