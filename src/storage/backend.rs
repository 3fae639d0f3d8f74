//! Storage backend abstraction.
//!
//! This module defines the [`SlotStorage`] trait that abstracts over durable
//! key-value slots. Each slot holds one serialized document and is always
//! overwritten as a whole; there are no partial or delta writes.

use crate::domain::error::Result;

/// Abstraction over a durable key-value slot store.
///
/// # Implementations
///
/// - [`JsonFileStorage`](crate::storage::JsonFileStorage): one JSON file per slot, atomic writes
/// - [`MemoryStorage`](crate::storage::MemoryStorage): process-local map
///
/// # Examples
///
/// ```no_run
/// use pokecatalog::storage::{JsonFileStorage, SlotStorage};
/// use std::path::PathBuf;
///
/// let mut storage = JsonFileStorage::new(PathBuf::from("/tmp/pokecatalog"))?;
/// storage.write("pokemon-favorites", "[]")?;
/// assert_eq!(storage.read("pokemon-favorites")?.as_deref(), Some("[]"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait SlotStorage: Send {
    /// Reads the raw contents of a slot.
    ///
    /// Returns `Ok(None)` if the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites a slot with `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. Backends must not leave a
    /// partially written slot behind.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}
