//! Favorites store with durable backing.
//!
//! The favorites set lives in memory, keyed by entity id, and is mirrored to a
//! single durable slot holding a JSON array of [`FavoriteEntity`]. Every
//! mutating command serializes the full set and overwrites the slot
//! (last-writer-wins, no merge).
//!
//! # Failure Handling
//!
//! Persistence errors never reach callers. A slot that is absent, unreadable,
//! or fails to deserialize resolves to an empty set. A failed write is logged
//! and the store keeps working from memory; the next successful write restores
//! durability.

use crate::domain::FavoriteEntity;
use crate::storage::SlotStorage;

/// Default slot key for the persisted favorites set.
pub const DEFAULT_FAVORITES_KEY: &str = "pokemon-favorites";

/// In-memory favorites set mirrored to a durable slot.
pub struct FavoritesStore {
    storage: Box<dyn SlotStorage>,
    key: String,
    favorites: Vec<FavoriteEntity>,
    degraded: bool,
}

impl FavoritesStore {
    /// Creates the store and loads the slot once.
    pub fn new(storage: Box<dyn SlotStorage>, key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            favorites: Vec::new(),
            degraded: false,
        };
        store.reload();
        store
    }

    /// Adds the entity if no favorite with its id exists, otherwise removes
    /// that favorite; then persists the full set.
    ///
    /// Returns `true` if the id is a favorite afterwards.
    pub fn toggle(&mut self, favorite: FavoriteEntity) -> bool {
        let _span = tracing::debug_span!("favorites_toggle", id = favorite.id).entered();

        let now_favorite = if let Some(index) = self.position(favorite.id) {
            self.favorites.remove(index);
            false
        } else {
            self.favorites.push(favorite);
            true
        };

        self.persist();
        tracing::debug!(now_favorite, count = self.favorites.len(), "favorite toggled");
        now_favorite
    }

    /// Empties the set and persists the empty set.
    pub fn clear(&mut self) {
        let _span = tracing::debug_span!("favorites_clear", count = self.favorites.len()).entered();
        self.favorites.clear();
        self.persist();
    }

    /// Replaces the in-memory set with the slot contents, discarding anything
    /// not yet persisted.
    pub fn reload(&mut self) {
        let _span = tracing::debug_span!("favorites_reload", key = %self.key).entered();
        self.favorites = self.load();
        tracing::debug!(count = self.favorites.len(), "favorites loaded");
    }

    fn load(&mut self) -> Vec<FavoriteEntity> {
        let contents = match self.storage.read(&self.key) {
            Ok(Some(contents)) => contents,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::error!(error = %e, "failed to read favorites, continuing in memory");
                self.degraded = true;
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<FavoriteEntity>>(&contents) {
            Ok(mut favorites) => {
                let mut seen = std::collections::HashSet::new();
                favorites.retain(|fav| seen.insert(fav.id));
                favorites
            }
            Err(e) => {
                tracing::warn!(error = %e, "favorites slot is corrupt, starting empty");
                Vec::new()
            }
        }
    }

    fn persist(&mut self) {
        let result = serde_json::to_string(&self.favorites)
            .map_err(crate::CatalogError::from)
            .and_then(|json| self.storage.write(&self.key, &json));

        match result {
            Ok(()) => {
                if self.degraded {
                    tracing::info!("favorites persistence recovered");
                }
                self.degraded = false;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save favorites, continuing in memory");
                self.degraded = true;
            }
        }
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.favorites.iter().position(|fav| fav.id == id)
    }

    #[must_use]
    pub fn is_favorite(&self, id: u32) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn favorites(&self) -> &[FavoriteEntity] {
        &self.favorites
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// `true` while the last storage operation failed.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.degraded
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("key", &self.key)
            .field("favorites", &self.favorites)
            .field("degraded", &self.degraded)
            .finish_non_exhaustive()
    }
}
