use pokecatalog::app::{FavoritesStore, DEFAULT_FAVORITES_KEY};
use pokecatalog::storage::{JsonFileStorage, MemoryStorage, SlotStorage};
use pokecatalog::{Catalog, CatalogError, Command, Entity, FavoriteEntity, Result};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn charmander() -> FavoriteEntity {
    FavoriteEntity::from_entity(&Entity::new(4, "charmander", ["fire"]))
}

fn pikachu() -> FavoriteEntity {
    FavoriteEntity::from_entity(&Entity::new(25, "pikachu", ["electric"]))
}

fn ids(store: &FavoritesStore) -> BTreeSet<u32> {
    store.favorites().iter().map(|f| f.id).collect()
}

/// Storage whose operations fail while `failing` is set.
#[derive(Debug, Default)]
struct FlakyStorage {
    inner: MemoryStorage,
    failing: Arc<AtomicBool>,
}

impl SlotStorage for FlakyStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CatalogError::Storage("slot unavailable".to_string()));
        }
        self.inner.read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CatalogError::Storage("quota exceeded".to_string()));
        }
        self.inner.write(key, value)
    }
}

#[test]
fn toggle_twice_restores_membership() {
    let mut store = FavoritesStore::new(Box::new(MemoryStorage::new()), DEFAULT_FAVORITES_KEY);

    assert!(store.toggle(charmander()));
    assert!(store.is_favorite(4));
    assert!(!store.toggle(charmander()));
    assert!(!store.is_favorite(4));
    assert!(store.is_empty());
}

#[test]
fn reload_matches_last_toggled_state() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().to_path_buf()).unwrap();
    let mut store = FavoritesStore::new(Box::new(storage.clone()), DEFAULT_FAVORITES_KEY);

    store.toggle(charmander());
    store.toggle(pikachu());
    store.toggle(charmander());
    store.toggle(charmander());

    let expected = ids(&store);
    store.reload();
    assert_eq!(ids(&store), expected);

    let reopened = FavoritesStore::new(Box::new(storage), DEFAULT_FAVORITES_KEY);
    assert_eq!(ids(&reopened), BTreeSet::from([4, 25]));
    assert!(dir.path().join("pokemon-favorites.json").exists());
}

#[test]
fn reload_discards_unpersisted_memory() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().to_path_buf()).unwrap();
    let mut first = FavoritesStore::new(Box::new(storage.clone()), "favs");
    let mut second = FavoritesStore::new(Box::new(storage), "favs");

    first.toggle(pikachu());
    second.toggle(charmander());

    first.reload();
    assert_eq!(ids(&first), BTreeSet::from([4]));
}

#[test]
fn clear_persists_empty_set() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().to_path_buf()).unwrap();
    let mut store = FavoritesStore::new(Box::new(storage.clone()), DEFAULT_FAVORITES_KEY);
    store.toggle(pikachu());
    store.clear();

    let contents = storage.read(DEFAULT_FAVORITES_KEY).unwrap();
    assert_eq!(contents.as_deref(), Some("[]"));
}

#[test]
fn corrupt_slot_loads_as_empty() {
    let storage = MemoryStorage::with_slot(DEFAULT_FAVORITES_KEY, "{not json");
    let store = FavoritesStore::new(Box::new(storage), DEFAULT_FAVORITES_KEY);
    assert!(store.is_empty());
    assert!(!store.is_degraded());
}

#[test]
fn duplicate_ids_in_slot_collapse() {
    let fav = serde_json::to_string(&vec![pikachu(), pikachu(), charmander()]).unwrap();
    let store = FavoritesStore::new(
        Box::new(MemoryStorage::with_slot(DEFAULT_FAVORITES_KEY, fav)),
        DEFAULT_FAVORITES_KEY,
    );
    assert_eq!(store.len(), 2);
}

#[test]
fn persisted_slot_is_a_json_array_of_projections() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonFileStorage::new(dir.path().to_path_buf()).unwrap();
    let mut store = FavoritesStore::new(Box::new(storage.clone()), DEFAULT_FAVORITES_KEY);
    store.toggle(charmander());

    let raw = storage.read(DEFAULT_FAVORITES_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["id"], 4);
    assert_eq!(value[0]["name"], "charmander");
    assert_eq!(value[0]["types"][0], "fire");
    assert!(value[0]["image"].as_str().unwrap().ends_with("/4.png"));
}

#[test]
fn write_failure_keeps_memory_and_recovers() {
    let failing = Arc::new(AtomicBool::new(false));
    let storage = FlakyStorage {
        inner: MemoryStorage::new(),
        failing: Arc::clone(&failing),
    };
    let mut store = FavoritesStore::new(Box::new(storage), DEFAULT_FAVORITES_KEY);

    failing.store(true, Ordering::SeqCst);
    assert!(store.toggle(charmander()));
    assert!(store.is_favorite(4));
    assert!(store.is_degraded());

    failing.store(false, Ordering::SeqCst);
    store.toggle(pikachu());
    assert!(!store.is_degraded());

    store.reload();
    assert_eq!(ids(&store), BTreeSet::from([4, 25]));
}

#[test]
fn read_failure_starts_empty() {
    let storage = FlakyStorage {
        inner: MemoryStorage::new(),
        failing: Arc::new(AtomicBool::new(true)),
    };
    let store = FavoritesStore::new(Box::new(storage), DEFAULT_FAVORITES_KEY);
    assert!(store.is_empty());
    assert!(store.is_degraded());
}

#[test]
fn catalog_dispatches_favorite_commands() {
    let mut catalog = Catalog::with_storage(Box::new(MemoryStorage::new()));

    assert!(catalog.dispatch(Command::ToggleFavorite(pikachu())));
    assert!(catalog.favorites().is_favorite(25));
    assert!(!catalog.dispatch(Command::ReloadFavorites));
    assert!(catalog.dispatch(Command::ClearFavorites));
    assert!(catalog.favorites().is_empty());
    assert!(!catalog.dispatch(Command::ClearFavorites));
}
