use pokecatalog::{initialize, CatalogError, Command, Config, Entity, FavoriteEntity};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn from_map_parses_typed_values() {
    let config = Config::from_map(&map(&[
        ("data_dir", "/srv/catalog"),
        ("favorites_key", "team"),
        ("search_debounce_ms", "120"),
        ("trace_level", "debug"),
    ]));

    assert_eq!(config.data_dir, PathBuf::from("/srv/catalog"));
    assert_eq!(config.favorites_key, "team");
    assert_eq!(config.debounce(), Duration::from_millis(120));
    assert_eq!(config.trace_level.as_deref(), Some("debug"));
    assert_eq!(config.log_file, PathBuf::from("/srv/catalog/pokecatalog.log"));
}

#[test]
fn from_map_falls_back_on_bad_values() {
    let config = Config::from_map(&map(&[
        ("data_dir", "/srv/catalog"),
        ("favorites_key", "  "),
        ("search_debounce_ms", "soon"),
        ("trace_level", ""),
    ]));

    assert_eq!(config.favorites_key, "pokemon-favorites");
    assert_eq!(config.search_debounce_ms, 300);
    assert_eq!(config.trace_level, None);
}

#[test]
fn from_file_reads_toml_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pokecatalog.toml");
    std::fs::write(
        &path,
        "data_dir = \"/srv/catalog\"\nsearch_debounce_ms = 500\nlog_file = \"/var/log/catalog.log\"\n",
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/srv/catalog"));
    assert_eq!(config.search_debounce_ms, 500);
    assert_eq!(config.favorites_key, "pokemon-favorites");
    assert_eq!(config.log_file, PathBuf::from("/var/log/catalog.log"));
}

#[test]
fn from_file_rejects_malformed_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "search_debounce_ms = \"fast\"\n").unwrap();

    assert!(matches!(Config::from_file(&path), Err(CatalogError::Config(_))));
    assert!(matches!(
        Config::from_file(dir.path().join("absent.toml")),
        Err(CatalogError::Io(_))
    ));
}

#[test]
fn initialize_persists_favorites_under_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        data_dir: dir.path().join("data"),
        log_file: dir.path().join("data/pokecatalog.log"),
        favorites_key: "favs".to_string(),
        search_debounce_ms: 10,
        trace_level: None,
    };

    let mut catalog = initialize(&config);
    assert_eq!(catalog.search().window(), Duration::from_millis(10));
    assert_eq!(catalog.favorites().key(), "favs");

    let fav = FavoriteEntity::from_entity(&Entity::new(133, "eevee", ["normal"]));
    catalog.dispatch(Command::ToggleFavorite(fav));
    assert!(dir.path().join("data/favs.json").exists());

    let reopened = initialize(&config);
    assert!(reopened.favorites().is_favorite(133));
}
