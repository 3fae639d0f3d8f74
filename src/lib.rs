//! Pokecatalog: a client-side collection engine for a Pokemon catalog.
//!
//! Pokecatalog holds the state behind a browsable catalog and provides:
//! - A pure filter/sort pipeline deriving the visible view from the full list
//! - A field-validation rule engine returning structured outcomes
//! - An entity store whose derived view is recomputed on every relevant command
//! - A favorites set persisted to a durable key-value slot
//! - A debounced search controller committing validated terms

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Headless binary (main.rs)                          │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Catalog context + command dispatch               │
//! │  - Entity store, favorites, search controller       │
//! │  - Filter/sort pipeline                             │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Validation    │   │ Storage Layer │   │ Domain        │
//! │ (validation/) │   │ (storage/)    │   │ (domain/)     │
//! │ - Rules       │   │ - Slot trait  │   │ - Entities    │
//! │ - Schemas     │   │ - JSON files  │   │ - Filters     │
//! │ - Tracker     │   │ - Memory      │   │ - Errors      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure (paths) & Observability (logging)   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Catalog context, commands, stores, pipeline and search
//! - [`domain`]: Core domain types (entities, filters, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: Durable slot storage
//! - [`validation`]: Rule engine and built-in schemas
//! - [`observability`]: File-based tracing output
//!
//! # Configuration
//!
//! Configuration comes from a string map (e.g. `key=value` arguments) or a TOML file:
//!
//! ```toml
//! data_dir = "~/.local/share/pokecatalog"
//! favorites_key = "pokemon-favorites"
//! search_debounce_ms = 300
//! trace_level = "info"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pokecatalog::{Catalog, Command, Entity, FilterPatch, SortBy};
//! use pokecatalog::storage::MemoryStorage;
//!
//! let mut catalog = Catalog::with_storage(Box::new(MemoryStorage::new()));
//! catalog.dispatch(Command::SetList(vec![
//!     Entity::new(25, "pikachu", vec!["electric".to_string()]),
//!     Entity::new(1, "bulbasaur", vec!["grass".to_string(), "poison".to_string()]),
//! ]));
//! catalog.dispatch(Command::SetFilters(FilterPatch::new().sort_by(SortBy::Name)));
//!
//! let names: Vec<&str> = catalog
//!     .state()
//!     .filtered_view()
//!     .iter()
//!     .map(|e| e.name.as_str())
//!     .collect();
//! assert_eq!(names, ["bulbasaur", "pikachu"]);
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod validation;

pub use app::{handle_command, Catalog, CatalogState, Command, LoadState, SearchController};
pub use domain::{
    stat_abbreviation, CatalogError, Entity, FavoriteEntity, FilterPatch, FilterSpec, RawEntity,
    Result, SortBy, Stat,
};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default log file name inside the data directory.
const LOG_FILE_NAME: &str = "pokecatalog.log";

/// Default debounce window in milliseconds.
const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Engine configuration.
///
/// Built from a string map ([`Config::from_map`]) or a TOML file
/// ([`Config::from_file`]); any missing value falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the favorites slot and the log file.
    ///
    /// Default: `$XDG_DATA_HOME/pokecatalog` or `~/.local/share/pokecatalog`
    pub data_dir: PathBuf,

    /// Slot key the favorites set is persisted under. Default: `"pokemon-favorites"`
    pub favorites_key: String,

    /// Idle window before a raw search value is committed. Default: 300
    pub search_debounce_ms: u64,

    /// Tracing level filter.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file path. Default: `<data_dir>/pokecatalog.log`
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = infrastructure::get_data_dir();
        Self {
            log_file: data_dir.join(LOG_FILE_NAME),
            data_dir,
            favorites_key: app::DEFAULT_FAVORITES_KEY.to_string(),
            search_debounce_ms: DEFAULT_DEBOUNCE_MS,
            trace_level: None,
        }
    }
}

/// On-disk shape of the TOML configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    data_dir: Option<String>,
    favorites_key: Option<String>,
    search_debounce_ms: Option<u64>,
    trace_level: Option<String>,
    log_file: Option<String>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `data_dir`: path, `~` expanded
    /// - `favorites_key`: non-empty string
    /// - `search_debounce_ms`: String → `u64` (falls back to 300 on parse error)
    /// - `trace_level`: String → `Option<String>`
    /// - `log_file`: path, `~` expanded (defaults under `data_dir`)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use pokecatalog::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("data_dir".to_string(), "/tmp/catalog".to_string());
    /// map.insert("search_debounce_ms".to_string(), "150".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.search_debounce_ms, 150);
    /// assert_eq!(config.log_file, std::path::PathBuf::from("/tmp/catalog/pokecatalog.log"));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let file = ConfigFile {
            data_dir: map.get("data_dir").cloned(),
            favorites_key: map.get("favorites_key").cloned(),
            search_debounce_ms: map
                .get("search_debounce_ms")
                .and_then(|s| s.trim().parse::<u64>().ok()),
            trace_level: map.get("trace_level").cloned(),
            log_file: map.get("log_file").cloned(),
        };
        Self::resolve(file)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Config`] if it is not valid TOML for this shape.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content).map_err(|e| {
            CatalogError::Config(format!("failed to parse {}: {e}", path.display()))
        })?;
        Ok(Self::resolve(file))
    }

    fn resolve(file: ConfigFile) -> Self {
        let data_dir = file
            .data_dir
            .filter(|s| !s.trim().is_empty())
            .map_or_else(infrastructure::get_data_dir, |s| infrastructure::expand_tilde(s.trim()));

        let log_file = file
            .log_file
            .filter(|s| !s.trim().is_empty())
            .map_or_else(|| data_dir.join(LOG_FILE_NAME), |s| infrastructure::expand_tilde(s.trim()));

        Self {
            favorites_key: file
                .favorites_key
                .filter(|k| !k.trim().is_empty())
                .unwrap_or_else(|| app::DEFAULT_FAVORITES_KEY.to_string()),
            search_debounce_ms: file.search_debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS),
            trace_level: file.trace_level.filter(|l| !l.trim().is_empty()),
            data_dir,
            log_file,
        }
    }

    /// The search debounce window as a [`Duration`].
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Builds the catalog context from configuration.
///
/// Favorites are backed by a [`storage::JsonFileStorage`] in `data_dir`. If
/// that directory cannot be opened the catalog runs memory-only from the
/// start and logs why.
///
/// # Example
///
/// ```rust
/// use pokecatalog::{initialize, Config};
///
/// let dir = std::env::temp_dir().join("pokecatalog-doc-init");
/// let config = Config {
///     log_file: dir.join("pokecatalog.log"),
///     data_dir: dir,
///     ..Default::default()
/// };
///
/// let catalog = initialize(&config);
/// assert!(catalog.state().filtered_view().is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> Catalog {
    let _span = tracing::debug_span!("initialize", data_dir = %config.data_dir.display()).entered();
    tracing::debug!("initializing pokecatalog");

    let storage: Box<dyn storage::SlotStorage> =
        match storage::JsonFileStorage::new(config.data_dir.clone()) {
            Ok(json) => Box::new(json),
            Err(e) => {
                tracing::warn!(error = %e, "failed to open data directory, favorites are memory-only");
                Box::new(storage::MemoryStorage::new())
            }
        };

    Catalog::new(
        app::FavoritesStore::new(storage, config.favorites_key.clone()),
        SearchController::new(config.debounce()),
    )
}
