//! Application layer: the client-side collection engine.
//!
//! This module sits between presentation (outside this crate) and the
//! domain/storage layers. All mutations go through one dispatch path.
//!
//! # Architecture
//!
//! ```text
//! remote records ──▶ Command::SetList ──┐
//! keystrokes ──▶ SearchController ──▶ Command::SetFilters ──▶ handle_command ──▶ CatalogState ──▶ pipeline ──▶ filtered view
//! favorite toggles ──▶ Command::ToggleFavorite ─────────────────┘            └──▶ FavoritesStore ──▶ SlotStorage
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Context object owning every store
//! - [`command`]: Closed command surface
//! - [`favorites`]: Favorites set with durable backing
//! - [`handler`]: Command dispatch
//! - [`modes`]: Derived load state
//! - [`pipeline`]: Pure filter/sort transform
//! - [`search`]: Debounced search controller
//! - [`state`]: Entity store state

pub mod catalog;
pub mod command;
pub mod favorites;
pub mod handler;
pub mod modes;
pub mod pipeline;
pub mod search;
pub mod state;

pub use catalog::Catalog;
pub use command::Command;
pub use favorites::{FavoritesStore, DEFAULT_FAVORITES_KEY};
pub use handler::handle_command;
pub use modes::LoadState;
pub use search::{SearchController, TimerHandle, DEFAULT_DEBOUNCE};
pub use state::CatalogState;
