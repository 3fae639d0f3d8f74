//! Commands accepted by the catalog.
//!
//! [`Command`] is the closed set of operations presentation may issue. Each
//! variant has exactly one handler arm in [`handle_command`](super::handle_command);
//! the `match` there is exhaustive, so a new variant without a handler fails
//! to compile.
//!
//! # Example
//!
//! ```rust
//! use pokecatalog::app::Command;
//! use pokecatalog::{FilterPatch, SortBy};
//!
//! let commands = vec![
//!     Command::SetLoading(true),
//!     Command::SetFilters(FilterPatch::new().sort_by(SortBy::Name)),
//! ];
//! assert_eq!(commands.len(), 2);
//! ```

use crate::domain::{Entity, FavoriteEntity, FilterPatch};
use std::collections::BTreeMap;

/// The catalog command surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Writes the loading flag.
    SetLoading(bool),

    /// Writes the load error; `None` clears it. Nothing else changes.
    SetError(Option<String>),

    /// Replaces the canonical list.
    SetList(Vec<Entity>),

    /// Validates each record and replaces the list with the accepted subset,
    /// reporting rejects through the validation errors side channel.
    SetListValidated(Vec<Entity>),

    /// Appends a page to the canonical list.
    AppendList(Vec<Entity>),

    /// Selects an entity for detail, or clears the selection.
    SetCurrent(Option<Entity>),

    /// Shallow-merges a partial filter update.
    SetFilters(FilterPatch),

    /// Resets filters to defaults.
    ClearFilters,

    /// Pagination bookkeeping.
    SetHasMore(bool),

    /// Pagination bookkeeping.
    SetOffset(usize),

    /// Attaches per-record validation failures.
    SetValidationErrors(BTreeMap<String, String>),

    /// Clears per-record validation failures.
    ClearValidationErrors,

    /// Adds the entity to favorites, or removes it if already present.
    ToggleFavorite(FavoriteEntity),

    /// Empties favorites.
    ClearFavorites,

    /// Re-reads favorites from durable storage.
    ReloadFavorites,
}

impl Command {
    /// Short variant name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetLoading(_) => "set_loading",
            Self::SetError(_) => "set_error",
            Self::SetList(_) => "set_list",
            Self::SetListValidated(_) => "set_list_validated",
            Self::AppendList(_) => "append_list",
            Self::SetCurrent(_) => "set_current",
            Self::SetFilters(_) => "set_filters",
            Self::ClearFilters => "clear_filters",
            Self::SetHasMore(_) => "set_has_more",
            Self::SetOffset(_) => "set_offset",
            Self::SetValidationErrors(_) => "set_validation_errors",
            Self::ClearValidationErrors => "clear_validation_errors",
            Self::ToggleFavorite(_) => "toggle_favorite",
            Self::ClearFavorites => "clear_favorites",
            Self::ReloadFavorites => "reload_favorites",
        }
    }
}
