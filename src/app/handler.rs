//! Command handling and state transition logic.
//!
//! This module implements the single dispatch path through which every
//! catalog mutation flows. Commands are applied synchronously and one at a
//! time, so no observer ever sees a half-applied command.
//!
//! # Architecture
//!
//! 1. Presentation (or the search controller) issues a [`Command`]
//! 2. [`handle_command`] pattern-matches the variant
//! 3. The entity store or the favorites store is mutated
//! 4. A flag reports whether anything visible changed, so hosts can skip
//!    redundant redraws
//!
//! # Example
//!
//! ```rust
//! use pokecatalog::app::{handle_command, Catalog, Command};
//! use pokecatalog::storage::MemoryStorage;
//!
//! let mut catalog = Catalog::with_storage(Box::new(MemoryStorage::new()));
//! let changed = handle_command(&mut catalog, Command::SetLoading(true));
//! assert!(changed);
//! ```

use super::{Catalog, Command};

/// Applies a command to the catalog and returns whether visible state changed.
///
/// # Tracing
///
/// Each call creates a debug-level span named after the command.
pub fn handle_command(catalog: &mut Catalog, command: Command) -> bool {
    let _span = tracing::debug_span!("handle_command", command = command.name()).entered();
    let state = &mut catalog.state;

    let changed = match command {
        Command::SetLoading(loading) => {
            let changed = state.is_loading() != loading;
            state.set_loading(loading);
            changed
        }
        Command::SetError(error) => {
            let changed = state.error() != error.as_deref();
            state.set_error(error);
            changed
        }
        Command::SetList(entities) => {
            state.set_list(entities);
            true
        }
        Command::SetListValidated(entities) => {
            state.set_list_validated(entities);
            true
        }
        Command::AppendList(entities) => {
            if entities.is_empty() {
                tracing::debug!("empty page, nothing appended");
                false
            } else {
                state.append_list(entities);
                true
            }
        }
        Command::SetCurrent(entity) => {
            let changed = state.current() != entity.as_ref();
            state.set_current(entity);
            changed
        }
        Command::SetFilters(patch) => {
            let old_view = state.filtered_view().to_vec();
            let old_filters = state.filters().clone();
            state.set_filters(patch);
            let changed = old_view != state.filtered_view() || &old_filters != state.filters();
            if !changed {
                tracing::debug!("filters unchanged, skipping render");
            }
            changed
        }
        Command::ClearFilters => {
            let old_view = state.filtered_view().to_vec();
            let old_filters = state.filters().clone();
            state.clear_filters();
            old_view != state.filtered_view() || &old_filters != state.filters()
        }
        Command::SetHasMore(has_more) => {
            let changed = state.has_more() != has_more;
            state.set_has_more(has_more);
            changed
        }
        Command::SetOffset(offset) => {
            let changed = state.offset() != offset;
            state.set_offset(offset);
            changed
        }
        Command::SetValidationErrors(errors) => {
            let changed = state.validation_errors() != &errors;
            state.set_validation_errors(errors);
            changed
        }
        Command::ClearValidationErrors => {
            let changed = !state.validation_errors().is_empty();
            state.clear_validation_errors();
            changed
        }
        Command::ToggleFavorite(favorite) => {
            catalog.favorites.toggle(favorite);
            true
        }
        Command::ClearFavorites => {
            let changed = !catalog.favorites.is_empty();
            catalog.favorites.clear();
            changed
        }
        Command::ReloadFavorites => {
            let before = catalog.favorites.favorites().to_vec();
            catalog.favorites.reload();
            before != catalog.favorites.favorites()
        }
    };

    tracing::trace!(changed, "command applied");
    changed
}
