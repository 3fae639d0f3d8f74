//! The catalog context object.
//!
//! A [`Catalog`] is constructed once at startup and passed to every consumer.
//! It owns the entity store, the favorites store, and the search controller;
//! there is no hidden global. Reads go through shared references, writes
//! through [`Catalog::dispatch`].

use super::favorites::{FavoritesStore, DEFAULT_FAVORITES_KEY};
use super::handler::handle_command;
use super::search::SearchController;
use super::state::CatalogState;
use super::Command;
use crate::domain::FilterPatch;
use crate::storage::SlotStorage;
use std::time::Instant;

#[derive(Debug)]
pub struct Catalog {
    pub(super) state: CatalogState,
    pub(super) favorites: FavoritesStore,
    search: SearchController,
}

impl Catalog {
    #[must_use]
    pub fn new(favorites: FavoritesStore, search: SearchController) -> Self {
        Self {
            state: CatalogState::new(),
            favorites,
            search,
        }
    }

    /// Builds a catalog with default favorites key and debounce window.
    #[must_use]
    pub fn with_storage(storage: Box<dyn SlotStorage>) -> Self {
        Self::new(
            FavoritesStore::new(storage, DEFAULT_FAVORITES_KEY),
            SearchController::default(),
        )
    }

    /// Applies a command; see [`handle_command`].
    ///
    /// Commands that touch the search term re-seed the search controller
    /// from the store, so the controller never suppresses a term the store
    /// no longer holds.
    pub fn dispatch(&mut self, command: Command) -> bool {
        let touches_search = match &command {
            Command::ClearFilters => true,
            Command::SetFilters(patch) => patch.search_term.is_some(),
            _ => false,
        };

        let changed = handle_command(self, command);
        if touches_search {
            self.search.sync_committed(&self.state.filters().search_term);
        }
        changed
    }

    /// Feeds a raw search keystroke to the controller.
    ///
    /// Returns the inline validation message for the value, if any. The
    /// filtered view is untouched until [`poll_search`](Self::poll_search)
    /// commits.
    pub fn search_input(&mut self, raw: impl Into<String>, now: Instant) -> Option<String> {
        self.search.input(raw, now).map(str::to_string)
    }

    /// Fires the search timer if due and forwards a commit to the store.
    ///
    /// Returns whether visible state changed.
    pub fn poll_search(&mut self, now: Instant) -> bool {
        self.search
            .poll(now)
            .is_some_and(|term| self.dispatch(Command::SetFilters(FilterPatch::new().search_term(term))))
    }

    /// Clears the search box and commits the empty term immediately.
    pub fn clear_search(&mut self) -> bool {
        self.search
            .clear()
            .is_some_and(|term| self.dispatch(Command::SetFilters(FilterPatch::new().search_term(term))))
    }

    /// Tears down the search timer; no commit can happen afterwards.
    pub fn shutdown(&mut self) {
        tracing::debug!("catalog shutting down");
        self.search.teardown();
    }

    #[must_use]
    pub const fn state(&self) -> &CatalogState {
        &self.state
    }

    #[must_use]
    pub const fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    #[must_use]
    pub const fn search(&self) -> &SearchController {
        &self.search
    }
}
