//! Entity store state and its mutation commands.
//!
//! This module defines [`CatalogState`], the single source of truth for the
//! canonical collection, the derived view, the selected entity, and load
//! bookkeeping.
//!
//! # Architecture
//!
//! `CatalogState` separates core data (`list`, `filters`) from derived state
//! (`filtered_view`). The derived view is private and only ever written by
//! `recompute`, which every `list` or `filters` mutation calls before
//! returning. After any method returns, `filtered_view()` equals
//! `pipeline::apply(list(), filters())`.
//!
//! # State Components
//!
//! - **List**: Canonical collection, replaced by bulk loads or appended by pagination
//! - **Filtered View**: Ordered subset after type, search, and sort
//! - **Current**: Entity selected for detail, owned by the caller
//! - **Load Flags**: `loading`, `error`, `has_more`, `offset`
//! - **Validation Errors**: Side channel of rejected records from validated loads
//!
//! # Example
//!
//! ```rust
//! use pokecatalog::app::CatalogState;
//! use pokecatalog::{Entity, FilterPatch};
//!
//! let mut state = CatalogState::new();
//! state.set_list(vec![Entity::new(4, "charmander", ["fire"]), Entity::new(1, "bulbasaur", ["grass"])]);
//! state.set_filters(FilterPatch::new().search_term("char"));
//! assert_eq!(state.filtered_view().len(), 1);
//! ```

use super::modes::LoadState;
use super::pipeline;
use crate::domain::{Entity, FilterPatch, FilterSpec};
use crate::validation::{entity_schema, validate_data};
use std::collections::BTreeMap;

/// Central entity store container.
#[derive(Debug, Clone)]
pub struct CatalogState {
    list: Vec<Entity>,
    filtered_view: Vec<Entity>,
    current: Option<Entity>,
    filters: FilterSpec,
    loading: bool,
    error: Option<String>,
    has_more: bool,
    offset: usize,
    validation_errors: BTreeMap<String, String>,
    has_loaded: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    /// Creates an empty, idle store with default filters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            list: Vec::new(),
            filtered_view: Vec::new(),
            current: None,
            filters: FilterSpec::default(),
            loading: false,
            error: None,
            has_more: true,
            offset: 0,
            validation_errors: BTreeMap::new(),
            has_loaded: false,
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Writes the error flag; nothing else is cleared.
    pub fn set_error(&mut self, error: Option<String>) {
        if let Some(message) = &error {
            tracing::warn!(error = %message, "load error recorded");
        }
        self.error = error;
    }

    /// Replaces the canonical list and recomputes the view.
    pub fn set_list(&mut self, entities: Vec<Entity>) {
        let _span = tracing::debug_span!("set_list", count = entities.len()).entered();
        self.list = entities;
        self.has_loaded = true;
        self.recompute();
    }

    /// Appends a page to the canonical list and recomputes the view.
    pub fn append_list(&mut self, entities: Vec<Entity>) {
        let _span = tracing::debug_span!("append_list", count = entities.len()).entered();
        self.list.extend(entities);
        self.has_loaded = true;
        self.recompute();
    }

    /// Validates each record and loads only the accepted subset.
    ///
    /// Rejected records are reported in `validation_errors` keyed
    /// `pokemon_<index>` (index into `entities`) with that record's messages
    /// joined by `", "`. Returns the number of rejected records.
    pub fn set_list_validated(&mut self, entities: Vec<Entity>) -> usize {
        let _span = tracing::debug_span!("set_list_validated", count = entities.len()).entered();

        let schema = entity_schema();
        let mut accepted = Vec::with_capacity(entities.len());
        let mut errors = BTreeMap::new();

        for (index, entity) in entities.into_iter().enumerate() {
            let report = validate_data(&entity, &schema);
            if report.valid {
                accepted.push(entity);
            } else {
                errors.insert(format!("pokemon_{index}"), report.joined_messages());
            }
        }

        let rejected = errors.len();
        if rejected > 0 {
            tracing::warn!(rejected, accepted = accepted.len(), "some records failed validation");
        }

        self.set_list(accepted);
        self.set_validation_errors(errors);
        rejected
    }

    /// Replaces the selected entity; independent of the list and view.
    pub fn set_current(&mut self, entity: Option<Entity>) {
        self.current = entity;
    }

    /// Shallow-merges `patch` into the filters and recomputes the view.
    pub fn set_filters(&mut self, patch: FilterPatch) {
        let _span = tracing::debug_span!("set_filters", patch = ?patch).entered();
        self.filters.merge(patch);
        self.recompute();
    }

    /// Resets filters to their defaults and recomputes the view.
    pub fn clear_filters(&mut self) {
        self.filters = FilterSpec::default();
        self.recompute();
    }

    pub fn set_has_more(&mut self, has_more: bool) {
        self.has_more = has_more;
    }

    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset;
    }

    pub fn set_validation_errors(&mut self, errors: BTreeMap<String, String>) {
        self.validation_errors = errors;
    }

    pub fn clear_validation_errors(&mut self) {
        self.validation_errors.clear();
    }

    fn recompute(&mut self) {
        self.filtered_view = pipeline::apply(&self.list, &self.filters);
    }

    #[must_use]
    pub fn list(&self) -> &[Entity] {
        &self.list
    }

    #[must_use]
    pub fn filtered_view(&self) -> &[Entity] {
        &self.filtered_view
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Entity> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn validation_errors(&self) -> &BTreeMap<String, String> {
        &self.validation_errors
    }

    #[must_use]
    pub const fn load_state(&self) -> LoadState {
        LoadState::from_flags(self.loading, self.error.is_some(), self.has_loaded)
    }

    /// Looks up an entity of the canonical list by id.
    #[must_use]
    pub fn find(&self, id: u32) -> Option<&Entity> {
        self.list.iter().find(|entity| entity.id == id)
    }
}
