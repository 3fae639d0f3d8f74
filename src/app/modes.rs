//! Load state of the entity store.
//!
//! The store keeps `loading` and `error` as plain flags written directly by
//! commands. [`LoadState`] is the state machine view derived from them:
//!
//! ```text
//! Idle ──▶ Loading ──▶ Loaded
//!             ▲  └───▶ Errored
//!             └──────────┘ (new bulk load from Loaded or Errored)
//! ```
//!
//! Filter changes never move between these states.
//!
//! # Example
//!
//! ```rust
//! use pokecatalog::app::{CatalogState, LoadState};
//!
//! let mut state = CatalogState::new();
//! assert_eq!(state.load_state(), LoadState::Idle);
//! state.set_loading(true);
//! assert_eq!(state.load_state(), LoadState::Loading);
//! ```

/// Current phase of the bulk-load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing has been requested or loaded yet.
    Idle,

    /// A bulk load is in flight.
    ///
    /// The filtered view keeps showing whatever was loaded previously.
    Loading,

    /// At least one record set has been accepted and no error is pending.
    Loaded,

    /// The last load failed; the previously loaded list is preserved.
    Errored,
}

impl LoadState {
    /// Derives the state from the store flags.
    ///
    /// `loading` wins over `error` so a retry shows as in flight even before
    /// the caller clears the previous error.
    #[must_use]
    pub const fn from_flags(loading: bool, has_error: bool, has_loaded: bool) -> Self {
        if loading {
            Self::Loading
        } else if has_error {
            Self::Errored
        } else if has_loaded {
            Self::Loaded
        } else {
            Self::Idle
        }
    }
}
