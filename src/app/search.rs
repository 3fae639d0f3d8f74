//! Debounced search controller.
//!
//! Converts raw text-input events into a validated, rate-limited sequence of
//! committed search terms. The controller owns a single pending [`TimerHandle`];
//! every input replaces it, so a burst of inputs inside one idle window yields
//! at most one commit carrying the last value.
//!
//! Time is passed in explicitly. The host schedules a wakeup for
//! [`SearchController::next_deadline`] and calls [`SearchController::poll`]
//! when it fires (or on any periodic tick); a poll before the deadline, or
//! after the handle was replaced or cancelled, does nothing.
//!
//! # Example
//!
//! ```rust
//! use pokecatalog::app::SearchController;
//! use std::time::{Duration, Instant};
//!
//! let mut search = SearchController::new(Duration::from_millis(300));
//! let start = Instant::now();
//! search.input("pi", start);
//! search.input("pika", start + Duration::from_millis(100));
//!
//! assert_eq!(search.poll(start + Duration::from_millis(350)), None);
//! assert_eq!(search.poll(start + Duration::from_millis(400)).as_deref(), Some("pika"));
//! ```

use crate::validation::{search_rules, validate_field, FieldValue, ValidationRule};
use std::time::{Duration, Instant};

/// Default idle window before a raw value is committed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// An armed timer owned by the controller.
///
/// `generation` increases with every re-arm, so a stale wakeup scheduled by
/// the host for an older handle can be told apart from the live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    pub generation: u64,
    pub deadline: Instant,
}

/// Rate-limits raw search input into validated commits.
#[derive(Debug, Clone)]
pub struct SearchController {
    window: Duration,
    rules: Vec<ValidationRule>,
    raw: String,
    inline_error: Option<String>,
    last_committed: String,
    pending: Option<TimerHandle>,
    generation: u64,
    torn_down: bool,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl SearchController {
    /// Creates a controller validating against the search rules.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            rules: search_rules(),
            raw: String::new(),
            inline_error: None,
            last_committed: String::new(),
            pending: None,
            generation: 0,
            torn_down: false,
        }
    }

    /// Seeds the last committed term, e.g. from filters already in the store.
    #[must_use]
    pub fn with_committed(mut self, term: impl Into<String>) -> Self {
        self.last_committed = term.into();
        self.raw.clone_from(&self.last_committed);
        self
    }

    /// Aligns the last committed term with the store after the search term
    /// was changed through another path (e.g. clearing all filters).
    ///
    /// The raw input and any pending timer are left as they are.
    pub fn sync_committed(&mut self, term: &str) {
        if self.last_committed != term {
            tracing::trace!(from = %self.last_committed, to = %term, "search commit resynced");
            self.last_committed = term.to_string();
        }
    }

    /// Records a raw input event and re-arms the timer.
    ///
    /// The value is validated immediately for inline feedback; the returned
    /// message (if any) does not affect whether the timer is armed. After
    /// [`teardown`](Self::teardown) inputs are ignored.
    pub fn input(&mut self, raw: impl Into<String>, now: Instant) -> Option<&str> {
        if self.torn_down {
            tracing::debug!("search input after teardown ignored");
            return None;
        }

        self.raw = raw.into();
        self.inline_error = validate_field(&FieldValue::Text(self.raw.clone()), &self.rules).error;
        self.arm(now);

        self.inline_error.as_deref()
    }

    fn arm(&mut self, now: Instant) {
        self.cancel();
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(TimerHandle {
            generation: self.generation,
            deadline: now + self.window,
        });
    }

    /// Fires the pending timer if its deadline has passed.
    ///
    /// Returns the term to commit, or `None` when nothing is due, the latest
    /// value is invalid, or it equals the last committed term.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let handle = self.pending?;
        if now < handle.deadline {
            return None;
        }
        self.fire(handle.generation)
    }

    /// Fires a specific timer generation, as delivered by a host timer.
    ///
    /// Stale generations are ignored.
    pub fn fire(&mut self, generation: u64) -> Option<String> {
        let handle = self.pending?;
        if handle.generation != generation {
            tracing::trace!(generation, live = handle.generation, "stale search timer ignored");
            return None;
        }
        self.pending = None;
        self.commit()
    }

    fn commit(&mut self) -> Option<String> {
        let outcome = validate_field(&FieldValue::Text(self.raw.clone()), &self.rules);
        if !outcome.valid {
            tracing::debug!(error = ?outcome.error, "search term rejected");
            return None;
        }
        if self.raw == self.last_committed {
            tracing::trace!("search term unchanged");
            return None;
        }

        self.last_committed.clone_from(&self.raw);
        tracing::debug!(term = %self.last_committed, "search term committed");
        Some(self.last_committed.clone())
    }

    /// Clears the input, cancelling any pending timer, and commits the empty
    /// term right away if it differs from the last commit.
    pub fn clear(&mut self) -> Option<String> {
        if self.torn_down {
            return None;
        }
        self.cancel();
        self.raw.clear();
        self.inline_error = None;
        self.commit()
    }

    /// Drops the pending timer without committing.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Cancels any pending timer for good; later inputs and polls do nothing.
    pub fn teardown(&mut self) {
        self.cancel();
        self.torn_down = true;
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|handle| handle.deadline)
    }

    #[must_use]
    pub const fn pending(&self) -> Option<TimerHandle> {
        self.pending
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Inline validation message for the latest raw input.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.inline_error.as_deref()
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn last_committed(&self) -> &str {
        &self.last_committed
    }

    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }
}
