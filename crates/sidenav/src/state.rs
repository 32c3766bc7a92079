//! Folder expansion state.

use std::collections::HashMap;
use std::sync::Mutex;

/// Expansion flags for folder routes.
///
/// Keyed by route; a missing entry means the folder follows the default
/// collapse policy. Entries are written on the first toggle or the first
/// time a folder becomes an ancestor of the active page, and persist for
/// the life of the store, so a folder the reader opened stays open across
/// navigation.
///
/// The store is deliberately separate from the [`Sidebar`](crate::Sidebar)
/// session: inject one with
/// [`with_expansion_state`](crate::Sidebar::with_expansion_state) to share
/// flags between sessions, or keep the per-session default for isolation.
///
/// # Thread Safety
///
/// Internally synchronized; share between sessions with `Arc`.
#[derive(Debug, Default)]
pub struct ExpansionState {
    flags: Mutex<HashMap<String, bool>>,
}

impl ExpansionState {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective expansion flag for a folder.
    ///
    /// Returns the stored flag, or `!default_collapsed` when the folder
    /// was never touched.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn is_expanded(&self, route: &str, default_collapsed: bool) -> bool {
        self.flags
            .lock()
            .unwrap()
            .get(route)
            .copied()
            .unwrap_or(!default_collapsed)
    }

    /// Store an explicit expansion flag.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn set_expanded(&self, route: &str, expanded: bool) {
        self.flags.lock().unwrap().insert(route.to_owned(), expanded);
    }

    /// Force a folder open because the active page lives inside it.
    ///
    /// Idempotent. The stored flag survives navigating away, so the
    /// branch is still open when the reader returns.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn mark_active_ancestor(&self, route: &str) {
        self.set_expanded(route, true);
    }

    /// Flip a folder's effective flag and return the new value.
    ///
    /// The flip is computed and stored under one lock, so concurrent
    /// toggles of the same route serialize cleanly.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn toggle(&self, route: &str, default_collapsed: bool) -> bool {
        let mut flags = self.flags.lock().unwrap();
        let next = !flags.get(route).copied().unwrap_or(!default_collapsed);
        flags.insert(route.to_owned(), next);
        next
    }
}
