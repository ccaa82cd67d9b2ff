//! Theme store module.
//!
//! Provides a context-based dark-mode preference persisted between
//! sessions. Applying the preference to the page is the host's job: the
//! store pushes every actual change through an optional callback and
//! never touches the DOM itself.

use std::sync::Arc;

use leptos::prelude::*;

use crate::shared::state::PersistentState;
use crate::shared::storage::StorageBackend;

const DARK_MODE_STORAGE_KEY: &str = "darkMode";

/// Reports whether the host prefers a dark appearance. Falls back to
/// light when the media query is unavailable.
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Theme store context type.
#[derive(Clone, Copy)]
pub struct ThemeStore {
    /// Current dark-mode flag.
    pub dark_mode: RwSignal<bool>,
    state: StoredValue<PersistentState<bool>>,
    on_change: StoredValue<Option<Callback<bool>>>,
}

impl ThemeStore {
    /// Build the store. A persisted preference wins over `fallback_dark`;
    /// the resulting flag is pushed to `on_change` right away so the host
    /// starts out in sync.
    pub fn new(
        storage: Arc<dyn StorageBackend>,
        fallback_dark: bool,
        on_change: Option<Callback<bool>>,
    ) -> Self {
        let state = PersistentState::new(storage, DARK_MODE_STORAGE_KEY, fallback_dark);
        let store = Self {
            dark_mode: state.value(),
            state: StoredValue::new(state),
            on_change: StoredValue::new(on_change),
        };
        store.apply(store.dark_mode.get_untracked());
        store
    }

    /// Flip the preference, persist it and push it to the host.
    pub fn toggle_dark_mode(&self) {
        self.set_dark_mode(!self.dark_mode.get_untracked());
    }

    /// Set the preference to an explicit value. Setting the current value
    /// again is a complete no-op returning `false`; an actual change is
    /// persisted, pushed to the host, and returns `true`.
    pub fn set_dark_mode(&self, value: bool) -> bool {
        if self.dark_mode.get_untracked() == value {
            return false;
        }

        self.dark_mode.set(value);
        self.state.with_value(|state| state.commit());
        self.apply(value);
        true
    }

    fn apply(&self, value: bool) {
        if let Some(callback) = self.on_change.get_value() {
            callback.run(value);
        }
    }
}

/// Hook to use the theme store.
pub fn use_theme_store() -> ThemeStore {
    use_context::<ThemeStore>().expect("ThemeStore not found. Wrap your app with StateProvider.")
}
