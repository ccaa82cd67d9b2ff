use std::sync::Arc;

use leptos::prelude::*;

use crate::shared::form::FormStore;
use crate::shared::poll::PollStore;
use crate::shared::storage::{LocalStorageBackend, StorageBackend};
use crate::shared::theme::{system_prefers_dark, ThemeStore};

/// Provides the poll, form and theme stores to children via context.
///
/// `on_theme_change` receives the dark-mode flag on startup and after
/// every actual change; hosts hang their appearance switching on it.
#[component]
pub fn StateProvider(
    #[prop(optional)] on_theme_change: Option<Callback<bool>>,
    children: Children,
) -> impl IntoView {
    // One storage backend shared by all stores, each under its own keys.
    let storage: Arc<dyn StorageBackend> = Arc::new(LocalStorageBackend);

    provide_context(PollStore::new(Arc::clone(&storage)));
    provide_context(FormStore::new(Arc::clone(&storage)));
    provide_context(ThemeStore::new(
        storage,
        system_prefers_dark(),
        on_theme_change,
    ));

    children()
}
