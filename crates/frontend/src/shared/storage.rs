//! Storage capability for the persistent state layer.
//!
//! Stores never touch the browser directly; they go through an injected
//! [`StorageBackend`]. The real backend wraps `localStorage`; tests run
//! against [`MemoryBackend`]; non-interactive contexts (pre-render passes,
//! headless embeddings) use [`NoopBackend`], which reads as absent and
//! discards writes.

use std::collections::HashMap;
use std::sync::Mutex;

/// A string-keyed, string-valued persistent store. `read` returning `None`
/// is the absent case; `write` overwrites unconditionally.
pub trait StorageBackend: Send + Sync + 'static {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Backend over the browser's `localStorage`. The storage handle is
/// acquired per call; without a window (or with storage access denied)
/// reads are absent and writes are dropped.
pub struct LocalStorageBackend;

impl StorageBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write for key '{}' failed", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory backend over a mutex-guarded map.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Backend for contexts without persistent storage: reads are absent,
/// writes and removals are discarded.
pub struct NoopBackend;

impl StorageBackend for NoopBackend {
    fn read(&self, _key: &str) -> Option<String> {
        None
    }

    fn write(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}
