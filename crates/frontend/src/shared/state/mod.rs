//! Generic reactive state with snapshot persistence.

use std::sync::Arc;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::storage::StorageBackend;

/// A reactive value mirrored into one [`StorageBackend`] key as a JSON
/// snapshot.
///
/// The signal is hydrated from the stored snapshot once, at construction.
/// Mutations go through the signal as usual and stay in memory until
/// [`commit`](Self::commit) writes the current value back, so callers
/// decide which mutations deserve persistence.
pub struct PersistentState<T>
where
    T: Clone + Send + Sync + 'static,
{
    value: RwSignal<T>,
    key: String,
    storage: Arc<dyn StorageBackend>,
}

impl<T> Clone for PersistentState<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            key: self.key.clone(),
            storage: Arc::clone(&self.storage),
        }
    }
}

impl<T> PersistentState<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Decodes the snapshot stored under `key`, falling back to `default`
    /// when the key is absent or its content does not parse.
    pub fn new(storage: Arc<dyn StorageBackend>, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let initial = match storage.read(&key) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    log::error!("failed to parse stored state for key '{}': {}", key, err);
                    default
                }
            },
            None => default,
        };

        Self {
            value: RwSignal::new(initial),
            key,
            storage,
        }
    }

    /// The underlying signal. Reads and writes on it are ordinary signal
    /// operations and never touch storage.
    pub fn value(&self) -> RwSignal<T> {
        self.value
    }

    /// Serializes the current value and writes it under the state's key.
    pub fn commit(&self) {
        match self.value.with_untracked(|value| serde_json::to_string(value)) {
            Ok(json) => self.storage.write(&self.key, &json),
            Err(err) => log::error!("failed to encode state for key '{}': {}", self.key, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryBackend;

    #[test]
    fn test_starts_from_default_when_key_is_absent() {
        let owner = Owner::new();
        owner.set();

        let storage = Arc::new(MemoryBackend::new());
        let state = PersistentState::new(storage, "counters", vec![1u32, 2]);

        assert_eq!(state.value().get_untracked(), vec![1, 2]);
    }

    #[test]
    fn test_hydrates_from_stored_snapshot() {
        let owner = Owner::new();
        owner.set();

        let storage = Arc::new(MemoryBackend::new());
        storage.write("counters", "[7,8,9]");

        let state = PersistentState::new(storage, "counters", Vec::<u32>::new());
        assert_eq!(state.value().get_untracked(), vec![7, 8, 9]);
    }

    #[test]
    fn test_corrupt_snapshot_falls_back_to_default() {
        let owner = Owner::new();
        owner.set();

        let storage: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());
        storage.write("counters", "{not json");

        let state = PersistentState::new(Arc::clone(&storage), "counters", vec![5u32]);
        assert_eq!(state.value().get_untracked(), vec![5]);
        // The bad snapshot stays untouched until the next commit.
        assert_eq!(storage.read("counters").as_deref(), Some("{not json"));
    }

    #[test]
    fn test_mutation_is_not_persisted_until_commit() {
        let owner = Owner::new();
        owner.set();

        let storage: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());
        let state = PersistentState::new(Arc::clone(&storage), "counters", Vec::<u32>::new());

        state.value().update(|v| v.push(42));
        assert_eq!(storage.read("counters"), None);

        state.commit();
        assert_eq!(storage.read("counters").as_deref(), Some("[42]"));
    }

    #[test]
    fn test_commit_snapshot_survives_rebuild() {
        let owner = Owner::new();
        owner.set();

        let storage: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());
        let state = PersistentState::new(Arc::clone(&storage), "counters", Vec::<u32>::new());
        state.value().update(|v| v.extend([3, 4]));
        state.commit();

        let rebuilt = PersistentState::new(storage, "counters", Vec::<u32>::new());
        assert_eq!(rebuilt.value().get_untracked(), vec![3, 4]);
    }
}
