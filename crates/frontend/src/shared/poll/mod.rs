//! Poll store module.
//!
//! Provides a context-based store that manages the poll list and mirrors
//! it into persistent storage as a JSON snapshot.

use std::sync::Arc;

use leptos::prelude::*;

use contracts::domain::common::unique_timestamp_id;
use contracts::domain::poll::Poll;

use crate::shared::state::PersistentState;
use crate::shared::storage::StorageBackend;

const POLLS_STORAGE_KEY: &str = "polls";

/// Poll store context type.
#[derive(Clone, Copy)]
pub struct PollStore {
    /// All polls in insertion order.
    pub polls: RwSignal<Vec<Poll>>,
    state: StoredValue<PersistentState<Vec<Poll>>>,
}

impl PollStore {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        let state = PersistentState::new(storage, POLLS_STORAGE_KEY, Vec::new());
        Self {
            polls: state.value(),
            state: StoredValue::new(state),
        }
    }

    /// Create a poll from a question and its option texts, each option
    /// starting at zero votes. Returns the new poll's id.
    pub fn create_poll(&self, question: &str, option_texts: Vec<String>) -> String {
        let created_at = chrono::Utc::now();
        let id = self.polls.with_untracked(|polls| {
            unique_timestamp_id(created_at, |candidate| {
                polls.iter().any(|poll| poll.id == candidate)
            })
        });

        let poll = Poll::new(id.clone(), question.to_string(), option_texts, created_at);
        log::debug!("created poll '{}' with {} options", id, poll.options.len());

        self.polls.update(|polls| polls.push(poll));
        self.commit();
        id
    }

    /// Register one vote for an option. Returns `false` without mutating
    /// or persisting anything when the poll or the option does not exist.
    pub fn vote_on_poll(&self, poll_id: &str, option_id: &str) -> bool {
        let target_exists = self.polls.with_untracked(|polls| {
            polls
                .iter()
                .find(|poll| poll.id == poll_id)
                .is_some_and(|poll| poll.options.iter().any(|option| option.id == option_id))
        });
        if !target_exists {
            return false;
        }

        self.polls.update(|polls| {
            if let Some(option) = polls
                .iter_mut()
                .find(|poll| poll.id == poll_id)
                .and_then(|poll| poll.options.iter_mut().find(|option| option.id == option_id))
            {
                option.votes += 1;
            }
        });
        self.commit();
        true
    }

    /// Delete a poll by id. Returns `false` without touching storage when
    /// no poll matches.
    pub fn delete_poll(&self, poll_id: &str) -> bool {
        let exists = self
            .polls
            .with_untracked(|polls| polls.iter().any(|poll| poll.id == poll_id));
        if !exists {
            return false;
        }

        log::debug!("deleted poll '{}'", poll_id);
        self.polls.update(|polls| polls.retain(|poll| poll.id != poll_id));
        self.commit();
        true
    }

    /// Reactive lookup of a poll by id.
    pub fn get_poll_by_id(&self, id: &str) -> Option<Poll> {
        self.polls
            .with(|polls| polls.iter().find(|poll| poll.id == id).cloned())
    }

    fn commit(&self) {
        self.state.with_value(|state| state.commit());
    }
}

/// Hook to use the poll store.
pub fn use_poll_store() -> PollStore {
    use_context::<PollStore>().expect("PollStore not found. Wrap your app with StateProvider.")
}
