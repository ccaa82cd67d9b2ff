//! Form store module.
//!
//! Provides a context-based store for form definitions and submitted
//! responses. The two collections are mirrored into persistent storage
//! under separate keys.

use std::sync::Arc;

use leptos::prelude::*;

use contracts::domain::common::unique_timestamp_id;
use contracts::domain::form::{Form, FormAnswer, FormResponse, QuestionDraft};

use crate::shared::state::PersistentState;
use crate::shared::storage::StorageBackend;

const FORMS_STORAGE_KEY: &str = "forms";
const RESPONSES_STORAGE_KEY: &str = "formResponses";

/// Form store context type.
#[derive(Clone, Copy)]
pub struct FormStore {
    /// All form definitions in insertion order.
    pub forms: RwSignal<Vec<Form>>,
    /// All submitted responses across forms, in submission order.
    pub responses: RwSignal<Vec<FormResponse>>,
    forms_state: StoredValue<PersistentState<Vec<Form>>>,
    responses_state: StoredValue<PersistentState<Vec<FormResponse>>>,
}

impl FormStore {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        let forms_state = PersistentState::new(Arc::clone(&storage), FORMS_STORAGE_KEY, Vec::new());
        let responses_state = PersistentState::new(storage, RESPONSES_STORAGE_KEY, Vec::new());
        Self {
            forms: forms_state.value(),
            responses: responses_state.value(),
            forms_state: StoredValue::new(forms_state),
            responses_state: StoredValue::new(responses_state),
        }
    }

    /// Create a form from a title, an optional description and question
    /// drafts. Each draft receives a fresh question id. Returns the new
    /// form's id.
    pub fn create_form(
        &self,
        title: &str,
        description: Option<String>,
        drafts: Vec<QuestionDraft>,
    ) -> String {
        let created_at = chrono::Utc::now();
        let id = self.forms.with_untracked(|forms| {
            unique_timestamp_id(created_at, |candidate| {
                forms.iter().any(|form| form.id == candidate)
            })
        });

        let form = Form::new(id.clone(), title.to_string(), description, drafts, created_at);
        log::debug!("created form '{}' with {} questions", id, form.questions.len());

        self.forms.update(|forms| forms.push(form));
        self.commit_forms();
        id
    }

    /// Record a response to a form. Answers are stored as given; neither
    /// the form id nor the question ids are checked against existing
    /// definitions. Returns the new response's id.
    pub fn submit_form_response(&self, form_id: &str, answers: Vec<FormAnswer>) -> String {
        let submitted_at = chrono::Utc::now();
        let id = self.responses.with_untracked(|responses| {
            unique_timestamp_id(submitted_at, |candidate| {
                responses.iter().any(|response| response.id == candidate)
            })
        });

        let response = FormResponse {
            id: id.clone(),
            form_id: form_id.to_string(),
            answers,
            submitted_at,
        };
        log::debug!("recorded response '{}' for form '{}'", id, form_id);

        self.responses.update(|responses| responses.push(response));
        self.commit_responses();
        id
    }

    /// Delete a form and every response submitted to it. Returns `false`
    /// without touching either collection when no form matches.
    pub fn delete_form(&self, form_id: &str) -> bool {
        let exists = self
            .forms
            .with_untracked(|forms| forms.iter().any(|form| form.id == form_id));
        if !exists {
            return false;
        }

        log::debug!("deleted form '{}' and its responses", form_id);
        self.forms.update(|forms| forms.retain(|form| form.id != form_id));
        self.responses
            .update(|responses| responses.retain(|response| response.form_id != form_id));
        self.commit_forms();
        self.commit_responses();
        true
    }

    /// Reactive lookup of a form by id.
    pub fn get_form_by_id(&self, id: &str) -> Option<Form> {
        self.forms
            .with(|forms| forms.iter().find(|form| form.id == id).cloned())
    }

    /// Reactive list of the responses submitted to one form, in
    /// submission order.
    pub fn get_responses_by_form_id(&self, form_id: &str) -> Vec<FormResponse> {
        self.responses.with(|responses| {
            responses
                .iter()
                .filter(|response| response.form_id == form_id)
                .cloned()
                .collect()
        })
    }

    fn commit_forms(&self) {
        self.forms_state.with_value(|state| state.commit());
    }

    fn commit_responses(&self) {
        self.responses_state.with_value(|state| state.commit());
    }
}

/// Hook to use the form store.
pub fn use_form_store() -> FormStore {
    use_context::<FormStore>().expect("FormStore not found. Wrap your app with StateProvider.")
}
