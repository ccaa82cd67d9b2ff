use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::random_id;

// ============================================================================
// Questions
// ============================================================================

/// Supported question kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    ShortText,
    LongText,
    Number,
    SingleChoice,
}

/// A question inside a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormQuestion {
    pub id: String,
    pub text: String,
    pub kind: QuestionKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub placeholder: Option<String>,
    /// Choice labels; populated only for single-choice questions.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub choices: Option<Vec<String>>,
}

/// Author-side question payload: a [`FormQuestion`] before an identifier is
/// assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub text: String,
    pub kind: QuestionKind,
    pub required: bool,
    pub placeholder: Option<String>,
    pub choices: Option<Vec<String>>,
}

impl FormQuestion {
    /// Materialize a draft with a fresh random identifier.
    pub fn from_draft(draft: QuestionDraft) -> Self {
        Self {
            id: random_id(),
            text: draft.text,
            kind: draft.kind,
            required: draft.required,
            placeholder: draft.placeholder,
            choices: draft.choices,
        }
    }
}

// ============================================================================
// Form
// ============================================================================

/// A multi-question form definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    pub questions: Vec<FormQuestion>,
    pub created_at: DateTime<Utc>,
}

impl Form {
    /// Build a form from question drafts; each draft receives its own
    /// random identifier, keeping input order.
    pub fn new(
        id: String,
        title: String,
        description: Option<String>,
        drafts: Vec<QuestionDraft>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            questions: drafts.into_iter().map(FormQuestion::from_draft).collect(),
            created_at,
        }
    }

    /// Find a question by identifier.
    pub fn question_by_id(&self, id: &str) -> Option<&FormQuestion> {
        self.questions.iter().find(|question| question.id == id)
    }
}

// ============================================================================
// Responses
// ============================================================================

/// A submitted answer value: free text or a number. Serialized untagged, so
/// the JSON is a bare string or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Number(f64),
}

impl AnswerValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) => Some(text),
            AnswerValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Text(_) => None,
            AnswerValue::Number(value) => Some(*value),
        }
    }
}

/// One answered question inside a response. The `question_id` is taken
/// as-is; submissions are not validated against the form's question set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormAnswer {
    pub question_id: String,
    pub answer: AnswerValue,
}

/// A response to a form, referencing the form by identifier only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub id: String,
    pub form_id: String,
    pub answers: Vec<FormAnswer>,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_drafts() -> Vec<QuestionDraft> {
        vec![
            QuestionDraft {
                text: "Name?".to_string(),
                kind: QuestionKind::ShortText,
                required: true,
                placeholder: Some("Your name".to_string()),
                choices: None,
            },
            QuestionDraft {
                text: "Favorite color?".to_string(),
                kind: QuestionKind::SingleChoice,
                required: false,
                placeholder: None,
                choices: Some(vec!["Red".to_string(), "Blue".to_string()]),
            },
        ]
    }

    fn sample_form() -> Form {
        Form::new(
            "1700000000000".to_string(),
            "Survey".to_string(),
            Some("desc".to_string()),
            sample_drafts(),
            Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        )
    }

    #[test]
    fn test_drafts_receive_distinct_ids_and_keep_fields() {
        let form = sample_form();
        assert_eq!(form.questions.len(), 2);
        assert_ne!(form.questions[0].id, form.questions[1].id);
        assert_eq!(form.questions[0].text, "Name?");
        assert_eq!(form.questions[0].kind, QuestionKind::ShortText);
        assert!(form.questions[0].required);
        assert_eq!(
            form.questions[1].choices.as_deref(),
            Some(["Red".to_string(), "Blue".to_string()].as_slice())
        );
    }

    #[test]
    fn test_question_by_id() {
        let form = sample_form();
        let id = form.questions[1].id.clone();
        assert_eq!(form.question_by_id(&id).unwrap().text, "Favorite color?");
        assert!(form.question_by_id("missing").is_none());
    }

    #[test]
    fn test_question_kind_wire_names() {
        let json = serde_json::to_string(&QuestionKind::SingleChoice).unwrap();
        assert_eq!(json, "\"single-choice\"");
        let kind: QuestionKind = serde_json::from_str("\"long-text\"").unwrap();
        assert_eq!(kind, QuestionKind::LongText);
    }

    #[test]
    fn test_answer_value_is_untagged() {
        assert_eq!(
            serde_json::to_string(&AnswerValue::Text("Alice".to_string())).unwrap(),
            "\"Alice\""
        );
        assert_eq!(
            serde_json::from_str::<AnswerValue>("42").unwrap(),
            AnswerValue::Number(42.0)
        );
        assert_eq!(
            serde_json::from_str::<AnswerValue>("\"42\"").unwrap(),
            AnswerValue::Text("42".to_string())
        );
        assert_eq!(AnswerValue::Number(4.5).as_number(), Some(4.5));
        assert_eq!(AnswerValue::Text("a".to_string()).as_text(), Some("a"));
    }

    #[test]
    fn test_collections_round_trip_through_json() {
        let form = sample_form();
        let response = FormResponse {
            id: "1700000000001".to_string(),
            form_id: form.id.clone(),
            answers: vec![
                FormAnswer {
                    question_id: form.questions[0].id.clone(),
                    answer: AnswerValue::Text("Alice".to_string()),
                },
                FormAnswer {
                    question_id: form.questions[1].id.clone(),
                    answer: AnswerValue::Number(2.0),
                },
            ],
            submitted_at: Utc.timestamp_millis_opt(1_700_000_000_500).unwrap(),
        };

        let forms_json = serde_json::to_string(&vec![form.clone()]).unwrap();
        assert!(forms_json.contains("\"createdAt\""));
        let decoded_forms: Vec<Form> = serde_json::from_str(&forms_json).unwrap();
        assert_eq!(decoded_forms, vec![form]);

        let responses_json = serde_json::to_string(&vec![response.clone()]).unwrap();
        assert!(responses_json.contains("\"submittedAt\""));
        assert!(responses_json.contains("\"formId\""));
        let decoded: Vec<FormResponse> = serde_json::from_str(&responses_json).unwrap();
        assert_eq!(decoded, vec![response]);
    }
}
