use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::random_id;

/// A single votable option inside a poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: String,
    pub text: String,
    pub votes: u32,
}

impl PollOption {
    /// New option with a fresh random identifier and zero votes.
    pub fn new(text: String) -> Self {
        Self {
            id: random_id(),
            text,
            votes: 0,
        }
    }
}

/// A poll: one question plus its options, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub created_at: DateTime<Utc>,
}

impl Poll {
    /// Build a poll from raw option texts; each text becomes a zero-vote
    /// option with its own random identifier, keeping input order.
    ///
    /// An empty question or option list is accepted structurally; rejecting
    /// those is the caller's policy.
    pub fn new(
        id: String,
        question: String,
        option_texts: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            question,
            options: option_texts.into_iter().map(PollOption::new).collect(),
            created_at,
        }
    }

    /// Sum of votes across all options, for the aggregated results view.
    pub fn total_votes(&self) -> u32 {
        self.options.iter().map(|option| option.votes).sum()
    }
}
