//! Answer records.
//!
//! An [`Answer`] is an immutable snapshot of the option chosen for one
//! question. Weight and trait tag are copied at submission time, so later
//! catalog edits never change the meaning of past answers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{QuestionNode, QuizOption};

/// One submitted answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Question the answer belongs to.
    pub question_id: String,
    /// Value of the chosen option.
    pub chosen_value: String,
    /// Weight copied from the option.
    pub weight: f64,
    /// Trait tag copied from the option.
    pub trait_tag: Option<String>,
    /// When the answer was submitted.
    pub submitted_at: DateTime<Utc>,
}

impl Answer {
    /// Snapshot `option` of `question`, stamped with the current time.
    pub fn snapshot(question: &QuestionNode, option: &QuizOption) -> Self {
        Self::snapshot_at(question, option, Utc::now())
    }

    /// Snapshot with an explicit timestamp.
    pub fn snapshot_at(question: &QuestionNode, option: &QuizOption, at: DateTime<Utc>) -> Self {
        Self {
            question_id: question.id.clone(),
            chosen_value: option.value.clone(),
            weight: option.weight,
            trait_tag: option.trait_tag.clone(),
            submitted_at: at,
        }
    }
}

/// Read-only queries over an ordered answer sequence.
pub trait AnswerHistory {
    /// Whether `question_id` has been answered.
    fn answered(&self, question_id: &str) -> bool;

    /// The value recorded for `question_id`, if answered.
    fn value_of(&self, question_id: &str) -> Option<&str>;

    /// Whether `value` was chosen for any question.
    fn contains_value(&self, value: &str) -> bool;
}

impl AnswerHistory for [Answer] {
    fn answered(&self, question_id: &str) -> bool {
        self.iter().any(|a| a.question_id == question_id)
    }

    fn value_of(&self, question_id: &str) -> Option<&str> {
        self.iter()
            .find(|a| a.question_id == question_id)
            .map(|a| a.chosen_value.as_str())
    }

    fn contains_value(&self, value: &str) -> bool {
        self.iter().any(|a| a.chosen_value == value)
    }
}
