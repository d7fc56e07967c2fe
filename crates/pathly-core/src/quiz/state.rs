//! Quiz sessions as immutable state values.
//!
//! [`QuizEngine::submit`] takes a state by reference and returns the next
//! one; the input is never modified. Every derived field (trait profile,
//! matches, insights, progress) is recomputed from the full answer sequence,
//! so replaying the same answers always lands on the same state apart from
//! timestamps and the session id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::catalog::{Catalog, QuestionNode};
use crate::error::QuizError;
use crate::quiz::{
    compute_profile, narrate, progress_percent, recommend, resolve_next, Answer, TraitScore,
};
use crate::storage::EngineConfig;

/// Snapshot of one interactive session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizState {
    /// Session identifier.
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    /// Question awaiting an answer; `None` once complete.
    pub current_question_id: Option<String>,
    /// Answers in submission order.
    pub answers: Vec<Answer>,
    pub trait_profile: Vec<TraitScore>,
    pub matches: Vec<String>,
    /// Insights matching the answers so far (unthrottled).
    pub insights: Vec<String>,
    pub completed: bool,
    pub progress_percent: u8,
    /// Every question id shown, in order.
    pub adaptive_path: Vec<String>,
}

impl QuizState {
    /// Final result, available once the quiz is complete.
    pub fn result(&self) -> Option<QuizResult> {
        if !self.completed {
            return None;
        }
        Some(QuizResult {
            session_id: self.session_id.clone(),
            started_at: self.started_at,
            completed_at: self.answers.last().map(|a| a.submitted_at).unwrap_or(self.started_at),
            answers: self.answers.clone(),
            trait_profile: self.trait_profile.clone(),
            matches: self.matches.clone(),
            adaptive_path: self.adaptive_path.clone(),
        })
    }
}

/// What a finished session hands to the rendering layer and to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub answers: Vec<Answer>,
    pub trait_profile: Vec<TraitScore>,
    pub matches: Vec<String>,
    pub adaptive_path: Vec<String>,
}

impl QuizResult {
    /// Serialize to an opaque JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_blob(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a blob produced by [`QuizResult::to_blob`].
    ///
    /// # Errors
    ///
    /// Returns an error if `blob` is not a serialized result.
    pub fn from_blob(blob: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(blob)
    }
}

/// Runs quiz sessions against a shared catalog.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    catalog: Arc<Catalog>,
    config: EngineConfig,
}

impl QuizEngine {
    /// Create an engine over `catalog`.
    pub fn new(catalog: Arc<Catalog>, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Engine over the built-in catalog with default settings.
    pub fn builtin() -> Self {
        Self::new(Arc::new(Catalog::builtin()), EngineConfig::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start a fresh session.
    pub fn start(&self) -> QuizState {
        let first = self.catalog.first_eligible(&[]).map(|q| q.id.clone());
        let completed = first.is_none();
        let mut state = self.derive(Vec::new(), first.clone(), completed);
        state.session_id = uuid::Uuid::new_v4().to_string();
        state.started_at = Utc::now();
        state.adaptive_path = first.into_iter().collect();
        state
    }

    /// The question awaiting an answer.
    pub fn current_question(&self, state: &QuizState) -> Option<&QuestionNode> {
        state
            .current_question_id
            .as_deref()
            .and_then(|id| self.catalog.question(id))
    }

    /// Submit an answer and return the next state.
    ///
    /// # Errors
    ///
    /// Fails without producing a state if the session is complete, the
    /// question is not the current one, or the value is not an option.
    pub fn submit(
        &self,
        state: &QuizState,
        question_id: &str,
        value: &str,
    ) -> Result<QuizState, QuizError> {
        self.submit_at(state, question_id, value, Utc::now())
    }

    /// [`QuizEngine::submit`] with an explicit timestamp.
    pub fn submit_at(
        &self,
        state: &QuizState,
        question_id: &str,
        value: &str,
        at: DateTime<Utc>,
    ) -> Result<QuizState, QuizError> {
        let current = match &state.current_question_id {
            Some(current) if !state.completed => current,
            _ => return Err(QuizError::AlreadyComplete),
        };
        if current != question_id {
            return Err(QuizError::QuestionMismatch {
                expected: current.clone(),
                got: question_id.to_string(),
            });
        }
        let question = self
            .catalog
            .question(question_id)
            .ok_or_else(|| QuizError::UnknownQuestion(question_id.to_string()))?;
        let option = question
            .find_option(value)
            .ok_or_else(|| QuizError::InvalidChoice {
                question: question_id.to_string(),
                value: value.to_string(),
            })?;

        let mut answers = state.answers.clone();
        answers.push(Answer::snapshot_at(question, option, at));

        let next = resolve_next(&self.catalog, question_id, value, &answers)?;
        let completed = next.is_none();

        let mut adaptive_path = state.adaptive_path.clone();
        if let Some(id) = &next {
            adaptive_path.push(id.clone());
        }

        let mut next_state = self.derive(answers, next, completed);
        next_state.session_id = state.session_id.clone();
        next_state.started_at = state.started_at;
        next_state.adaptive_path = adaptive_path;

        if completed {
            info!(
                session = %next_state.session_id,
                answers = next_state.answers.len(),
                matches = next_state.matches.len(),
                "quiz completed"
            );
        }
        Ok(next_state)
    }

    /// Drive a fresh session through recorded `(question_id, value)` pairs.
    ///
    /// # Errors
    ///
    /// Stops at the first pair the session rejects.
    pub fn replay<Q, V>(&self, answers: &[(Q, V)]) -> Result<QuizState, QuizError>
    where
        Q: AsRef<str>,
        V: AsRef<str>,
    {
        let mut state = self.start();
        for (question_id, value) in answers {
            state = self.submit(&state, question_id.as_ref(), value.as_ref())?;
        }
        Ok(state)
    }

    /// Recommendations with no answers at all.
    pub fn cold_start_matches(&self) -> Vec<String> {
        recommend(&self.catalog, &[], &[], &self.config)
    }

    fn derive(&self, answers: Vec<Answer>, current: Option<String>, completed: bool) -> QuizState {
        let trait_profile = compute_profile(&self.catalog, &answers, &self.config);
        let matches = recommend(&self.catalog, &trait_profile, &answers, &self.config);
        let insights = narrate(&self.catalog, &answers);
        let progress = progress_percent(
            answers.len(),
            self.config.assumed_total_questions,
            self.config.progress_ceiling,
            completed,
        );
        QuizState {
            session_id: String::new(),
            started_at: Utc::now(),
            current_question_id: current,
            answers,
            trait_profile,
            matches,
            insights,
            completed,
            progress_percent: progress,
            adaptive_path: Vec::new(),
        }
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::builtin()
    }
}
