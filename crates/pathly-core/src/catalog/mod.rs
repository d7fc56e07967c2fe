//! Question catalog and reference data.
//!
//! The catalog is a directed graph of [`QuestionNode`]s plus the reference
//! tables scoring needs. It is plain data: it can be built in code
//! ([`Catalog::builtin`]), or loaded from TOML/JSON.
//!
//! Structural problems that make lookup ambiguous (duplicate ids, duplicate
//! option values, bad weights) are rejected at construction. Dangling
//! references are tolerated and surfaced by [`Catalog::lint`]; the resolver
//! simply never reaches the affected nodes.

mod builtin;
mod condition;
mod reference;

pub use condition::Condition;
pub use reference::{InsightRule, ScenarioRule, TraitDefinition};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::CatalogError;
use crate::quiz::{Answer, AnswerHistory};

/// Classification tag of a question. Not used for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    /// Who the user is (life stage).
    Identity,
    /// Branch-specific direction questions.
    Direction,
    /// Subjects and interests.
    Interests,
    /// How the user prefers to work.
    WorkStyle,
    /// What the user values.
    Values,
    /// Commitment and planning horizon.
    #[default]
    Planning,
}

impl QuestionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Direction => "direction",
            Self::Interests => "interests",
            Self::WorkStyle => "work_style",
            Self::Values => "values",
            Self::Planning => "planning",
        }
    }
}

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    /// Display label.
    pub text: String,
    /// Unique-within-node key.
    pub value: String,
    /// Non-negative multiplier applied to trait scoring.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Trait this option feeds, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trait_tag: Option<String>,
    /// Explicit routing override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

fn default_weight() -> f64 {
    1.0
}

impl QuizOption {
    pub fn new(text: &str, value: &str) -> Self {
        Self {
            text: text.to_string(),
            value: value.to_string(),
            weight: default_weight(),
            trait_tag: None,
            next: None,
        }
    }

    pub fn with_trait(mut self, trait_tag: &str, weight: f64) -> Self {
        self.trait_tag = Some(trait_tag.to_string());
        self.weight = weight;
        self
    }

    pub fn then(mut self, next: &str) -> Self {
        self.next = Some(next.to_string());
        self
    }
}

/// One step in the quiz graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionNode {
    /// Stable identity within the catalog.
    pub id: String,
    /// Display text.
    pub prompt: String,
    #[serde(default)]
    pub category: QuestionCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Options in display order.
    pub options: Vec<QuizOption>,
    /// Questions that must be answered before this one is offered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
    /// Extra eligibility predicate over the full history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl QuestionNode {
    pub fn new(id: &str, prompt: &str, category: QuestionCategory) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            category,
            help: None,
            options: Vec::new(),
            prerequisites: Vec::new(),
            condition: None,
        }
    }

    pub fn option(mut self, option: QuizOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn requires(mut self, question_id: &str) -> Self {
        self.prerequisites.push(question_id.to_string());
        self
    }

    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }

    /// Find an option by value.
    pub fn find_option(&self, value: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Whether this node may be offered given `history`.
    ///
    /// Unanswered, all prerequisites answered, and the condition (if any)
    /// holds. A prerequisite naming a question that does not exist can never
    /// be satisfied, so such a node is never eligible.
    pub fn is_eligible(&self, history: &[Answer]) -> bool {
        !history.answered(&self.id)
            && self.prerequisites.iter().all(|p| history.answered(p))
            && self.condition.as_ref().map_or(true, |c| c.evaluate(history))
    }
}

/// A tolerated authoring problem found by [`Catalog::lint`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    DanglingPrerequisite { question: String, missing: String },
    DanglingNext { question: String, option: String, missing: String },
    UnknownConditionQuestion { question: String, missing: String },
    UnknownTraitTag { question: String, option: String, trait_tag: String },
    UnknownScenarioField { field: String },
    UnknownScenarioQuestion { question: String },
    UnknownBackfillField { field: String },
    UnknownLifeStageQuestion { question: String },
}

impl std::fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogIssue::DanglingPrerequisite { question, missing } => {
                write!(f, "{question}: prerequisite '{missing}' does not exist; node is unreachable")
            }
            CatalogIssue::DanglingNext { question, option, missing } => {
                write!(f, "{question}/{option}: next '{missing}' does not exist")
            }
            CatalogIssue::UnknownConditionQuestion { question, missing } => {
                write!(f, "{question}: condition refers to unknown question '{missing}'")
            }
            CatalogIssue::UnknownTraitTag { question, option, trait_tag } => {
                write!(f, "{question}/{option}: unknown trait tag '{trait_tag}'")
            }
            CatalogIssue::UnknownScenarioField { field } => {
                write!(f, "scenario rule uses unknown career field '{field}'")
            }
            CatalogIssue::UnknownScenarioQuestion { question } => {
                write!(f, "scenario rule uses unknown question '{question}'")
            }
            CatalogIssue::UnknownBackfillField { field } => {
                write!(f, "backfill uses unknown career field '{field}'")
            }
            CatalogIssue::UnknownLifeStageQuestion { question } => {
                write!(f, "life-stage question '{question}' does not exist")
            }
        }
    }
}

/// The static dataset the engine runs against.
///
/// Deserializing goes through [`RawCatalog`], so every catalog read from
/// any serde format is validated and indexed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    /// Questions in static traversal order.
    pub questions: Vec<QuestionNode>,
    /// Trait definitions in declaration order.
    pub traits: Vec<TraitDefinition>,
    /// Career field -> careers, in declaration order.
    pub career_fields: IndexMap<String, Vec<String>>,
    pub scenarios: Vec<ScenarioRule>,
    pub insights: Vec<InsightRule>,
    /// Question whose answer is the life-stage signal.
    pub life_stage_question: String,
    /// Fields drawn from, in order, when recommendations are sparse.
    pub backfill_fields: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

/// Catalog as written in a file, before validation.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    questions: Vec<QuestionNode>,
    #[serde(default)]
    traits: Vec<TraitDefinition>,
    #[serde(default)]
    career_fields: IndexMap<String, Vec<String>>,
    #[serde(default)]
    scenarios: Vec<ScenarioRule>,
    #[serde(default)]
    insights: Vec<InsightRule>,
    #[serde(default = "default_life_stage_question")]
    life_stage_question: String,
    #[serde(default)]
    backfill_fields: Vec<String>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = CatalogError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        let mut catalog = Self {
            questions: raw.questions,
            traits: raw.traits,
            career_fields: raw.career_fields,
            scenarios: raw.scenarios,
            insights: raw.insights,
            life_stage_question: raw.life_stage_question,
            backfill_fields: raw.backfill_fields,
            index: HashMap::new(),
        };
        catalog.reindex()?;
        Ok(catalog)
    }
}

fn default_life_stage_question() -> String {
    "student_lifecycle".to_string()
}

impl Catalog {
    /// Build a catalog, validating structure.
    pub fn new(
        questions: Vec<QuestionNode>,
        traits: Vec<TraitDefinition>,
        career_fields: IndexMap<String, Vec<String>>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self {
            questions,
            traits,
            career_fields,
            scenarios: Vec::new(),
            insights: Vec::new(),
            life_stage_question: default_life_stage_question(),
            backfill_fields: Vec::new(),
            index: HashMap::new(),
        };
        catalog.reindex()?;
        Ok(catalog)
    }

    pub fn with_scenarios(mut self, scenarios: Vec<ScenarioRule>) -> Self {
        self.scenarios = scenarios;
        self
    }

    pub fn with_insights(mut self, insights: Vec<InsightRule>) -> Self {
        self.insights = insights;
        self
    }

    pub fn with_backfill(mut self, fields: &[&str]) -> Self {
        self.backfill_fields = fields.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_life_stage_question(mut self, question_id: &str) -> Self {
        self.life_stage_question = question_id.to_string();
        self
    }

    /// The dataset shipped with the crate.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    pub fn from_toml_str(s: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(s)?;
        Self::try_from(raw)
    }

    pub fn from_json_str(s: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(s)?;
        Self::try_from(raw)
    }

    /// Load from a `.toml` or `.json` file. Lint issues are logged.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_toml_str(&content)?,
        };
        for issue in catalog.lint() {
            tracing::warn!(path = %path.display(), "catalog issue: {issue}");
        }
        Ok(catalog)
    }

    fn reindex(&mut self) -> Result<(), CatalogError> {
        self.validate()?;
        self.index = Self::index_questions(&self.questions);
        Ok(())
    }

    fn index_questions(questions: &[QuestionNode]) -> HashMap<String, usize> {
        let mut index = HashMap::with_capacity(questions.len());
        for (pos, question) in questions.iter().enumerate() {
            index.entry(question.id.clone()).or_insert(pos);
        }
        index
    }

    /// Check the structural rules: unique question ids, unique option
    /// values per node, finite non-negative weights.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::with_capacity(self.questions.len());
        for question in &self.questions {
            if !ids.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
            let mut seen = HashSet::new();
            for option in &question.options {
                if !seen.insert(option.value.as_str()) {
                    return Err(CatalogError::DuplicateOption {
                        question: question.id.clone(),
                        value: option.value.clone(),
                    });
                }
                if !option.weight.is_finite() || option.weight < 0.0 {
                    return Err(CatalogError::InvalidWeight {
                        question: question.id.clone(),
                        value: option.value.clone(),
                        weight: option.weight,
                    });
                }
            }
        }
        Ok(())
    }

    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&QuestionNode> {
        self.index.get(id).map(|&pos| &self.questions[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn trait_definition(&self, key: &str) -> Option<&TraitDefinition> {
        self.traits.iter().find(|t| t.key == key)
    }

    /// Careers of a field, empty when the field is unknown.
    pub fn careers_in(&self, field: &str) -> &[String] {
        self.career_fields
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First eligible node in catalog order.
    pub fn first_eligible(&self, history: &[Answer]) -> Option<&QuestionNode> {
        self.questions.iter().find(|q| q.is_eligible(history))
    }

    /// Report tolerated authoring problems.
    pub fn lint(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let trait_keys: HashSet<&str> = self.traits.iter().map(|t| t.key.as_str()).collect();

        if !self.contains(&self.life_stage_question) {
            issues.push(CatalogIssue::UnknownLifeStageQuestion {
                question: self.life_stage_question.clone(),
            });
        }

        for question in &self.questions {
            for prereq in &question.prerequisites {
                if !self.contains(prereq) {
                    issues.push(CatalogIssue::DanglingPrerequisite {
                        question: question.id.clone(),
                        missing: prereq.clone(),
                    });
                }
            }
            if let Some(condition) = &question.condition {
                for referenced in condition.referenced_questions() {
                    if !self.contains(referenced) {
                        issues.push(CatalogIssue::UnknownConditionQuestion {
                            question: question.id.clone(),
                            missing: referenced.to_string(),
                        });
                    }
                }
            }
            for option in &question.options {
                if let Some(next) = &option.next {
                    if !self.contains(next) {
                        issues.push(CatalogIssue::DanglingNext {
                            question: question.id.clone(),
                            option: option.value.clone(),
                            missing: next.clone(),
                        });
                    }
                }
                if let Some(tag) = &option.trait_tag {
                    if !trait_keys.contains(tag.as_str()) {
                        issues.push(CatalogIssue::UnknownTraitTag {
                            question: question.id.clone(),
                            option: option.value.clone(),
                            trait_tag: tag.clone(),
                        });
                    }
                }
            }
        }

        for rule in &self.scenarios {
            if !self.career_fields.contains_key(&rule.field) {
                issues.push(CatalogIssue::UnknownScenarioField {
                    field: rule.field.clone(),
                });
            }
            if !self.contains(&rule.question) {
                issues.push(CatalogIssue::UnknownScenarioQuestion {
                    question: rule.question.clone(),
                });
            }
        }

        for field in &self.backfill_fields {
            if !self.career_fields.contains_key(field) {
                issues.push(CatalogIssue::UnknownBackfillField {
                    field: field.clone(),
                });
            }
        }

        issues
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
