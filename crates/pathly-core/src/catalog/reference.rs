//! Reference tables consumed by scoring: traits, career fields, scenario
//! rules and insight rules. All read-only.

use serde::{Deserialize, Serialize};

/// A personality/work-style dimension.
///
/// Declaration order in the catalog is the tie-break order when two traits
/// score the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitDefinition {
    /// Key referenced by option `trait_tag`s.
    pub key: String,
    /// Display name.
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    /// Careers suggested when this trait is active.
    #[serde(default)]
    pub careers: Vec<String>,
}

impl TraitDefinition {
    pub fn new(key: &str, name: &str, description: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            strengths: Vec::new(),
            careers: Vec::new(),
        }
    }

    pub fn with_strengths(mut self, strengths: &[&str]) -> Self {
        self.strengths = strengths.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_careers(mut self, careers: &[&str]) -> Self {
        self.careers = careers.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// Maps a life stage plus a topical answer onto a slice of a career field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioRule {
    /// Required life-stage value. `None` matches any stage, including none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_stage: Option<String>,
    /// Question whose answer is inspected.
    pub question: String,
    /// Value that must have been chosen for `question`.
    pub value: String,
    /// Career field to draw from.
    pub field: String,
    /// How many leading entries of the field to take.
    #[serde(default = "default_take")]
    pub take: usize,
}

fn default_take() -> usize {
    2
}

impl ScenarioRule {
    pub fn new(life_stage: Option<&str>, question: &str, value: &str, field: &str, take: usize) -> Self {
        Self {
            life_stage: life_stage.map(str::to_string),
            question: question.to_string(),
            value: value.to_string(),
            field: field.to_string(),
            take,
        }
    }
}

/// A fixed insight message keyed on the presence of answer values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightRule {
    /// Values looked for anywhere in the history.
    pub values: Vec<String>,
    /// When true every value must be present; otherwise any one suffices.
    #[serde(default)]
    pub require_all: bool,
    pub message: String,
}

impl InsightRule {
    pub fn any(values: &[&str], message: &str) -> Self {
        Self {
            values: values.iter().map(|s| s.to_string()).collect(),
            require_all: false,
            message: message.to_string(),
        }
    }

    pub fn all(values: &[&str], message: &str) -> Self {
        Self {
            require_all: true,
            ..Self::any(values, message)
        }
    }
}
