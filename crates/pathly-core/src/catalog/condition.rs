//! Eligibility conditions.
//!
//! A small serializable expression language evaluated against the answer
//! history. Catalogs express adaptive branching with these instead of code,
//! so they can be stored as TOML/JSON and linted without running a session.

use serde::{Deserialize, Serialize};

use crate::quiz::{Answer, AnswerHistory};

/// Predicate over the full answer history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Condition {
    /// The question has been answered (with any value).
    Answered { question: String },
    /// The question was answered with exactly `value`.
    AnswerIs { question: String, value: String },
    /// The question was answered with one of `values`.
    AnswerIn { question: String, values: Vec<String> },
    /// Any of `values` was chosen for any question.
    AnyValue { values: Vec<String> },
    /// Negation.
    Not { condition: Box<Condition> },
    /// Every sub-condition holds. Empty is true.
    All { conditions: Vec<Condition> },
    /// At least one sub-condition holds. Empty is false.
    Any { conditions: Vec<Condition> },
}

impl Condition {
    pub fn answer_is(question: impl Into<String>, value: impl Into<String>) -> Self {
        Condition::AnswerIs {
            question: question.into(),
            value: value.into(),
        }
    }

    pub fn answer_in<I, S>(question: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Condition::AnswerIn {
            question: question.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn any_value<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Condition::AnyValue {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn negate(self) -> Self {
        Condition::Not {
            condition: Box::new(self),
        }
    }

    /// Evaluate against the answer history.
    pub fn evaluate(&self, history: &[Answer]) -> bool {
        match self {
            Condition::Answered { question } => history.answered(question),
            Condition::AnswerIs { question, value } => {
                history.value_of(question) == Some(value.as_str())
            }
            Condition::AnswerIn { question, values } => history
                .value_of(question)
                .is_some_and(|v| values.iter().any(|candidate| candidate == v)),
            Condition::AnyValue { values } => values.iter().any(|v| history.contains_value(v)),
            Condition::Not { condition } => !condition.evaluate(history),
            Condition::All { conditions } => conditions.iter().all(|c| c.evaluate(history)),
            Condition::Any { conditions } => conditions.iter().any(|c| c.evaluate(history)),
        }
    }

    /// Question ids this condition refers to, in first-seen order.
    pub fn referenced_questions(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_questions(&mut out);
        out
    }

    fn collect_questions<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Condition::Answered { question }
            | Condition::AnswerIs { question, .. }
            | Condition::AnswerIn { question, .. } => {
                if !out.contains(&question.as_str()) {
                    out.push(question);
                }
            }
            Condition::AnyValue { .. } => {}
            Condition::Not { condition } => condition.collect_questions(out),
            Condition::All { conditions } | Condition::Any { conditions } => {
                for c in conditions {
                    c.collect_questions(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn answer(question: &str, value: &str) -> Answer {
        Answer {
            question_id: question.to_string(),
            chosen_value: value.to_string(),
            weight: 1.0,
            trait_tag: None,
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_answer_is_and_in() {
        let history = vec![answer("student_lifecycle", "college")];
        assert!(Condition::answer_is("student_lifecycle", "college").evaluate(&history));
        assert!(!Condition::answer_is("student_lifecycle", "high_school").evaluate(&history));
        assert!(Condition::answer_in("student_lifecycle", ["high_school", "college"])
            .evaluate(&history));
        assert!(!Condition::answer_in("work_style", ["team"]).evaluate(&history));
    }

    #[test]
    fn test_combinators() {
        let history = vec![answer("work_style", "lead"), answer("motivation", "impact")];
        let lead = Condition::answer_is("work_style", "lead");
        let solo = Condition::answer_is("work_style", "solo");

        assert!(Condition::All { conditions: vec![] }.evaluate(&history));
        assert!(!Condition::Any { conditions: vec![] }.evaluate(&history));
        assert!(Condition::Any {
            conditions: vec![solo.clone(), lead.clone()]
        }
        .evaluate(&history));
        assert!(!Condition::All {
            conditions: vec![solo.clone(), lead]
        }
        .evaluate(&history));
        assert!(solo.negate().evaluate(&history));
        assert!(Condition::any_value(["impact"]).evaluate(&history));
    }

    #[test]
    fn test_referenced_questions_deduplicates() {
        let cond = Condition::All {
            conditions: vec![
                Condition::Answered {
                    question: "a".to_string(),
                },
                Condition::answer_is("b", "x").negate(),
                Condition::answer_in("a", ["y"]),
                Condition::any_value(["z"]),
            ],
        };
        assert_eq!(cond.referenced_questions(), vec!["a", "b"]);
    }

    #[test]
    fn test_toml_shape() {
        #[derive(Deserialize)]
        struct Wrapper {
            condition: Condition,
        }
        let parsed: Wrapper = toml::from_str(
            r#"condition = { op = "answer_in", question = "student_lifecycle", values = ["college", "recent_grad"] }"#,
        )
        .unwrap();
        assert_eq!(
            parsed.condition,
            Condition::answer_in("student_lifecycle", ["college", "recent_grad"])
        );
    }
}
