//! Real-time insight messages.
//!
//! [`narrate`] is a pure pattern match of the catalog's insight rules
//! against the answer values chosen so far; every matching rule yields its
//! message. [`InsightGate`] decides which of those a front end should
//! actually surface.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::{Catalog, InsightRule};
use crate::quiz::{Answer, AnswerHistory};

/// All insight messages whose rule matches `answers`, in rule order.
pub fn narrate(catalog: &Catalog, answers: &[Answer]) -> Vec<String> {
    catalog
        .insights
        .iter()
        .filter(|rule| rule_matches(rule, answers))
        .map(|rule| rule.message.clone())
        .collect()
}

fn rule_matches(rule: &InsightRule, answers: &[Answer]) -> bool {
    if rule.values.is_empty() {
        return false;
    }
    if rule.require_all {
        rule.values.iter().all(|v| answers.contains_value(v))
    } else {
        rule.values.iter().any(|v| answers.contains_value(v))
    }
}

/// Throttle for surfacing insights.
///
/// Nothing is surfaced before `min_answers` answers exist, and each message
/// is surfaced at most once until [`InsightGate::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightGate {
    min_answers: usize,
    shown: BTreeSet<String>,
}

impl InsightGate {
    pub fn new(min_answers: usize) -> Self {
        Self {
            min_answers,
            shown: BTreeSet::new(),
        }
    }

    /// Pick the first not-yet-shown insight, marking it shown.
    pub fn surface(&mut self, answer_count: usize, insights: &[String]) -> Option<String> {
        if answer_count < self.min_answers {
            return None;
        }
        let fresh = insights.iter().find(|m| !self.shown.contains(*m))?.clone();
        self.shown.insert(fresh.clone());
        Some(fresh)
    }

    pub fn clear(&mut self) {
        self.shown.clear();
    }
}
