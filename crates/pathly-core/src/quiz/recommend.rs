//! Recommendation engine.
//!
//! Candidates are collected into an insertion-ordered set, so earlier
//! sources rank higher:
//!
//! 1. careers of every trait in the profile, in profile order;
//! 2. scenario rules matching the life stage and a topical answer, each
//!    contributing the first `take` careers of its field;
//! 3. when fewer than `backfill_threshold` careers were found, the first
//!    `backfill_per_field` careers of each backfill field, until
//!    `backfill_raw_limit` raw candidates exist.
//!
//! The set is then truncated to `max_recommendations`. No randomness: the
//! same inputs always give the same list.

use indexmap::IndexSet;
use tracing::debug;

use crate::catalog::{Catalog, ScenarioRule};
use crate::quiz::{Answer, AnswerHistory, TraitScore};
use crate::storage::EngineConfig;

/// Rank career matches for a profile and answer sequence.
pub fn recommend(
    catalog: &Catalog,
    profile: &[TraitScore],
    answers: &[Answer],
    config: &EngineConfig,
) -> Vec<String> {
    let mut matches: IndexSet<String> = IndexSet::new();

    for entry in profile {
        matches.extend(entry.careers.iter().cloned());
    }
    let from_traits = matches.len();

    let life_stage = answers.value_of(&catalog.life_stage_question);
    for rule in catalog
        .scenarios
        .iter()
        .filter(|rule| scenario_matches(rule, life_stage, answers))
    {
        matches.extend(catalog.careers_in(&rule.field).iter().take(rule.take).cloned());
    }
    let from_scenarios = matches.len() - from_traits;

    if matches.len() < config.backfill_threshold {
        let mut raw = matches.len();
        'fields: for field in &catalog.backfill_fields {
            for career in catalog.careers_in(field).iter().take(config.backfill_per_field) {
                if raw >= config.backfill_raw_limit {
                    break 'fields;
                }
                matches.insert(career.clone());
                raw += 1;
            }
        }
    }

    debug!(
        from_traits,
        from_scenarios,
        total = matches.len(),
        "collected recommendations"
    );

    matches.into_iter().take(config.max_recommendations).collect()
}

fn scenario_matches(rule: &ScenarioRule, life_stage: Option<&str>, answers: &[Answer]) -> bool {
    let stage_ok = match &rule.life_stage {
        Some(stage) => life_stage == Some(stage.as_str()),
        None => true,
    };
    stage_ok && answers.value_of(&rule.question) == Some(rule.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::compute_profile;
    use std::collections::HashSet;

    fn answers(catalog: &Catalog, pairs: &[(&str, &str)]) -> Vec<Answer> {
        pairs
            .iter()
            .map(|(q, v)| {
                let node = catalog.question(q).unwrap();
                Answer::snapshot(node, node.find_option(v).unwrap())
            })
            .collect()
    }

    #[test]
    fn test_empty_session_gets_backfill() {
        let catalog = Catalog::builtin();
        let result = recommend(&catalog, &[], &[], &EngineConfig::default());
        assert_eq!(result.len(), 10);
        assert_eq!(result[0], "Software Engineer");
        assert_eq!(result[1], "Cybersecurity Analyst");
        assert_eq!(result[2], "Registered Nurse");
        let unique: HashSet<_> = result.iter().collect();
        assert_eq!(unique.len(), result.len());
    }

    #[test]
    fn test_trait_careers_rank_first() {
        let catalog = Catalog::builtin();
        let config = EngineConfig::default();
        let history = answers(
            &catalog,
            &[
                ("student_lifecycle", "high_school"),
                ("hs_college_direction", "academic_depth"),
                ("hs_subject_interest", "stem"),
            ],
        );
        let profile = compute_profile(&catalog, &history, &config);
        let result = recommend(&catalog, &profile, &history, &config);

        // analytical_mind (20) outranks intellectual_curiosity (15)
        assert_eq!(&result[..4], &profile[0].careers[..]);
        assert!(result.len() <= 12);
        // stem scenario contributes engineering
        assert!(result.contains(&"Mechanical Engineer".to_string()));
    }

    #[test]
    fn test_scenario_requires_matching_life_stage() {
        let catalog = Catalog::builtin();
        let rule = ScenarioRule::new(Some("college"), "college_field", "stem", "science", 2);
        let history = answers(&catalog, &[("student_lifecycle", "high_school")]);
        assert!(!scenario_matches(&rule, Some("high_school"), &history));

        let any_stage = ScenarioRule::new(None, "student_lifecycle", "high_school", "science", 2);
        assert!(scenario_matches(&any_stage, Some("high_school"), &history));
        assert!(scenario_matches(&any_stage, None, &history));
    }

    #[test]
    fn test_backfill_skipped_when_signal_is_rich() {
        let catalog = Catalog::builtin();
        let config = EngineConfig::default();
        let history = answers(
            &catalog,
            &[
                ("student_lifecycle", "college"),
                ("college_major_status", "exploring"),
                ("college_field", "arts"),
                ("core_interests", "helping"),
                ("work_environment", "remote"),
            ],
        );
        let profile = compute_profile(&catalog, &history, &config);
        let result = recommend(&catalog, &profile, &history, &config);
        assert_eq!(result.len(), 12);
        // backfill would have put "Cybersecurity Analyst" in; trait/scenario data does not
        assert!(!result.contains(&"Cybersecurity Analyst".to_string()));
    }

    #[test]
    fn test_result_is_deterministic() {
        let catalog = Catalog::builtin();
        let config = EngineConfig::default();
        let history = answers(
            &catalog,
            &[("student_lifecycle", "professional"), ("pro_growth_goal", "venture")],
        );
        let profile = compute_profile(&catalog, &history, &config);
        let first = recommend(&catalog, &profile, &history, &config);
        let second = recommend(&catalog, &profile, &history, &config);
        assert_eq!(first, second);
    }
}
