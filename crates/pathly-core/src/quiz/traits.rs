//! Trait aggregation.
//!
//! Scores are recomputed from the full answer sequence on every call:
//! each answer carrying a known trait tag adds `weight × weight_scale` to
//! that trait, each trait capped independently at `trait_cap`. The profile
//! is the top `top_traits` traits with a positive score, highest first, ties
//! broken by trait declaration order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::quiz::Answer;
use crate::storage::EngineConfig;

/// One entry of a trait profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitScore {
    pub key: String,
    pub name: String,
    /// Accumulated score in `[0, trait_cap]`.
    pub score: f64,
    pub description: String,
    pub strengths: Vec<String>,
    pub careers: Vec<String>,
}

/// Raw per-trait scores in declaration order, including zeros.
///
/// Answers whose trait tag is unknown are ignored.
pub fn trait_scores(catalog: &Catalog, answers: &[Answer], config: &EngineConfig) -> Vec<(String, f64)> {
    let mut scores: Vec<(String, f64)> = catalog
        .traits
        .iter()
        .map(|t| (t.key.clone(), 0.0))
        .collect();

    for answer in answers {
        let Some(tag) = &answer.trait_tag else {
            continue;
        };
        match scores.iter_mut().find(|(key, _)| key == tag) {
            Some((_, score)) => {
                *score = (*score + answer.weight * config.weight_scale).min(config.trait_cap);
            }
            None => debug!(question = %answer.question_id, trait_tag = %tag, "ignoring unknown trait tag"),
        }
    }

    scores
}

/// Compute the ranked trait profile.
pub fn compute_profile(catalog: &Catalog, answers: &[Answer], config: &EngineConfig) -> Vec<TraitScore> {
    let mut ranked: Vec<(usize, String, f64)> = trait_scores(catalog, answers, config)
        .into_iter()
        .enumerate()
        .filter(|(_, (_, score))| *score > 0.0)
        .map(|(pos, (key, score))| (pos, key, score))
        .collect();

    // Stable sort keeps declaration order among equal scores.
    ranked.sort_by(|a, b| b.2.total_cmp(&a.2));
    ranked.truncate(config.top_traits);

    let profile: Vec<TraitScore> = ranked
        .into_iter()
        .filter_map(|(pos, key, score)| {
            let def = catalog.traits.get(pos)?;
            Some(TraitScore {
                key,
                name: def.name.clone(),
                score,
                description: def.description.clone(),
                strengths: def.strengths.clone(),
                careers: def.careers.clone(),
            })
        })
        .collect();

    debug!(answers = answers.len(), traits = profile.len(), "computed trait profile");
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tagged(trait_tag: &str, weight: f64) -> Answer {
        Answer {
            question_id: format!("q_{trait_tag}"),
            chosen_value: "v".to_string(),
            weight,
            trait_tag: Some(trait_tag.to_string()),
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn test_single_answer_scores_weight_times_ten() {
        let catalog = Catalog::builtin();
        let profile = compute_profile(&catalog, &[tagged("analytical_mind", 2.0)], &EngineConfig::default());
        assert_eq!(profile.len(), 1);
        assert_eq!(profile[0].key, "analytical_mind");
        assert_eq!(profile[0].score, 20.0);
        assert!(!profile[0].careers.is_empty());
    }

    #[test]
    fn test_each_trait_caps_independently() {
        let catalog = Catalog::builtin();
        let mut answers: Vec<Answer> = (0..8).map(|_| tagged("leadership", 2.0)).collect();
        answers.push(tagged("adaptable", 1.0));
        let profile = compute_profile(&catalog, &answers, &EngineConfig::default());
        assert_eq!(profile[0].key, "leadership");
        assert_eq!(profile[0].score, 100.0);
        assert_eq!(profile[1].key, "adaptable");
        assert_eq!(profile[1].score, 10.0);
    }

    #[test]
    fn test_ties_follow_declaration_order() {
        let catalog = Catalog::builtin();
        // entrepreneurial is declared after people_helper
        let answers = vec![tagged("entrepreneurial", 1.0), tagged("people_helper", 1.0)];
        let profile = compute_profile(&catalog, &answers, &EngineConfig::default());
        let keys: Vec<_> = profile.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, vec!["people_helper", "entrepreneurial"]);
    }

    #[test]
    fn test_only_top_five_kept() {
        let catalog = Catalog::builtin();
        let answers: Vec<Answer> = catalog
            .traits
            .iter()
            .enumerate()
            .map(|(i, t)| tagged(&t.key, 1.0 + i as f64 * 0.1))
            .collect();
        let profile = compute_profile(&catalog, &answers, &EngineConfig::default());
        assert_eq!(profile.len(), 5);
        assert_eq!(profile[0].key, catalog.traits.last().unwrap().key);
        assert!(profile.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_unknown_tags_and_untagged_answers_ignored() {
        let catalog = Catalog::builtin();
        let mut untagged = tagged("x", 3.0);
        untagged.trait_tag = None;
        let answers = vec![tagged("legacy_trait", 3.0), untagged];
        assert!(compute_profile(&catalog, &answers, &EngineConfig::default()).is_empty());
    }

    #[test]
    fn test_zero_weight_does_not_activate_trait() {
        let catalog = Catalog::builtin();
        let profile = compute_profile(&catalog, &[tagged("adaptable", 0.0)], &EngineConfig::default());
        assert!(profile.is_empty());
    }
}
