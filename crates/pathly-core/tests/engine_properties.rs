//! Property tests: random walks through the built-in catalog.

use std::collections::HashSet;

use proptest::prelude::*;

use pathly_core::quiz::trait_scores;
use pathly_core::{QuizEngine, QuizState};

/// Walk the quiz choosing `picks[i] % options` at step `i`.
fn walk(engine: &QuizEngine, picks: &[usize]) -> Vec<QuizState> {
    let mut states = vec![engine.start()];
    for pick in picks {
        let state = states.last().unwrap();
        let Some(question) = engine.current_question(state) else {
            break;
        };
        let option = &question.options[pick % question.options.len()];
        let next = engine
            .submit(state, &question.id, &option.value)
            .unwrap();
        states.push(next);
    }
    states
}

proptest! {
    #[test]
    fn resolver_never_repeats_and_respects_eligibility(picks in prop::collection::vec(0usize..8, 0..30)) {
        let engine = QuizEngine::builtin();
        for state in walk(&engine, &picks) {
            let unique: HashSet<_> = state.adaptive_path.iter().collect();
            prop_assert_eq!(unique.len(), state.adaptive_path.len());

            if let Some(current) = &state.current_question_id {
                prop_assert!(!state.answers.iter().any(|a| &a.question_id == current));
                let node = engine.catalog().question(current).unwrap();
                prop_assert!(node.is_eligible(&state.answers));
            }
        }
    }

    #[test]
    fn trait_scores_are_bounded_and_monotonic(picks in prop::collection::vec(0usize..8, 0..30)) {
        let engine = QuizEngine::builtin();
        let states = walk(&engine, &picks);
        let mut previous: Option<Vec<(String, f64)>> = None;
        for state in &states {
            let scores = trait_scores(engine.catalog(), &state.answers, engine.config());
            for (_, score) in &scores {
                prop_assert!((0.0..=100.0).contains(score));
            }
            if let Some(prev) = &previous {
                for ((_, before), (_, after)) in prev.iter().zip(scores.iter()) {
                    prop_assert!(after >= before);
                }
            }
            for entry in &state.trait_profile {
                prop_assert!(entry.score > 0.0 && entry.score <= 100.0);
            }
            prop_assert!(state.trait_profile.len() <= 5);
            previous = Some(scores);
        }
    }

    #[test]
    fn recommendations_are_bounded_and_distinct(picks in prop::collection::vec(0usize..8, 0..30)) {
        let engine = QuizEngine::builtin();
        for state in walk(&engine, &picks) {
            prop_assert!(!state.matches.is_empty());
            prop_assert!(state.matches.len() <= 12);
            let unique: HashSet<_> = state.matches.iter().collect();
            prop_assert_eq!(unique.len(), state.matches.len());
        }
    }

    #[test]
    fn progress_only_reaches_hundred_on_completion(picks in prop::collection::vec(0usize..8, 0..30)) {
        let engine = QuizEngine::builtin();
        for state in walk(&engine, &picks) {
            if state.completed {
                prop_assert_eq!(state.progress_percent, 100);
                prop_assert!(state.current_question_id.is_none());
            } else {
                prop_assert!(state.progress_percent <= 95);
                prop_assert!(state.current_question_id.is_some());
            }
        }
    }

    #[test]
    fn replay_is_idempotent(picks in prop::collection::vec(0usize..8, 0..30)) {
        let engine = QuizEngine::builtin();
        let last = walk(&engine, &picks).pop().unwrap();
        let recorded: Vec<(String, String)> = last
            .answers
            .iter()
            .map(|a| (a.question_id.clone(), a.chosen_value.clone()))
            .collect();

        let first = engine.replay(&recorded).unwrap();
        let second = engine.replay(&recorded).unwrap();
        prop_assert_eq!(&first.trait_profile, &second.trait_profile);
        prop_assert_eq!(&first.matches, &second.matches);
        prop_assert_eq!(&first.adaptive_path, &second.adaptive_path);
        prop_assert_eq!(&first.trait_profile, &last.trait_profile);
        prop_assert_eq!(&first.matches, &last.matches);
        prop_assert_eq!(&first.adaptive_path, &last.adaptive_path);
        prop_assert_eq!(first.completed, last.completed);
    }
}
