//! Integration tests for full quiz sessions over the built-in catalog.

use std::collections::HashSet;
use std::sync::Arc;

use pathly_core::quiz::{narrate, recommend};
use pathly_core::{Catalog, EngineConfig, InsightGate, QuizEngine, QuizError};

#[test]
fn test_high_school_stem_route() {
    let engine = QuizEngine::builtin();
    let state = engine.start();

    let state = engine.submit(&state, "student_lifecycle", "high_school").unwrap();
    assert_eq!(state.current_question_id.as_deref(), Some("hs_college_direction"));

    let state = engine.submit(&state, "hs_college_direction", "academic_depth").unwrap();
    assert_eq!(state.current_question_id.as_deref(), Some("hs_subject_interest"));

    let state = engine.submit(&state, "hs_subject_interest", "stem").unwrap();
    assert_eq!(state.current_question_id.as_deref(), Some("core_interests"));

    assert_eq!(
        state.adaptive_path,
        vec![
            "student_lifecycle",
            "hs_college_direction",
            "hs_subject_interest",
            "core_interests",
        ]
    );

    let analytical = state
        .trait_profile
        .iter()
        .find(|t| t.key == "analytical_mind")
        .expect("analytical_mind in profile");
    assert_eq!(analytical.score, 20.0);
    assert_eq!(state.trait_profile[0].key, "analytical_mind");
    assert_eq!(state.progress_percent, 25);
    assert!(!state.completed);
}

#[test]
fn test_empty_session_recommendations() {
    let catalog = Catalog::builtin();
    let matches = recommend(&catalog, &[], &[], &EngineConfig::default());
    assert!((10..=12).contains(&matches.len()));

    let unique: HashSet<_> = matches.iter().collect();
    assert_eq!(unique.len(), matches.len());

    let backfill: HashSet<&String> = catalog
        .backfill_fields
        .iter()
        .flat_map(|f| catalog.careers_in(f).iter())
        .collect();
    assert!(matches.iter().all(|m| backfill.contains(m)));
}

#[test]
fn test_full_college_session() {
    let engine = QuizEngine::builtin();
    let answers = [
        ("student_lifecycle", "college"),
        ("college_major_status", "switching"),
        ("college_field", "business"),
        ("core_interests", "leading"),
        ("work_environment", "office"),
        ("work_style", "lead"),
        ("leadership_experience", "led_projects"),
        ("problem_approach", "data"),
        ("motivation", "income"),
        ("structure_preference", "flexible"),
        ("study_commitment", "four_years"),
        ("timeline", "asap"),
    ];
    let state = engine.replay(&answers).unwrap();

    assert!(state.completed);
    assert_eq!(state.progress_percent, 100);
    assert_eq!(state.current_question_id, None);
    assert_eq!(state.answers.len(), answers.len());

    // business (20) + leading (20) + lead (20) + led_projects (10)
    assert_eq!(state.trait_profile[0].key, "leadership");
    assert_eq!(state.trait_profile[0].score, 70.0);
    assert!(state.trait_profile.len() <= 5);
    assert!(state.matches.len() <= 12);
    assert_eq!(state.matches[0], "Product Manager");
    assert!(state
        .insights
        .contains(&"You show clear leadership potential.".to_string()));

    let result = state.result().unwrap();
    assert_eq!(result.adaptive_path.len(), answers.len());
}

#[test]
fn test_branch_questions_are_exclusive_to_their_stage() {
    let engine = QuizEngine::builtin();
    let state = engine
        .replay(&[
            ("student_lifecycle", "professional"),
            ("pro_growth_goal", "pivot"),
            ("core_interests", "creating"),
        ])
        .unwrap();
    for id in ["hs_college_direction", "college_major_status", "grad_focus", "changer_motivation"] {
        assert!(!state.adaptive_path.iter().any(|p| p == id), "{id} shown to a professional");
    }
}

#[test]
fn test_replay_stops_at_first_rejected_answer() {
    let engine = QuizEngine::builtin();
    let err = engine
        .replay(&[
            ("student_lifecycle", "college"),
            ("hs_college_direction", "academic_depth"),
        ])
        .unwrap_err();
    assert_eq!(
        err,
        QuizError::QuestionMismatch {
            expected: "college_major_status".to_string(),
            got: "hs_college_direction".to_string(),
        }
    );
}

#[test]
fn test_custom_catalog_from_toml() {
    let text = r#"
life_stage_question = "stage"
backfill_fields = ["tech"]

[career_fields]
tech = ["Developer", "Tester", "Designer"]

[[traits]]
key = "builder"
name = "Builder"
description = "Makes things"
careers = ["Carpenter"]

[[questions]]
id = "stage"
prompt = "Stage?"
category = "identity"

[[questions.options]]
text = "Student"
value = "student"
next = "extra"

[[questions.options]]
text = "Worker"
value = "worker"

[[questions]]
id = "extra"
prompt = "Extra?"
prerequisites = ["stage"]
condition = { op = "answer_is", question = "stage", value = "student" }

[[questions.options]]
text = "Build"
value = "build"
trait_tag = "builder"
weight = 3.0

[[questions]]
id = "orphan"
prompt = "Never shown"
prerequisites = ["missing"]

[[questions.options]]
text = "Ok"
value = "ok"
"#;
    let catalog = Catalog::from_toml_str(text).unwrap();
    assert_eq!(catalog.lint().len(), 1);

    let engine = QuizEngine::new(Arc::new(catalog), EngineConfig::default());

    let worker = engine.replay(&[("stage", "worker")]).unwrap();
    assert!(worker.completed);
    assert_eq!(worker.matches, vec!["Developer", "Tester"]);

    let student = engine.replay(&[("stage", "student"), ("extra", "build")]).unwrap();
    assert!(student.completed);
    assert_eq!(student.trait_profile[0].score, 30.0);
    assert_eq!(student.matches[0], "Carpenter");
}

#[test]
fn test_insight_gate_over_session() {
    let engine = QuizEngine::builtin();
    let mut gate = InsightGate::new(3);
    let mut surfaced = Vec::new();

    let mut state = engine.start();
    for (q, v) in [
        ("student_lifecycle", "high_school"),
        ("hs_college_direction", "hands_on"),
        ("hs_subject_interest", "stem"),
        ("core_interests", "solving_problems"),
    ] {
        state = engine.submit(&state, q, v).unwrap();
        assert_eq!(state.insights, narrate(engine.catalog(), &state.answers));
        if let Some(message) = gate.surface(state.answers.len(), &state.insights) {
            surfaced.push(message);
        }
    }

    assert_eq!(surfaced, vec!["You gravitate toward analytical problem solving.".to_string()]);
}
