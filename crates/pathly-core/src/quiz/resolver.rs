//! Path resolution: which question comes next.
//!
//! An option's explicit `next` wins when its target may legally be shown.
//! Otherwise the catalog is scanned in static order for the first node that
//! is unanswered, has every prerequisite answered, and whose condition holds.
//! Traversal is forward-only; answered nodes are never offered again.

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::QuizError;
use crate::quiz::Answer;

/// Resolve the id of the next question, or `None` when the quiz is done.
///
/// `history` must already include the answer for `current_question_id`.
///
/// # Errors
///
/// Returns [`QuizError::UnknownQuestion`] if `current_question_id` is not in
/// the catalog and [`QuizError::InvalidChoice`] if `chosen_value` is not one
/// of its options.
pub fn resolve_next(
    catalog: &Catalog,
    current_question_id: &str,
    chosen_value: &str,
    history: &[Answer],
) -> Result<Option<String>, QuizError> {
    let current = catalog
        .question(current_question_id)
        .ok_or_else(|| QuizError::UnknownQuestion(current_question_id.to_string()))?;
    let option = current
        .find_option(chosen_value)
        .ok_or_else(|| QuizError::InvalidChoice {
            question: current_question_id.to_string(),
            value: chosen_value.to_string(),
        })?;

    if let Some(target) = &option.next {
        match catalog.question(target) {
            Some(node) if node.is_eligible(history) => {
                debug!(from = current_question_id, to = %target, "explicit next");
                return Ok(Some(target.clone()));
            }
            Some(_) => {
                debug!(from = current_question_id, to = %target, "explicit next not eligible, scanning");
            }
            None => {
                debug!(from = current_question_id, to = %target, "explicit next missing from catalog, scanning");
            }
        }
    }

    let next = catalog.first_eligible(history).map(|q| q.id.clone());
    debug!(from = current_question_id, next = ?next, "scan result");
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Condition, QuestionCategory, QuestionNode, QuizOption};
    use indexmap::IndexMap;

    fn answer(catalog: &Catalog, question: &str, value: &str) -> Answer {
        let q = catalog.question(question).unwrap();
        Answer::snapshot(q, q.find_option(value).unwrap())
    }

    fn small_catalog() -> Catalog {
        let start = QuestionNode::new("start", "Start", QuestionCategory::Identity)
            .option(QuizOption::new("Left", "left").then("left_branch"))
            .option(QuizOption::new("Right", "right"))
            .option(QuizOption::new("Back", "back").then("start"))
            .option(QuizOption::new("Ghost", "ghost").then("nowhere"));
        let left = QuestionNode::new("left_branch", "Left", QuestionCategory::Direction)
            .requires("start")
            .when(Condition::answer_is("start", "left"))
            .option(QuizOption::new("Ok", "ok"));
        let orphan = QuestionNode::new("orphan", "Orphan", QuestionCategory::Planning)
            .requires("does_not_exist")
            .option(QuizOption::new("Ok", "ok"));
        let shared = QuestionNode::new("shared", "Shared", QuestionCategory::Planning)
            .requires("start")
            .option(QuizOption::new("Ok", "ok"));
        Catalog::new(vec![start, left, orphan, shared], Vec::new(), IndexMap::new()).unwrap()
    }

    #[test]
    fn test_explicit_next_takes_precedence() {
        let catalog = small_catalog();
        let history = vec![answer(&catalog, "start", "left")];
        let next = resolve_next(&catalog, "start", "left", &history).unwrap();
        assert_eq!(next.as_deref(), Some("left_branch"));
    }

    #[test]
    fn test_scan_skips_ineligible_and_orphaned_nodes() {
        let catalog = small_catalog();
        let history = vec![answer(&catalog, "start", "right")];
        let next = resolve_next(&catalog, "start", "right", &history).unwrap();
        assert_eq!(next.as_deref(), Some("shared"));
    }

    #[test]
    fn test_explicit_next_to_answered_node_falls_back_to_scan() {
        let catalog = small_catalog();
        let history = vec![answer(&catalog, "start", "back")];
        let next = resolve_next(&catalog, "start", "back", &history).unwrap();
        assert_eq!(next.as_deref(), Some("shared"));
    }

    #[test]
    fn test_dangling_explicit_next_falls_back_to_scan() {
        let catalog = small_catalog();
        let history = vec![answer(&catalog, "start", "ghost")];
        let next = resolve_next(&catalog, "start", "ghost", &history).unwrap();
        assert_eq!(next.as_deref(), Some("shared"));
    }

    #[test]
    fn test_completion_returns_none() {
        let catalog = small_catalog();
        let history = vec![
            answer(&catalog, "start", "right"),
            answer(&catalog, "shared", "ok"),
        ];
        let next = resolve_next(&catalog, "shared", "ok", &history).unwrap();
        assert_eq!(next, None);
    }

    #[test]
    fn test_invalid_choice_rejected() {
        let catalog = small_catalog();
        let result = resolve_next(&catalog, "start", "up", &[]);
        assert_eq!(
            result,
            Err(QuizError::InvalidChoice {
                question: "start".to_string(),
                value: "up".to_string(),
            })
        );
    }

    #[test]
    fn test_unknown_question_rejected() {
        let catalog = small_catalog();
        let result = resolve_next(&catalog, "nope", "ok", &[]);
        assert_eq!(result, Err(QuizError::UnknownQuestion("nope".to_string())));
    }

    #[test]
    fn test_builtin_high_school_route() {
        let catalog = Catalog::builtin();
        let mut history = vec![answer(&catalog, "student_lifecycle", "high_school")];
        assert_eq!(
            resolve_next(&catalog, "student_lifecycle", "high_school", &history).unwrap().as_deref(),
            Some("hs_college_direction")
        );
        history.push(answer(&catalog, "hs_college_direction", "academic_depth"));
        assert_eq!(
            resolve_next(&catalog, "hs_college_direction", "academic_depth", &history).unwrap().as_deref(),
            Some("hs_subject_interest")
        );
        history.push(answer(&catalog, "hs_subject_interest", "stem"));
        assert_eq!(
            resolve_next(&catalog, "hs_subject_interest", "stem", &history).unwrap().as_deref(),
            Some("core_interests")
        );
    }
}
