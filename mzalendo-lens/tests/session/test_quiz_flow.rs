//! Quiz scoring through the session

use mzalendo_lens::quiz::QuizStep;
use mzalendo_lens::session::{ScreenKind, SessionError};
use mzalendo_lens_sdk::{parse_analysis, CardinalityPolicy};

use super::common::*;

/// Answer each question with the given option, then return the final score
fn play(answers: &[usize]) -> mzalendo_lens::quiz::QuizScore {
    let mut session = session_in_quiz(finance_bill_analysis());
    for answer in answers {
        session.select_answer(*answer).unwrap();
        session.advance().unwrap();
    }
    assert_eq!(session.kind(), ScreenKind::Summary);
    session.final_score().unwrap()
}

#[test]
fn test_two_of_three_passes() {
    // Key is [1, 0, 2]
    let score = play(&[1, 0, 3]);
    assert_eq!(score.to_string(), "2/3");
    assert!(score.is_pass());
}

#[test]
fn test_one_of_three_fails() {
    let score = play(&[1, 1, 1]);
    assert_eq!(score.to_string(), "1/3");
    assert!(!score.is_pass());
}

#[test]
fn test_score_never_exceeds_total() {
    let mut session = session_in_quiz(finance_bill_analysis());
    for _ in 0..3 {
        let question = session.quiz().unwrap().current_question().unwrap().clone();
        session.select_answer(question.correct_index).unwrap();
        // A second pick on the same question is ignored
        assert_eq!(session.select_answer(question.correct_index).unwrap(), None);
        assert!(session.quiz().unwrap().score() <= session.quiz().unwrap().total());
        session.advance().unwrap();
    }
    assert_eq!(session.final_score().unwrap().to_string(), "3/3");
}

#[test]
fn test_advance_before_selecting_is_noop() {
    let mut session = session_in_quiz(finance_bill_analysis());
    assert_eq!(session.advance().unwrap(), None);
    let quiz = session.quiz().unwrap();
    assert_eq!(quiz.current_index(), 0);
    assert_eq!(quiz.progress(), 0.0);
}

#[test]
fn test_progress_is_monotonic() {
    let mut session = session_in_quiz(finance_bill_analysis());
    let mut last = session.quiz().unwrap().progress();

    for answer in [1, 0, 2] {
        session.select_answer(answer).unwrap();
        let after_select = session.quiz().unwrap().progress();
        assert!(after_select >= last);
        last = after_select;

        if let Some(QuizStep::Next(_)) = session.advance().unwrap() {
            let after_advance = session.quiz().unwrap().progress();
            assert!(after_advance >= last);
            last = after_advance;
        }
    }
    assert_eq!(last, 1.0);
}

#[test]
fn test_quiz_actions_rejected_elsewhere() {
    let mut session = session_with_text("bill");
    assert!(matches!(
        session.select_answer(0),
        Err(SessionError::InvalidTransition { .. })
    ));
    assert!(matches!(
        session.advance(),
        Err(SessionError::InvalidTransition { .. })
    ));
    assert!(matches!(
        session.acknowledge(),
        Err(SessionError::InvalidTransition { .. })
    ));
    assert_eq!(session.kind(), ScreenKind::Intake);
}

#[test]
fn test_lenient_empty_quiz_goes_to_summary() {
    let raw = r#"{"summary":"s","detailedSummary":"d","impactCards":[],"quiz":[]}"#;
    let analysis = parse_analysis(raw, CardinalityPolicy::Lenient).unwrap();

    let mut session = session_with_text("bill");
    let (ticket, _) = session.begin_submit().unwrap();
    session.finish_submit(ticket, Ok(analysis));
    session.acknowledge().unwrap();

    assert_eq!(session.kind(), ScreenKind::Summary);
    let score = session.final_score().unwrap();
    assert_eq!(score.to_string(), "0/0");
    assert!(!score.is_pass());
}

#[test]
fn test_bonus_questions_from_lenient_analysis() {
    let quiz = (0..5).map(|i| question(&format!("Q{}", i), 0)).collect();
    let mut session = session_in_quiz(analysis_with_quiz(quiz));
    for _ in 0..5 {
        session.select_answer(0).unwrap();
        session.advance().unwrap();
    }
    assert_eq!(session.final_score().unwrap().to_string(), "5/5");
}
