//! Reset from every screen and stale async results

use std::time::Duration;

use mzalendo_lens::session::{ScreenKind, SessionError};

use super::common::*;

#[test]
fn test_reset_from_summary_clears_everything() {
    let mut session = session_in_quiz(finance_bill_analysis());
    for answer in [1, 0, 2] {
        session.select_answer(answer).unwrap();
        session.advance().unwrap();
    }
    assert_eq!(session.kind(), ScreenKind::Summary);
    let old_id = session.id();

    session.reset();

    assert_eq!(session.kind(), ScreenKind::Intake);
    assert!(session.analysis().is_none());
    assert!(session.final_score().is_none());
    assert!(session.error().is_none());
    assert!(session.draft().text.is_empty());
    assert!(!session.is_loading());
    assert_ne!(session.id(), old_id);
}

#[test]
fn test_reset_mid_quiz() {
    let mut session = session_in_quiz(finance_bill_analysis());
    session.select_answer(1).unwrap();
    session.reset();
    assert_eq!(session.kind(), ScreenKind::Intake);
    assert!(session.quiz().is_none());
}

#[test]
fn test_stale_submission_is_discarded() {
    let mut session = session_with_text("first bill");
    let (stale, _) = session.begin_submit().unwrap();
    assert_eq!(session.begin_submit().unwrap_err(), SessionError::AlreadyLoading);

    session.reset();
    session.draft_mut().unwrap().push_str("second bill");
    let (current, request) = session.begin_submit().unwrap();
    assert_eq!(request.text.as_deref(), Some("second bill"));

    assert!(!session.finish_submit(stale, Ok(finance_bill_analysis())));
    assert_eq!(session.kind(), ScreenKind::Intake);
    assert!(session.is_loading());

    assert!(session.finish_submit(current, Ok(finance_bill_analysis())));
    assert_eq!(session.kind(), ScreenKind::Breakdown);
}

#[test]
fn test_draft_locked_while_loading() {
    let mut session = session_with_text("bill");
    session.begin_submit().unwrap();
    assert!(session.draft_mut().is_none());
    assert!(!session.can_submit());
}

#[tokio::test]
async fn test_app_reset_orphans_inflight_analysis() {
    let stub = StubAnalyzer::slow(finance_bill_analysis(), Duration::from_millis(20));
    let mut app = app_with(stub.clone());
    app.session.draft_mut().unwrap().push_str("Finance Bill 2025");
    app.submit().unwrap();

    app.reset();
    assert!(!app.session.is_loading());

    // The late result arrives and is ignored
    assert!(app.process_next_command().await);
    assert_eq!(app.session.kind(), ScreenKind::Intake);
    assert!(app.session.analysis().is_none());
    assert!(!app.session.is_loading());
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn test_advance_cancels_pending_reveal() {
    let mut config = test_config();
    config.reveal_delay = Duration::from_millis(30);
    let mut app = mzalendo_lens::app::App::new(
        config,
        StubAnalyzer::ok(finance_bill_analysis()),
        tokio::runtime::Handle::current(),
    );
    app.session.draft_mut().unwrap().push_str("Finance Bill 2025");
    app.submit().unwrap();
    app.process_next_command().await;
    app.enter_quiz().unwrap();

    app.select_answer(1).unwrap();
    app.advance().unwrap();

    tokio::time::sleep(Duration::from_millis(60)).await;
    app.drain_commands();

    let quiz = app.session.quiz().unwrap();
    assert_eq!(quiz.current_index(), 1);
    assert!(!quiz.explanation_visible());
}

#[tokio::test]
async fn test_reset_from_summary_via_app() {
    let mut app = app_with(StubAnalyzer::ok(finance_bill_analysis()));
    app.session.draft_mut().unwrap().push_str("Finance Bill 2025");
    app.submit().unwrap();
    app.process_next_command().await;
    app.enter_quiz().unwrap();
    for answer in [0, 0, 0] {
        app.select_answer(answer).unwrap();
        app.advance().unwrap();
    }
    assert_eq!(app.session.kind(), ScreenKind::Summary);
    app.toggle_detailed();

    app.reset();
    assert_eq!(app.session.kind(), ScreenKind::Intake);
    assert!(!app.show_detailed);
    assert!(app.session.draft().text.is_empty());
}
