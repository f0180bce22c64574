//! Keyboard and paste handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mzalendo_lens::session::ScreenKind;
use mzalendo_lens_sdk::AnalysisError;

use super::common::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[tokio::test]
async fn test_typing_and_paste() {
    let mut app = app_with(StubAnalyzer::ok(finance_bill_analysis()));

    for c in "Finance Bil".chars() {
        app.handle_key(press(KeyCode::Char(c)));
    }
    app.handle_key(press(KeyCode::Backspace));
    app.handle_paste("ll 2025 raises VAT on fuel");
    assert_eq!(app.session.draft().text, "Finance Bill 2025 raises VAT on fuel");
    assert!(app.session.can_submit());
}

#[tokio::test]
async fn test_submit_answer_and_finish_with_keys() {
    let mut app = app_with(StubAnalyzer::ok(finance_bill_analysis()));
    app.handle_paste("Finance Bill 2025 raises VAT on fuel");

    app.handle_key(press(KeyCode::Enter));
    assert!(app.session.is_loading());
    app.process_next_command().await;
    assert_eq!(app.session.kind(), ScreenKind::Breakdown);

    app.handle_key(press(KeyCode::Enter));
    assert_eq!(app.session.kind(), ScreenKind::Quiz);

    // Key is [1, 0, 2]: B, A, C
    for key in ['b', 'A', '3'] {
        app.handle_key(press(KeyCode::Char(key)));
        app.process_next_command().await;
        assert!(app.session.quiz().unwrap().explanation_visible());
        app.handle_key(press(KeyCode::Enter));
    }

    assert_eq!(app.session.kind(), ScreenKind::Summary);
    assert_eq!(app.session.final_score().unwrap().to_string(), "3/3");

    app.handle_key(press(KeyCode::Char('d')));
    assert!(app.show_detailed);
    app.handle_key(press(KeyCode::Esc));
    assert!(!app.show_detailed);
    assert!(!app.should_quit);

    app.handle_key(press(KeyCode::Char('r')));
    assert_eq!(app.session.kind(), ScreenKind::Intake);
}

#[tokio::test]
async fn test_ctrl_r_resets_mid_quiz() {
    let mut app = app_with(StubAnalyzer::ok(finance_bill_analysis()));
    app.handle_paste("bill");
    app.handle_key(press(KeyCode::Enter));
    app.process_next_command().await;
    app.handle_key(press(KeyCode::Enter));
    assert_eq!(app.session.kind(), ScreenKind::Quiz);

    app.handle_key(ctrl('r'));
    assert_eq!(app.session.kind(), ScreenKind::Intake);
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = app_with(StubAnalyzer::ok(finance_bill_analysis()));
    app.handle_key(press(KeyCode::Char('q')));
    assert!(!app.should_quit, "q is typed into the draft on intake");
    assert_eq!(app.session.draft().text, "q");

    app.handle_key(ctrl('q'));
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_enter_on_empty_draft_warns() {
    let mut app = app_with(StubAnalyzer::ok(finance_bill_analysis()));
    app.handle_key(press(KeyCode::Enter));
    assert!(!app.session.is_loading());
    assert_eq!(app.notifications.get_active()[0].title, "Nothing to decode");
}

#[tokio::test]
async fn test_escape_never_quits() {
    let mut app = app_with(StubAnalyzer::ok(finance_bill_analysis()));
    app.handle_paste("Finance Bill 2025");
    app.handle_key(press(KeyCode::Esc));
    assert!(!app.should_quit);
    assert_eq!(app.session.draft().text, "Finance Bill 2025");

    app.handle_key(press(KeyCode::Enter));
    app.process_next_command().await;
    app.handle_key(press(KeyCode::Enter));
    app.handle_key(press(KeyCode::Char('b')));
    assert_eq!(app.session.kind(), ScreenKind::Quiz);

    // Abandoning mid-quiz lands on a fresh intake
    app.handle_key(press(KeyCode::Esc));
    assert!(!app.should_quit);
    assert_eq!(app.session.kind(), ScreenKind::Intake);
    assert!(app.session.draft().text.is_empty());

    app.handle_paste("bill");
    app.handle_key(press(KeyCode::Enter));
    app.process_next_command().await;
    assert_eq!(app.session.kind(), ScreenKind::Breakdown);
    app.handle_key(press(KeyCode::Esc));
    assert!(!app.should_quit);
    assert_eq!(app.session.kind(), ScreenKind::Intake);
}

#[tokio::test]
async fn test_escape_dismisses_error_banner() {
    let mut app = app_with(StubAnalyzer::failing(AnalysisError::request("offline")));
    app.handle_paste("bill");
    app.handle_key(press(KeyCode::Enter));
    app.process_next_command().await;
    assert!(app.session.error().is_some());

    app.handle_key(press(KeyCode::Esc));
    assert!(app.session.error().is_none());
    assert_eq!(app.session.draft().text, "bill");
}

#[tokio::test]
async fn test_q_is_not_an_answer_or_quit_mid_quiz() {
    let mut app = app_with(StubAnalyzer::ok(finance_bill_analysis()));
    app.handle_paste("bill");
    app.handle_key(press(KeyCode::Enter));
    app.process_next_command().await;
    app.handle_key(press(KeyCode::Enter));

    app.handle_key(press(KeyCode::Char('q')));
    assert!(!app.should_quit);
    assert_eq!(app.session.kind(), ScreenKind::Quiz);
    assert!(app.session.quiz().unwrap().selected().is_none());
}
