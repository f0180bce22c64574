//! End-to-end journeys through the terminal app

use mzalendo_lens::quiz::QuizStep;
use mzalendo_lens::session::ScreenKind;

use super::common::*;

#[tokio::test]
async fn test_finance_bill_perfect_run() {
    let analysis = finance_bill_analysis();
    let key = answer_key(&analysis);
    let stub = StubAnalyzer::ok(analysis);
    let mut app = app_with(stub.clone());

    assert_eq!(app.session.phase_label(), "PHASE 01: INTEL");
    if let Some(draft) = app.session.draft_mut() {
        draft.push_str("Finance Bill 2025 raises VAT on fuel");
    }
    app.submit().unwrap();
    assert!(app.session.is_loading());

    assert!(app.process_next_command().await);
    assert_eq!(stub.calls(), 1);
    assert!(!app.session.is_loading());
    assert_eq!(app.session.kind(), ScreenKind::Breakdown);
    assert_eq!(app.session.phase_label(), "PHASE 02: DECODE");
    let shown = app.session.analysis().unwrap();
    assert_eq!(shown.summary, "Fuel gets pricier as VAT rises to 16%.");
    assert_eq!(shown.impact_cards.len(), 3);

    app.enter_quiz().unwrap();
    assert_eq!(app.session.phase_label(), "PHASE 03: SIMULATE");

    for (i, correct) in key.iter().enumerate() {
        app.select_answer(*correct).unwrap();
        assert!(!app.session.quiz().unwrap().explanation_visible());

        // Reveal timer fires through the command channel
        assert!(app.process_next_command().await);
        let quiz = app.session.quiz().unwrap();
        assert!(quiz.explanation_visible());
        assert_eq!(quiz.answered_correctly(), Some(true));

        let step = app.advance().unwrap();
        if i + 1 < key.len() {
            assert_eq!(step, Some(QuizStep::Next(i + 1)));
        } else {
            assert!(matches!(step, Some(QuizStep::Completed(_))));
        }
    }

    assert_eq!(app.session.kind(), ScreenKind::Summary);
    assert_eq!(app.session.phase_label(), "PHASE 04: MASTERY");
    let score = app.session.final_score().unwrap();
    assert_eq!(score.to_string(), "3/3");
    assert!(score.is_pass());

    app.toggle_detailed();
    assert!(app.show_detailed);
    assert!(app
        .session
        .analysis()
        .unwrap()
        .detailed_summary
        .contains("Red Flags"));
}

#[tokio::test]
async fn test_document_only_submission() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("finance_bill_2025.pdf");
    std::fs::write(&path, b"%PDF-1.7\n%scan").unwrap();

    let stub = StubAnalyzer::ok(finance_bill_analysis());
    let mut app = app_with(stub.clone());

    assert!(app.attach_file(&path));
    let document = app.session.draft().document.as_ref().unwrap();
    assert_eq!(document.file_name, "finance_bill_2025.pdf");
    assert!(app.session.can_submit());

    app.submit().unwrap();
    assert!(app.process_next_command().await);
    assert_eq!(app.session.kind(), ScreenKind::Breakdown);
    assert_eq!(stub.calls(), 1);
}

#[tokio::test]
async fn test_prefilled_text_from_config() {
    let mut config = test_config();
    config.initial_text = Some("Housing Levy Bill".to_string());
    let app = mzalendo_lens::app::App::new(
        config,
        StubAnalyzer::ok(finance_bill_analysis()),
        tokio::runtime::Handle::current(),
    );

    assert_eq!(app.session.draft().text, "Housing Levy Bill");
    assert!(app.session.can_submit());
}
