//! Error banners and attachment failures

use std::time::Duration;

use mzalendo_lens::app::NotificationLevel;
use mzalendo_lens::gemini::{GeminiAnalyzer, GeminiSettings};
use mzalendo_lens::session::{ScreenKind, SessionError};
use mzalendo_lens_sdk::{AnalysisError, CardinalityPolicy};

use super::common::*;

#[tokio::test]
async fn test_missing_credential_shows_setup_banner() {
    let analyzer = GeminiAnalyzer::new(GeminiSettings {
        api_key: None,
        model: "gemini-test".to_string(),
        api_base: "http://127.0.0.1:9".to_string(),
        timeout: Duration::from_secs(1),
        cardinality: CardinalityPolicy::Strict,
    })
    .unwrap();
    let mut app = app_with(std::sync::Arc::new(analyzer));
    app.session.draft_mut().unwrap().push_str("Finance Bill 2025");

    app.submit().unwrap();
    app.process_next_command().await;

    assert_eq!(app.session.kind(), ScreenKind::Intake);
    assert!(!app.session.is_loading());
    assert!(app.session.error().unwrap().starts_with("SETUP NEEDED"));
    assert_eq!(app.session.draft().text, "Finance Bill 2025");
}

#[tokio::test]
async fn test_malformed_response_keeps_draft() {
    let stub = StubAnalyzer::failing(AnalysisError::malformed("expected 3 quiz questions, got 2"));
    let mut app = app_with(stub);
    app.session.draft_mut().unwrap().push_str("Finance Bill 2025");

    app.submit().unwrap();
    app.process_next_command().await;

    assert_eq!(app.session.kind(), ScreenKind::Intake);
    assert!(app.session.error().unwrap().starts_with("SYSTEM OVERLOAD"));
    assert!(app.session.can_submit());
}

#[tokio::test]
async fn test_retry_clears_banner() {
    let stub = StubAnalyzer::failing(AnalysisError::empty("no candidates returned"));
    let mut app = app_with(stub);
    app.session.draft_mut().unwrap().push_str("bill");
    app.submit().unwrap();
    app.process_next_command().await;
    assert!(app.session.error().is_some());

    app.submit().unwrap();
    assert!(app.session.error().is_none());
    assert!(app.session.is_loading());
}

#[tokio::test]
async fn test_empty_draft_is_rejected_without_a_call() {
    let stub = StubAnalyzer::ok(finance_bill_analysis());
    let mut app = app_with(stub.clone());
    app.session.draft_mut().unwrap().push_str("   \n ");

    assert_eq!(app.submit().unwrap_err(), SessionError::EmptyDraft);
    assert!(!app.session.is_loading());
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn test_oversized_attachment_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.pdf");
    std::fs::write(&path, b"%PDF-1.4 too much").unwrap();

    let mut config = test_config();
    config.max_upload_bytes = 4;
    let mut app = mzalendo_lens::app::App::new(
        config,
        StubAnalyzer::ok(finance_bill_analysis()),
        tokio::runtime::Handle::current(),
    );

    assert!(!app.attach_file(&path));
    assert!(app.session.draft().document.is_none());
    let toasts = app.notifications.get_active();
    assert_eq!(toasts[0].level, NotificationLevel::Error);
    assert!(toasts[0].message.contains("big.pdf"));
}

#[tokio::test]
async fn test_unsupported_attachment_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, b"plain text").unwrap();

    let mut app = app_with(StubAnalyzer::ok(finance_bill_analysis()));
    assert!(!app.attach_file(&path));
    assert!(app.session.draft().document.is_none());
}
