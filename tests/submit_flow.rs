//! End-to-end submission flow against a local HTTP fixture.

mod support;

use std::thread;
use std::time::{Duration, Instant};

use sitereport::config::AppConfig;
use sitereport::egui_app::controller::EguiController;
use sitereport::egui_app::state::AppView;
use sitereport::report::{CandidateImage, Category, Field, ImageKind, SubmitPhase};
use sitereport::submit::{SubmitError, submit_report};
use support::RecordingServer;

fn controller_for(endpoint: String, challenge_site_key: &str) -> EguiController {
    let config = AppConfig {
        endpoint,
        challenge_site_key: challenge_site_key.to_string(),
        sites: vec!["example.com".into()],
        language: Some(sitereport::i18n::Language::En),
        ..AppConfig::default()
    };
    EguiController::new(config, None)
}

fn fill_report(controller: &mut EguiController) {
    controller.select_site("example.com".into());
    controller.form.set_title("Button broken".into());
    controller.select_category(Some(Category::Functionality));
    controller
        .form
        .set_description("Clicking save does nothing.".into());
}

fn wait_for_outcome(controller: &mut EguiController) {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        controller.process_job_messages();
        if controller.form.phase != SubmitPhase::Submitting {
            return;
        }
        assert!(Instant::now() < deadline, "submission never completed");
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn successful_submission_reaches_the_thank_you_screen() {
    let server = RecordingServer::start(
        "HTTP/1.1 200 OK",
        r#"{"event_id":"evt_123","queued":true}"#,
    );
    let mut controller = controller_for(server.url.clone(), "");
    fill_report(&mut controller);
    controller.form.set_email(" me@example.com ".into());
    controller.form.set_phone("+90 555 000 00 00".into());
    controller.form.add_attachments(vec![CandidateImage {
        file_name: "shot.png".into(),
        kind: Some(ImageKind::Png),
        bytes: vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a].into(),
    }]);

    controller.submit();
    assert_eq!(controller.form.phase, SubmitPhase::Submitting);
    // A second trigger while in flight must not dispatch again; the fixture
    // only ever answers one request.
    controller.submit();

    wait_for_outcome(&mut controller);
    assert_eq!(controller.form.phase, SubmitPhase::Succeeded);
    assert_eq!(controller.ui.view, AppView::Success);
    assert!(controller.form.errors.is_empty());

    let body = server.recorded_body();
    let text = String::from_utf8_lossy(&body);
    assert!(text.contains("name=\"site_id\""));
    assert!(text.contains("example.com"));
    assert!(text.contains("name=\"report_type\""));
    assert!(text.contains("bug"));
    assert!(text.contains("name=\"title\""));
    assert!(text.contains("Button broken"));
    assert!(text.contains("name=\"category\""));
    assert!(text.contains("functionality"));
    // Email wins over phone as the one forwarded contact channel.
    assert!(text.contains("name=\"contact_type\""));
    assert!(text.contains("email"));
    assert!(text.contains("me@example.com"));
    assert!(!text.contains("+90 555 000 00 00"));
    assert!(text.contains("name=\"images\""));
    assert!(text.contains("filename=\"shot.png\""));
    assert!(text.contains("image/png"));
    // Keyless configuration submits the skip sentinel.
    assert!(text.contains("name=\"cf-turnstile-response\""));
    assert!(text.contains("skipped"));
}

#[test]
fn rejected_submission_keeps_the_draft_and_clears_the_token() {
    let server = RecordingServer::start(
        "HTTP/1.1 500 Internal Server Error",
        r#"{"error":"rate limited","code":"RATE_LIMIT"}"#,
    );
    let mut controller = controller_for(server.url.clone(), "0xKEY");
    fill_report(&mut controller);
    controller
        .form
        .set_verification_token("0.abcDEF123-456_789xyz".into());

    controller.submit();
    wait_for_outcome(&mut controller);

    assert_eq!(
        controller.form.phase,
        SubmitPhase::Failed("rate limited".into())
    );
    assert_eq!(controller.form.draft.title, "Button broken");
    assert!(controller.form.errors.get(Field::Title).is_none());
    // The challenge must be re-passed before the next attempt.
    assert!(controller.form.draft.verification_token.is_empty());
    assert!(!controller.form.can_submit());
    assert_eq!(controller.ui.view, AppView::Form);
}

#[test]
fn malformed_error_body_maps_to_the_generic_failure() {
    let server = RecordingServer::start("HTTP/1.1 502 Bad Gateway", "<html>bad gateway</html>");
    let draft = sitereport::report::ReportDraft {
        site_id: "example.com".into(),
        title: "Broken".into(),
        description: "Details".into(),
        category: Some(Category::Other),
        verification_token: "skipped".into(),
        ..Default::default()
    };
    let err = submit_report(&server.url, &draft).unwrap_err();
    assert!(err.server_message().is_none());
    assert!(matches!(err, SubmitError::Transport(_)));
}

#[test]
fn success_body_without_a_receipt_is_an_invalid_response() {
    let server = RecordingServer::start("HTTP/1.1 200 OK", "not json");
    let draft = sitereport::report::ReportDraft {
        site_id: "example.com".into(),
        title: "Broken".into(),
        description: "Details".into(),
        category: Some(Category::Other),
        verification_token: "skipped".into(),
        ..Default::default()
    };
    let err = submit_report(&server.url, &draft).unwrap_err();
    assert!(matches!(err, SubmitError::InvalidResponse(_)));
}
