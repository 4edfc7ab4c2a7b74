//! Submission dispatch and outcome handling.

use super::{EguiController, JobMessage, StatusTone, SubmitJob};
use crate::egui_app::state::AppView;
use crate::report::SubmitGate;
use crate::submit::{ReportReceipt, SubmitError};
use crate::verification;

impl EguiController {
    /// Validate and, if clean, dispatch the draft to the transport.
    ///
    /// Validation failures only update the inline errors; nothing leaves the
    /// process. The lifecycle flag plus the job guard keep this to one
    /// request in flight no matter how the call is triggered.
    pub fn submit(&mut self) {
        match self.form.begin_submit(self.strings()) {
            SubmitGate::Ready => {
                tracing::info!(
                    site = %self.form.draft.site_id,
                    report_type = self.form.draft.report_type.wire_name(),
                    attachments = self.form.draft.attachments.len(),
                    "Dispatching report"
                );
                let sending = self.strings().sending.to_string();
                self.set_status(sending, StatusTone::Busy);
                let job = SubmitJob {
                    endpoint: self.config().endpoint.clone(),
                    draft: self.form.draft.clone(),
                };
                self.jobs.begin_submit(job);
            }
            SubmitGate::Invalid => {
                tracing::debug!("Submit blocked by validation errors");
            }
            SubmitGate::Blocked => {}
        }
    }

    /// Drain background job results. Called once per frame.
    pub fn process_job_messages(&mut self) {
        while let Ok(message) = self.jobs.try_recv_message() {
            match message {
                JobMessage::ReportSubmitted(outcome) => {
                    self.handle_report_submitted(outcome.result);
                }
            }
        }
    }

    pub(crate) fn handle_report_submitted(
        &mut self,
        result: Result<ReportReceipt, SubmitError>,
    ) {
        self.jobs.clear_submit();
        match result {
            Ok(receipt) => {
                tracing::info!(
                    event_id = %receipt.event_id,
                    queued = receipt.queued,
                    "Report accepted"
                );
                self.form.complete_submit(Ok(()));
                self.ui.view = AppView::Success;
                let sent = self.strings().status_sent.to_string();
                self.set_status(sent, StatusTone::Info);
            }
            Err(err) => {
                tracing::warn!("Report submission failed: {err}");
                let message = err
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| self.strings().error_generic.to_string());
                self.form.complete_submit(Err(message));
                if self.config().verification_disabled() {
                    // Nothing to re-pass in skip mode.
                    self.form
                        .set_verification_token(verification::SKIPPED_TOKEN.to_string());
                }
                let failed = self.strings().status_failed.to_string();
                self.set_status(failed, StatusTone::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::report::{Category, SubmitPhase};

    fn filled_controller(site_key: &str) -> EguiController {
        let config = AppConfig {
            challenge_site_key: site_key.to_string(),
            sites: vec!["example.com".into()],
            ..AppConfig::default()
        };
        let mut controller = EguiController::new(config, None);
        controller.select_site("example.com".into());
        controller.form.set_title("Button broken".into());
        controller.select_category(Some(Category::Functionality));
        controller
            .form
            .set_description("Clicking save does nothing.".into());
        controller
    }

    #[test]
    fn invalid_draft_stays_local() {
        let mut controller = filled_controller("");
        controller.form.set_title("  ".into());
        controller.submit();
        assert_eq!(controller.form.phase, SubmitPhase::Editing);
        assert!(!controller.jobs.submit_in_progress());
    }

    #[test]
    fn transport_error_message_is_surfaced_verbatim() {
        let mut controller = filled_controller("");
        controller.form.set_verification_token("abc".into());
        assert_eq!(
            controller.form.begin_submit(controller.strings()),
            SubmitGate::Ready
        );
        controller.handle_report_submitted(Err(SubmitError::Rejected {
            message: "rate limited".into(),
            code: Some("RATE_LIMIT".into()),
        }));
        assert_eq!(
            controller.form.phase,
            SubmitPhase::Failed("rate limited".into())
        );
        // Skip mode re-arms the sentinel right away.
        assert_eq!(
            controller.form.draft.verification_token,
            verification::SKIPPED_TOKEN
        );
        assert_eq!(controller.form.draft.title, "Button broken");
    }

    #[test]
    fn transport_failure_without_message_uses_generic_text() {
        let mut controller = filled_controller("0xKEY");
        controller.form.set_verification_token("0.abcDEF123-456_789xyz".into());
        assert_eq!(
            controller.form.begin_submit(controller.strings()),
            SubmitGate::Ready
        );
        controller
            .handle_report_submitted(Err(SubmitError::Transport("connection refused".into())));
        let expected = controller.strings().error_generic.to_string();
        assert_eq!(controller.form.phase, SubmitPhase::Failed(expected));
        // A real challenge must be re-passed before the next attempt.
        assert!(controller.form.draft.verification_token.is_empty());
        assert!(!controller.form.can_submit());
    }

    #[test]
    fn success_switches_to_the_thank_you_view() {
        let mut controller = filled_controller("");
        assert_eq!(
            controller.form.begin_submit(controller.strings()),
            SubmitGate::Ready
        );
        controller.handle_report_submitted(Ok(ReportReceipt {
            event_id: "evt_1".into(),
            queued: true,
        }));
        assert_eq!(controller.form.phase, SubmitPhase::Succeeded);
        assert_eq!(controller.ui.view, AppView::Success);

        controller.start_new_report();
        assert_eq!(controller.ui.view, AppView::Form);
        assert_eq!(controller.form.phase, SubmitPhase::Editing);
        assert!(controller.form.draft.title.is_empty());
    }
}
