//! The form orchestration core: one owner for the draft, its errors, and the
//! submission lifecycle.

use crate::i18n::Strings;

use super::attachments::{self, AttachmentAddOutcome, CandidateImage};
use super::draft::{Category, ReportDraft, ReportType};
use super::validate::{self, Field, FieldErrors};

/// Submission lifecycle of the current draft.
///
/// Transitions run forward (`Editing` → `Submitting` → `Succeeded`/`Failed`);
/// only `Failed` hands control back to editing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed(String),
}

/// Outcome of a submit attempt's local gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitGate {
    /// Validation passed; the lifecycle moved to `Submitting` and the caller
    /// must dispatch the transport exactly once.
    Ready,
    /// Validation failed; the field errors were replaced and nothing else
    /// changed.
    Invalid,
    /// A submission is already in flight, the draft already succeeded, or the
    /// verification token is missing.
    Blocked,
}

/// Single source of truth for the draft, its errors, and the lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportForm {
    pub draft: ReportDraft,
    pub errors: FieldErrors,
    pub phase: SubmitPhase,
    auto_detected: bool,
    next_attachment_id: u64,
}

impl ReportForm {
    /// Build the initial form, prefilling site and page URL from the
    /// referring page when its hostname matches a configured site.
    ///
    /// Pure: parse failure or no match yields a plain empty form.
    pub fn initialize(referrer: Option<&str>, known_sites: &[String]) -> Self {
        let mut form = Self::default();
        let Some(referrer) = referrer else {
            return form;
        };
        let matched = known_sites
            .iter()
            .find(|site| validate::matches_site_domain(referrer, site));
        if let Some(site) = matched {
            form.draft.site_id = site.clone();
            form.draft.page_url = referrer.to_string();
            form.auto_detected = true;
        }
        form
    }

    /// Whether site and page URL came from the referring page.
    pub fn auto_detected(&self) -> bool {
        self.auto_detected
    }

    /// Select a site. Also auto-fills the page URL so the user only has to
    /// correct it when reporting a specific page.
    pub fn select_site(&mut self, site_id: String) {
        if !site_id.is_empty() {
            self.draft.page_url = format!("https://{site_id}");
        }
        self.draft.site_id = site_id;
        self.errors.clear(Field::Site);
    }

    pub fn set_title(&mut self, title: String) {
        self.draft.title = title;
        self.errors.clear(Field::Title);
    }

    pub fn set_description(&mut self, description: String) {
        self.draft.description = description;
        self.errors.clear(Field::Description);
    }

    pub fn select_category(&mut self, category: Option<Category>) {
        self.draft.category = category;
        self.errors.clear(Field::Category);
    }

    pub fn set_page_url(&mut self, page_url: String) {
        self.draft.page_url = page_url;
        self.errors.clear(Field::PageUrl);
    }

    pub fn set_full_name(&mut self, full_name: String) {
        self.draft.full_name = full_name;
    }

    pub fn set_phone(&mut self, phone: String) {
        self.draft.phone = phone;
    }

    pub fn set_email(&mut self, email: String) {
        self.draft.email = email;
    }

    /// Record the token produced by the bot challenge.
    pub fn set_verification_token(&mut self, token: String) {
        self.draft.verification_token = token;
    }

    /// Drop the token (challenge expired or errored).
    pub fn clear_verification_token(&mut self) {
        self.draft.verification_token.clear();
    }

    /// Switch between bug and request.
    ///
    /// A no-op for the current type. Otherwise the draft resets to defaults
    /// for the new type; site and page URL survive only when they were
    /// auto-detected. Attachments, token, errors, and any failure banner are
    /// dropped.
    pub fn change_report_type(&mut self, report_type: ReportType) {
        if report_type == self.draft.report_type {
            return;
        }
        let mut draft = ReportDraft::empty(report_type);
        if self.auto_detected {
            draft.site_id = std::mem::take(&mut self.draft.site_id);
            draft.page_url = std::mem::take(&mut self.draft.page_url);
        }
        self.draft = draft;
        self.errors = FieldErrors::default();
        self.phase = SubmitPhase::Editing;
    }

    /// Stage a batch of candidate images. See [`attachments::add_files`].
    pub fn add_attachments(&mut self, candidates: Vec<CandidateImage>) -> AttachmentAddOutcome {
        attachments::add_files(
            &mut self.draft.attachments,
            candidates,
            &mut self.next_attachment_id,
        )
    }

    /// Remove the staged image at `index`.
    pub fn remove_attachment(&mut self, index: usize) {
        attachments::remove_file(&mut self.draft.attachments, index);
    }

    /// Whether the submit action is currently available.
    pub fn can_submit(&self) -> bool {
        !self.draft.verification_token.is_empty()
            && !matches!(self.phase, SubmitPhase::Submitting | SubmitPhase::Succeeded)
    }

    /// Gate a submit attempt.
    ///
    /// Replaces the field error set on validation failure without touching
    /// the lifecycle. On success the lifecycle moves to `Submitting`, which
    /// keeps a second dispatch out even under rapid double-invocation.
    pub fn begin_submit(&mut self, strings: &Strings) -> SubmitGate {
        if !self.can_submit() {
            return SubmitGate::Blocked;
        }
        let errors = validate::validate(&self.draft, strings);
        if !errors.is_empty() {
            self.errors = errors;
            return SubmitGate::Invalid;
        }
        self.errors = FieldErrors::default();
        self.phase = SubmitPhase::Submitting;
        SubmitGate::Ready
    }

    /// Record the transport's outcome.
    ///
    /// Failure keeps the typed draft but invalidates the verification token,
    /// so the user re-passes the challenge before retrying.
    pub fn complete_submit(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.phase = SubmitPhase::Succeeded;
            }
            Err(message) => {
                self.phase = SubmitPhase::Failed(message);
                self.draft.verification_token.clear();
            }
        }
    }
}
