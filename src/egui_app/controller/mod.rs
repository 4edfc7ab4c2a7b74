//! Maintains app state and bridges the report core to the egui UI.

mod attachments;
mod jobs;
mod submission;
mod verify;

pub(crate) use jobs::{ControllerJobs, JobMessage, SubmitJob};

use std::collections::HashMap;

use egui::Color32;

use crate::config::{self, AppConfig, ThemeChoice};
use crate::egui_app::state::{AppView, UiState};
use crate::i18n::{self, Language, Strings};
use crate::report::{Field, ReportForm, ReportType};
use crate::verification;

/// Owns the report form, its collaborators, and all UI-facing state.
///
/// The configuration is handed in once at construction; nothing here reads
/// ambient globals. This is also the only type that talks to the submission
/// transport.
pub struct EguiController {
    pub ui: UiState,
    pub form: ReportForm,
    config: AppConfig,
    language: Language,
    referrer: Option<String>,
    pub(crate) jobs: ControllerJobs,
    previews: HashMap<u64, egui::ColorImage>,
}

impl EguiController {
    /// Build the controller from an explicit configuration and the referring
    /// page URL the process was launched with, if any.
    pub fn new(config: AppConfig, referrer: Option<String>) -> Self {
        let language = config.language.unwrap_or_else(i18n::detect);
        let mut form = ReportForm::initialize(referrer.as_deref(), &config.sites);
        form.set_verification_token(verification::initial_token(&config));
        if config.verification_disabled() {
            tracing::info!("No challenge site key configured; verification runs in skip mode");
        }
        let mut controller = Self {
            ui: UiState::default(),
            form,
            config,
            language,
            referrer,
            jobs: ControllerJobs::new(),
            previews: HashMap::new(),
        };
        let ready = controller.strings().status_ready.to_string();
        controller.set_status(ready, StatusTone::Idle);
        controller
    }

    /// The active string table.
    pub fn strings(&self) -> &'static Strings {
        i18n::table(self.language)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch the UI language and persist the choice.
    ///
    /// Only display text changes; the draft is untouched. Any inline errors
    /// are re-derived so their messages follow the new language.
    pub fn set_language(&mut self, language: Language) {
        if language == self.language {
            return;
        }
        self.language = language;
        if !self.form.errors.is_empty() {
            self.form.errors = crate::report::validate::validate(&self.form.draft, self.strings());
        }
        let ready = self.strings().status_ready.to_string();
        self.set_status(ready, StatusTone::Idle);
        self.config.language = Some(language);
        self.persist_config();
    }

    pub fn theme(&self) -> ThemeChoice {
        self.config.theme
    }

    /// Switch the theme preference and persist the choice.
    pub fn set_theme(&mut self, theme: ThemeChoice) {
        if theme == self.config.theme {
            return;
        }
        self.config.theme = theme;
        self.persist_config();
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Decoded preview thumbnails keyed by attachment id.
    pub(crate) fn previews(&self) -> &HashMap<u64, egui::ColorImage> {
        &self.previews
    }

    /// Clear a field's inline error after the user edited it in place.
    pub fn field_edited(&mut self, field: Field) {
        self.form.errors.clear(field);
    }

    pub fn select_site(&mut self, site_id: String) {
        self.form.select_site(site_id);
    }

    pub fn select_category(&mut self, category: Option<crate::report::Category>) {
        self.form.select_category(category);
    }

    /// Switch between bug and request reports.
    pub fn change_report_type(&mut self, report_type: ReportType) {
        if report_type == self.form.draft.report_type {
            return;
        }
        self.form.change_report_type(report_type);
        self.form
            .set_verification_token(verification::initial_token(&self.config));
        self.previews.clear();
        self.ui.form.close_verify_modal();
        let ready = self.strings().status_ready.to_string();
        self.set_status(ready, StatusTone::Idle);
    }

    /// Replace the submitted draft with a fresh one and return to the form.
    pub fn start_new_report(&mut self) {
        self.form = ReportForm::initialize(self.referrer.as_deref(), &self.config.sites);
        self.form
            .set_verification_token(verification::initial_token(&self.config));
        self.previews.clear();
        self.ui.form = Default::default();
        self.ui.view = AppView::Form;
        let ready = self.strings().status_ready.to_string();
        self.set_status(ready, StatusTone::Idle);
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.badge_color = status_badge_color(tone);
    }

    fn persist_config(&mut self) {
        if let Err(err) = config::save(&self.config) {
            tracing::warn!("Failed to persist config: {err}");
        }
    }
}

/// Tone of the footer status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => Color32::from_rgb(96, 100, 106),
        StatusTone::Busy => Color32::from_rgb(31, 139, 255),
        StatusTone::Info => Color32::from_rgb(64, 140, 112),
        StatusTone::Warning => Color32::from_rgb(192, 138, 43),
        StatusTone::Error => Color32::from_rgb(192, 57, 43),
    }
}
