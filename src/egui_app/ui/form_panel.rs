//! The report form: type toggle, fields, attachments, verification, submit.

use eframe::egui::{self, RichText};

use super::{EguiApp, error_color, style};
use crate::egui_app::view_model;
use crate::report::draft::{
    MAX_CONTACT_CHARS, MAX_DESCRIPTION_CHARS, MAX_PHONE_CHARS, MAX_TITLE_CHARS,
};
use crate::report::{Category, Field, ReportType, SubmitPhase};

impl EguiApp {
    pub(super) fn render_form_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        self.render_type_toggle(ui);
        ui.add_space(12.0);
        ui.columns(2, |cols| {
            self.render_left_column(&mut cols[0]);
            self.render_right_column(&mut cols[1]);
        });
        ui.add_space(8.0);
        self.render_contact_section(ui);
        self.render_verification_row(ui);
        ui.add_space(12.0);
        self.render_submit_row(ui);
    }

    fn render_type_toggle(&mut self, ui: &mut egui::Ui) {
        let strings = self.controller.strings();
        let current = self.controller.form.draft.report_type;
        ui.horizontal(|ui| {
            for report_type in [ReportType::Bug, ReportType::Request] {
                let label = view_model::report_type_label(report_type, strings);
                if ui
                    .selectable_label(current == report_type, label)
                    .clicked()
                {
                    self.controller.change_report_type(report_type);
                }
            }
        });
    }

    fn render_left_column(&mut self, ui: &mut egui::Ui) {
        let strings = self.controller.strings();
        let report_type = self.controller.form.draft.report_type;
        let submitting = self.controller.form.phase == SubmitPhase::Submitting;

        ui.label(format!("{} *", strings.label_site));
        let sites = self.controller.config().sites.clone();
        let mut selected = self.controller.form.draft.site_id.clone();
        let display = if selected.is_empty() {
            strings.site_select_placeholder.to_string()
        } else {
            selected.clone()
        };
        egui::ComboBox::from_id_salt("site_select")
            .selected_text(display)
            .width(ui.available_width().min(320.0))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, String::new(), strings.site_select_placeholder);
                for site in &sites {
                    ui.selectable_value(&mut selected, site.clone(), site.as_str());
                }
            });
        if self.controller.form.auto_detected() {
            ui.label(RichText::new(strings.auto_detected).weak().small());
        }
        if selected != self.controller.form.draft.site_id {
            self.controller.select_site(selected);
        }
        self.render_field_error(ui, Field::Site);
        ui.add_space(8.0);

        ui.label(format!("{} *", strings.label_title));
        let response = ui.add_enabled(
            !submitting,
            egui::TextEdit::singleline(&mut self.controller.form.draft.title)
                .hint_text(view_model::title_placeholder(report_type, strings))
                .char_limit(MAX_TITLE_CHARS)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.controller.field_edited(Field::Title);
        }
        self.render_field_error(ui, Field::Title);
        ui.add_space(8.0);

        ui.label(format!("{} *", strings.label_description));
        let response = ui.add_enabled(
            !submitting,
            egui::TextEdit::multiline(&mut self.controller.form.draft.description)
                .hint_text(view_model::description_placeholder(report_type, strings))
                .char_limit(MAX_DESCRIPTION_CHARS)
                .desired_rows(8)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.controller.field_edited(Field::Description);
        }
        self.render_field_error(ui, Field::Description);
    }

    fn render_right_column(&mut self, ui: &mut egui::Ui) {
        let strings = self.controller.strings();
        let submitting = self.controller.form.phase == SubmitPhase::Submitting;

        ui.label(format!("{} *", strings.label_category));
        let mut selected = self.controller.form.draft.category;
        let display = selected
            .map(|category| view_model::category_label(category, strings))
            .unwrap_or(strings.select_placeholder);
        egui::ComboBox::from_id_salt("category_select")
            .selected_text(display)
            .width(ui.available_width().min(320.0))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, None, strings.select_placeholder);
                for category in Category::ALL {
                    ui.selectable_value(
                        &mut selected,
                        Some(category),
                        view_model::category_label(category, strings),
                    );
                }
            });
        if selected != self.controller.form.draft.category {
            self.controller.select_category(selected);
        }
        self.render_field_error(ui, Field::Category);
        ui.add_space(8.0);

        ui.label(strings.label_page_url);
        let response = ui.add_enabled(
            !submitting,
            egui::TextEdit::singleline(&mut self.controller.form.draft.page_url)
                .hint_text("https://...")
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.controller.field_edited(Field::PageUrl);
        }
        self.render_field_error(ui, Field::PageUrl);
        ui.add_space(8.0);

        self.render_images_section(ui);
    }

    fn render_images_section(&mut self, ui: &mut egui::Ui) {
        let strings = self.controller.strings();
        ui.label(RichText::new(strings.label_images).strong());
        ui.horizontal(|ui| {
            if ui.button(strings.browse_btn).clicked() {
                self.controller.add_attachments_via_dialog();
            }
            ui.label(RichText::new(strings.drop_text).weak().small());
        });
        let attachments: Vec<(u64, String)> = self
            .controller
            .form
            .draft
            .attachments
            .iter()
            .map(|attachment| (attachment.id, attachment.file_name.clone()))
            .collect();
        let mut remove_index = None;
        for (index, (id, file_name)) in attachments.iter().enumerate() {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if let Some(texture) = self.preview_textures.get(id) {
                    ui.add(egui::Image::from_texture(texture).max_size(egui::vec2(96.0, 72.0)));
                }
                ui.label(RichText::new(file_name).small());
                if ui.small_button(strings.remove_image).clicked() {
                    remove_index = Some(index);
                }
            });
        }
        if let Some(index) = remove_index {
            self.controller.remove_attachment(index);
        }
    }

    fn render_contact_section(&mut self, ui: &mut egui::Ui) {
        let strings = self.controller.strings();
        let open = self.controller.ui.form.contact_open;
        if ui.selectable_label(open, strings.contact_toggle).clicked() {
            self.controller.ui.form.contact_open = !open;
        }
        if !self.controller.ui.form.contact_open {
            return;
        }
        ui.add_space(4.0);
        ui.columns(3, |cols| {
            cols[0].label(strings.label_full_name);
            cols[0].add(
                egui::TextEdit::singleline(&mut self.controller.form.draft.full_name)
                    .char_limit(MAX_CONTACT_CHARS)
                    .desired_width(f32::INFINITY),
            );
            cols[1].label(strings.label_phone);
            cols[1].add(
                egui::TextEdit::singleline(&mut self.controller.form.draft.phone)
                    .char_limit(MAX_PHONE_CHARS)
                    .desired_width(f32::INFINITY),
            );
            cols[2].label(strings.label_email);
            cols[2].add(
                egui::TextEdit::singleline(&mut self.controller.form.draft.email)
                    .char_limit(MAX_CONTACT_CHARS)
                    .desired_width(f32::INFINITY),
            );
        });
    }

    fn render_verification_row(&mut self, ui: &mut egui::Ui) {
        if self.controller.config().verification_disabled() {
            return;
        }
        let strings = self.controller.strings();
        ui.add_space(10.0);
        ui.label(RichText::new(strings.verify_title).strong());
        if self.controller.form.draft.verification_token.is_empty() {
            ui.horizontal(|ui| {
                if ui.button(strings.verify_open_btn).clicked() {
                    self.controller.start_verification();
                }
                ui.label(RichText::new(strings.verify_pending).weak().small());
            });
        } else {
            let success = style::palette(
                self.applied_theme.unwrap_or(style::ResolvedTheme::Dark),
            )
            .success;
            ui.label(RichText::new(strings.verify_done).color(success));
        }
    }

    fn render_submit_row(&mut self, ui: &mut egui::Ui) {
        let strings = self.controller.strings();
        let submitting = self.controller.form.phase == SubmitPhase::Submitting;
        ui.horizontal(|ui| {
            if ui
                .add_enabled(
                    self.controller.form.can_submit(),
                    egui::Button::new(strings.submit_btn),
                )
                .clicked()
            {
                self.controller.submit();
            }
            if submitting {
                ui.add_space(8.0);
                ui.add(egui::Spinner::new().size(16.0));
                ui.label(RichText::new(strings.sending).weak());
            }
        });
        if let SubmitPhase::Failed(message) = self.controller.form.phase.clone() {
            ui.add_space(8.0);
            ui.label(RichText::new(message).color(error_color(ui)));
        }
    }

    fn render_field_error(&self, ui: &mut egui::Ui, field: Field) {
        if let Some(message) = self.controller.form.errors.get(field) {
            ui.label(
                RichText::new(message)
                    .color(error_color(ui))
                    .small(),
            );
        }
    }
}
