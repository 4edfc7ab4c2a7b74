//! Modal for pasting the token issued by the hosted challenge page.

use eframe::egui::{self, Align2, RichText};

use super::{EguiApp, error_color};

impl EguiApp {
    pub(super) fn render_verify_modal(&mut self, ctx: &egui::Context) {
        if !self.controller.ui.form.verify_modal_open {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.cancel_verification();
            return;
        }
        let strings = self.controller.strings();
        let mut open = true;
        egui::Window::new(strings.verify_title)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .default_width(440.0)
            .open(&mut open)
            .show(ctx, |ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.controller.ui.form.token_input)
                        .hint_text(strings.verify_paste_placeholder)
                        .desired_width(400.0),
                );
                if response.changed() {
                    self.controller.ui.form.token_error = None;
                }
                if self.controller.ui.form.focus_token_requested && !response.has_focus() {
                    response.request_focus();
                    self.controller.ui.form.focus_token_requested = false;
                }
                if let Some(error) = self.controller.ui.form.token_error.clone() {
                    ui.add_space(6.0);
                    ui.label(RichText::new(error).color(error_color(ui)).small());
                }
                ui.add_space(10.0);
                let token_plausible = !self.controller.ui.form.token_input.trim().is_empty();
                if ui
                    .add_enabled(token_plausible, egui::Button::new(strings.verify_confirm_btn))
                    .clicked()
                {
                    self.controller.confirm_verification_token();
                }
            });
        if !open {
            self.controller.cancel_verification();
        }
    }
}
