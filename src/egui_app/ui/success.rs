//! Post-submission thank-you overlay.

use eframe::egui::{self, Align2, Color32, CornerRadius, RichText};

use super::EguiApp;

impl EguiApp {
    pub(super) fn render_success_overlay(&mut self, ctx: &egui::Context) {
        let strings = self.controller.strings();

        let screen = ctx.screen_rect();
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("success_backdrop"),
        ));
        painter.rect_filled(
            screen,
            CornerRadius::ZERO,
            Color32::from_rgba_premultiplied(0, 0, 0, 160),
        );

        let mut new_report_clicked = false;
        egui::Window::new("success_overlay")
            .title_bar(false)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .default_width(380.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    ui.heading(strings.success_title);
                    ui.add_space(6.0);
                    ui.label(strings.success_text);
                    ui.add_space(12.0);
                    if ui.button(RichText::new(strings.new_report).strong()).clicked() {
                        new_report_clicked = true;
                    }
                    ui.add_space(12.0);
                });
            });
        if new_report_clicked {
            self.controller.start_new_report();
        }
    }
}
