//! egui renderer for the application UI.

mod form_panel;
pub mod style;
mod success;
mod verify_modal;

use std::collections::HashMap;

use eframe::egui::{self, Color32, RichText, TextureHandle, TextureOptions};

use crate::config::{AppConfig, ThemeChoice};
use crate::egui_app::controller::EguiController;
use crate::egui_app::state::AppView;
use crate::egui_app::view_model;
use crate::i18n::Language;
use crate::report::{CandidateImage, ImageKind, SubmitPhase};
use style::ResolvedTheme;

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    applied_theme: Option<ResolvedTheme>,
    preview_textures: HashMap<u64, TextureHandle>,
}

impl EguiApp {
    /// Create the app from an explicit configuration and the optional
    /// referring page URL.
    pub fn new(config: AppConfig, referrer: Option<String>) -> Self {
        Self {
            controller: EguiController::new(config, referrer),
            applied_theme: None,
            preview_textures: HashMap::new(),
        }
    }

    fn resolved_theme(&self, ctx: &egui::Context) -> ResolvedTheme {
        match self.controller.theme() {
            ThemeChoice::Light => ResolvedTheme::Light,
            ThemeChoice::Dark => ResolvedTheme::Dark,
            ThemeChoice::System => match ctx.input(|i| i.raw.system_theme) {
                Some(egui::Theme::Light) => ResolvedTheme::Light,
                _ => ResolvedTheme::Dark,
            },
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        let resolved = self.resolved_theme(ctx);
        if self.applied_theme == Some(resolved) {
            return;
        }
        ctx.set_visuals(style::visuals(resolved));
        self.applied_theme = Some(resolved);
    }

    /// Route files dropped anywhere on the window into the attachment list.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped_files = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped_files.is_empty() || self.controller.ui.view != AppView::Form {
            return;
        }
        let mut paths = Vec::new();
        let mut candidates = Vec::new();
        for file in dropped_files {
            if let Some(path) = file.path {
                paths.push(path);
            } else if let Some(bytes) = file.bytes {
                candidates.push(CandidateImage {
                    kind: ImageKind::from_path(std::path::Path::new(&file.name)),
                    file_name: file.name,
                    bytes: bytes.to_vec().into(),
                });
            }
        }
        if !paths.is_empty() {
            self.controller.stage_candidate_paths(paths);
        }
        if !candidates.is_empty() {
            self.controller.stage_candidates(candidates);
        }
    }

    /// Upload new preview thumbnails to the GPU and drop textures whose
    /// attachment is gone, releasing the memory with them.
    fn sync_preview_textures(&mut self, ctx: &egui::Context) {
        let preview_ids: Vec<u64> = self.controller.previews().keys().copied().collect();
        self.preview_textures
            .retain(|id, _| preview_ids.contains(id));
        for id in preview_ids {
            if self.preview_textures.contains_key(&id) {
                continue;
            }
            let Some(image) = self.controller.previews().get(&id).cloned() else {
                continue;
            };
            let texture =
                ctx.load_texture(format!("attachment-{id}"), image, TextureOptions::LINEAR);
            self.preview_textures.insert(id, texture);
        }
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        let strings = self.controller.strings();
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading(strings.page_title);
                    ui.label(RichText::new(strings.page_subtitle).weak());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_picker(ui);
                    ui.add_space(8.0);
                    self.render_language_picker(ui);
                });
            });
            ui.add_space(6.0);
        });
    }

    fn render_language_picker(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.controller.language();
        egui::ComboBox::from_id_salt("language_picker")
            .selected_text(selected.native_name())
            .show_ui(ui, |ui| {
                for language in Language::ALL {
                    ui.selectable_value(&mut selected, language, language.native_name());
                }
            });
        if selected != self.controller.language() {
            self.controller.set_language(selected);
        }
    }

    fn render_theme_picker(&mut self, ui: &mut egui::Ui) {
        let strings = self.controller.strings();
        let mut selected = self.controller.theme();
        egui::ComboBox::from_id_salt("theme_picker")
            .selected_text(view_model::theme_label(selected, strings))
            .show_ui(ui, |ui| {
                for choice in [ThemeChoice::Light, ThemeChoice::Dark, ThemeChoice::System] {
                    ui.selectable_value(
                        &mut selected,
                        choice,
                        view_model::theme_label(choice, strings),
                    );
                }
            });
        if selected != self.controller.theme() {
            self.controller.set_theme(selected);
        }
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status = &self.controller.ui.status;
            ui.horizontal(|ui| {
                ui.add_space(4.0);
                ui.painter().circle_filled(
                    ui.cursor().min + egui::vec2(6.0, 10.0),
                    5.0,
                    status.badge_color,
                );
                ui.add_space(14.0);
                ui.label(&status.text);
            });
        });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.process_job_messages();
        self.apply_visuals(ctx);
        self.handle_dropped_files(ctx);
        self.sync_preview_textures(ctx);

        self.render_header(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("form_scroll")
                .show(ui, |ui| {
                    self.render_form_panel(ui);
                });
        });
        if self.controller.ui.view == AppView::Success {
            self.render_success_overlay(ctx);
        }
        self.render_verify_modal(ctx);

        // Keep frames coming while the worker is away so its result is
        // picked up promptly.
        if self.controller.form.phase == SubmitPhase::Submitting {
            ctx.request_repaint_after(std::time::Duration::from_millis(150));
        }
    }
}

pub(super) fn error_color(ui: &egui::Ui) -> Color32 {
    ui.visuals().error_fg_color
}
