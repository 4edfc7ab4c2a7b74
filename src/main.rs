//! Entry point for the egui-based feedback client.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use eframe::egui;
use sitereport::config;
use sitereport::egui_app::ui::EguiApp;
use sitereport::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    // Launched from a "report a problem" link, the first URL argument is the
    // page the report is about.
    let referrer = referrer_from_args(std::env::args().skip(1));
    let config_result = config::load_or_default();

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([960.0, 740.0])
        .with_min_inner_size([640.0, 560.0])
        .with_drag_and_drop(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Site Report",
        native_options,
        Box::new(move |_cc| match config_result {
            Ok(config) => Ok(Box::new(EguiApp::new(config, referrer))),
            Err(err) => Ok(Box::new(LaunchError {
                message: format!("Failed to load config: {err}"),
            })),
        }),
    )?;
    Ok(())
}

/// First argument that looks like the referring page URL.
fn referrer_from_args(mut args: impl Iterator<Item = String>) -> Option<String> {
    args.find(|arg| arg.starts_with("http://") || arg.starts_with("https://"))
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
