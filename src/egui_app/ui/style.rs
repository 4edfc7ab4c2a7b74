//! Palettes and widget visuals for the light and dark themes.

use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

/// Theme after resolving the `system` preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub success: Color32,
}

pub fn palette(theme: ResolvedTheme) -> Palette {
    match theme {
        ResolvedTheme::Dark => Palette {
            bg_primary: Color32::from_rgb(14, 15, 18),
            bg_secondary: Color32::from_rgb(26, 28, 32),
            bg_tertiary: Color32::from_rgb(42, 45, 50),
            panel_outline: Color32::from_rgb(48, 52, 58),
            text_primary: Color32::from_rgb(196, 202, 210),
            text_muted: Color32::from_rgb(138, 145, 155),
            accent: Color32::from_rgb(116, 170, 255),
            error: Color32::from_rgb(214, 92, 82),
            warning: Color32::from_rgb(208, 150, 62),
            success: Color32::from_rgb(102, 176, 136),
        },
        ResolvedTheme::Light => Palette {
            bg_primary: Color32::from_rgb(246, 247, 249),
            bg_secondary: Color32::from_rgb(255, 255, 255),
            bg_tertiary: Color32::from_rgb(233, 236, 240),
            panel_outline: Color32::from_rgb(208, 213, 220),
            text_primary: Color32::from_rgb(38, 42, 48),
            text_muted: Color32::from_rgb(110, 118, 128),
            accent: Color32::from_rgb(36, 99, 210),
            error: Color32::from_rgb(178, 52, 44),
            warning: Color32::from_rgb(164, 110, 24),
            success: Color32::from_rgb(38, 130, 86),
        },
    }
}

/// Build widget visuals for the resolved theme.
pub fn visuals(theme: ResolvedTheme) -> Visuals {
    let palette = palette(theme);
    let mut visuals = match theme {
        ResolvedTheme::Dark => Visuals::dark(),
        ResolvedTheme::Light => Visuals::light(),
    };
    visuals.window_fill = palette.bg_secondary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent;
    visuals.extreme_bg_color = palette.bg_secondary;
    visuals.faint_bg_color = palette.bg_tertiary;
    visuals.error_fg_color = palette.error;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_field_style(&mut visuals.widgets.inactive, palette);
    set_field_style(&mut visuals.widgets.hovered, palette);
    set_field_style(&mut visuals.widgets.active, palette);
    set_field_style(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(4);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
    visuals
}

fn set_field_style(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(4);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}
