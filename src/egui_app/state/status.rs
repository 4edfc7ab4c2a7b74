use egui::Color32;

/// Status dot + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Tone color of the status dot.
    pub badge_color: Color32,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            text: String::new(),
            badge_color: Color32::from_rgb(96, 100, 106),
        }
    }
}
