//! Shared state types for the egui UI.

mod form;
mod status;

pub use form::*;
pub use status::*;

/// Which screen the app is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppView {
    /// The report form.
    #[default]
    Form,
    /// The post-submission thank-you screen.
    Success,
}

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub view: AppView,
    pub status: StatusBarState,
    pub form: FormPanelState,
}
