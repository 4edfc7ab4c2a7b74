/// UI chrome around the report form that is not part of the draft itself.
#[derive(Clone, Debug, Default)]
pub struct FormPanelState {
    /// Whether the optional contact fields are expanded.
    pub contact_open: bool,
    /// Whether the verification token modal is open.
    pub verify_modal_open: bool,
    /// Token paste field inside the modal.
    pub token_input: String,
    /// Inline error shown inside the modal.
    pub token_error: Option<String>,
    /// Whether to focus the token input field.
    pub focus_token_requested: bool,
}

impl FormPanelState {
    /// Reset transient modal state, keeping the contact disclosure as-is.
    pub fn close_verify_modal(&mut self) {
        self.verify_modal_open = false;
        self.token_input.clear();
        self.token_error = None;
        self.focus_token_requested = false;
    }
}
