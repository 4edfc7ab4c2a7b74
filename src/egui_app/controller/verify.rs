//! Bot-verification flow: hand off to the hosted challenge, accept the
//! pasted token.

use super::{EguiController, StatusTone};
use crate::verification;

impl EguiController {
    /// Open the hosted challenge page in the browser and show the paste
    /// modal. Does nothing in the keyless skip mode.
    pub fn start_verification(&mut self) {
        if self.config().verification_disabled() {
            return;
        }
        let url = verification::challenge_page_url(self.config());
        if let Err(err) = open::that(&url) {
            tracing::warn!("Failed to open challenge page {url}: {err}");
            self.set_status(err.to_string(), StatusTone::Error);
            return;
        }
        self.ui.form.verify_modal_open = true;
        self.ui.form.token_error = None;
        self.ui.form.focus_token_requested = true;
    }

    /// Accept the pasted token if its shape is plausible.
    pub fn confirm_verification_token(&mut self) {
        let token = self.ui.form.token_input.trim().to_string();
        if !verification::looks_like_token(&token) {
            self.ui.form.token_error = Some(self.strings().verify_invalid_token.to_string());
            return;
        }
        self.form.set_verification_token(token);
        self.ui.form.close_verify_modal();
        let done = self.strings().verify_done.to_string();
        self.set_status(done, StatusTone::Info);
    }

    /// Dismiss the paste modal without a token.
    pub fn cancel_verification(&mut self) {
        self.ui.form.close_verify_modal();
    }
}
