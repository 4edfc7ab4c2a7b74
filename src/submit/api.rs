//! Multipart submission of a validated report draft.

use reqwest::blocking::multipart::{Form, Part};
use serde::Deserialize;

use crate::http_client;
use crate::report::ReportDraft;

/// Form field carrying the bot-verification token.
pub const TOKEN_FIELD: &str = "cf-turnstile-response";

const MAX_RESPONSE_BYTES: usize = 256 * 1024;

/// Acknowledgement returned by the endpoint on success.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ReportReceipt {
    /// Identifier assigned to the submitted report.
    pub event_id: String,
    /// Whether delivery was queued for asynchronous processing.
    pub queued: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The endpoint rejected the report and said why.
    #[error("{message}")]
    Rejected {
        message: String,
        code: Option<String>,
    },
    /// The request never completed or the status carried no usable body.
    #[error("HTTP error: {0}")]
    Transport(String),
    /// A success status with a body that does not parse as a receipt.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl SubmitError {
    /// The endpoint's own message, when there is one worth showing verbatim.
    /// Everything else should fall back to the generic localized message.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// POST the draft, its attachments, and its verification token as one
/// multipart request. Never retries; one call per user-initiated submit.
pub fn submit_report(endpoint: &str, draft: &ReportDraft) -> Result<ReportReceipt, SubmitError> {
    let form = build_form(draft)?;
    let client = http_client::client().map_err(|err| SubmitError::Transport(err.to_string()))?;
    let response = client
        .post(endpoint)
        .multipart(form)
        .send()
        .map_err(|err| SubmitError::Transport(err.to_string()))?;

    let status = response.status();
    let body = http_client::read_response_text(response, MAX_RESPONSE_BYTES)
        .map_err(|err| SubmitError::Transport(err.to_string()))?;
    if !status.is_success() {
        return Err(parse_error_body(status.as_u16(), &body));
    }
    serde_json::from_str(&body).map_err(|err| SubmitError::InvalidResponse(err.to_string()))
}

fn build_form(draft: &ReportDraft) -> Result<Form, SubmitError> {
    let mut form = Form::new()
        .text("site_id", draft.site_id.clone())
        .text("report_type", draft.report_type.wire_name())
        .text("title", draft.title.trim().to_string())
        .text(
            "category",
            draft
                .category
                .map(|category| category.wire_name())
                .unwrap_or_default(),
        )
        .text("description", draft.description.trim().to_string());

    let page_url = draft.page_url.trim();
    if !page_url.is_empty() {
        form = form.text("page_url", page_url.to_string());
    }
    let full_name = draft.full_name.trim();
    if !full_name.is_empty() {
        form = form.text("first_name", full_name.to_string());
    }
    if let Some((contact_type, contact_value)) = contact_channel(draft) {
        form = form
            .text("contact_type", contact_type)
            .text("contact_value", contact_value);
    }
    for attachment in &draft.attachments {
        let part = Part::bytes(attachment.bytes.to_vec())
            .file_name(attachment.file_name.clone())
            .mime_str(attachment.kind.mime())
            .map_err(|err| SubmitError::Transport(err.to_string()))?;
        form = form.part("images", part);
    }
    form = form.text(TOKEN_FIELD, draft.verification_token.clone());
    Ok(form)
}

/// One contact channel goes out; email wins when both are filled.
fn contact_channel(draft: &ReportDraft) -> Option<(&'static str, String)> {
    let email = draft.email.trim();
    if !email.is_empty() {
        return Some(("email", email.to_string()));
    }
    let phone = draft.phone.trim();
    if !phone.is_empty() {
        return Some(("phone", phone.to_string()));
    }
    None
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    code: Option<String>,
}

fn parse_error_body(status: u16, body: &str) -> SubmitError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: Some(message),
            code,
        }) if !message.trim().is_empty() => SubmitError::Rejected { message, code },
        _ => SubmitError::Transport(format!("HTTP {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportDraft;

    #[test]
    fn email_wins_over_phone() {
        let draft = ReportDraft {
            email: " me@example.com ".into(),
            phone: "+90 555 000 00 00".into(),
            ..ReportDraft::default()
        };
        assert_eq!(
            contact_channel(&draft),
            Some(("email", "me@example.com".to_string()))
        );
    }

    #[test]
    fn phone_is_used_when_email_is_blank() {
        let draft = ReportDraft {
            email: "   ".into(),
            phone: "+90 555 000 00 00".into(),
            ..ReportDraft::default()
        };
        assert_eq!(
            contact_channel(&draft),
            Some(("phone", "+90 555 000 00 00".to_string()))
        );
    }

    #[test]
    fn no_contact_channel_when_both_empty() {
        assert_eq!(contact_channel(&ReportDraft::default()), None);
    }

    #[test]
    fn structured_error_body_is_surfaced_verbatim() {
        let err = parse_error_body(500, r#"{"error":"rate limited","code":"RATE_LIMIT"}"#);
        match err {
            SubmitError::Rejected { message, code } => {
                assert_eq!(message, "rate limited");
                assert_eq!(code.as_deref(), Some("RATE_LIMIT"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_error_body_yields_generic_failure() {
        let err = parse_error_body(502, "<html>bad gateway</html>");
        assert!(err.server_message().is_none());
        assert!(err.to_string().contains("HTTP 502"));
    }

    #[test]
    fn empty_error_message_yields_generic_failure() {
        let err = parse_error_body(500, r#"{"error":"","code":"X"}"#);
        assert!(err.server_message().is_none());
    }

    #[test]
    fn receipt_parses_from_success_body() {
        let receipt: ReportReceipt =
            serde_json::from_str(r#"{"event_id":"evt_123","queued":true}"#).unwrap();
        assert_eq!(receipt.event_id, "evt_123");
        assert!(receipt.queued);
    }
}
