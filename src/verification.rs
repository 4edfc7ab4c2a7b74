//! Bot-verification helpers.
//!
//! The challenge itself runs on a hosted page in the user's browser; this
//! module only knows how to build that page's URL, how to sanity-check a
//! pasted token, and which sentinel to use when no challenge is configured.

use url::Url;

use crate::config::AppConfig;

/// Sentinel token used when no challenge site key is configured.
///
/// Verification is disabled in that configuration; the sentinel keeps the
/// submit path open and tells the endpoint the challenge was skipped.
pub const SKIPPED_TOKEN: &str = "skipped";

/// The token a fresh draft starts with under the given configuration.
pub fn initial_token(config: &AppConfig) -> String {
    if config.verification_disabled() {
        SKIPPED_TOKEN.to_string()
    } else {
        String::new()
    }
}

/// URL of the hosted challenge page for this configuration.
pub fn challenge_page_url(config: &AppConfig) -> String {
    match Url::parse(&config.challenge_url) {
        Ok(mut url) => {
            url.query_pairs_mut()
                .append_pair("sitekey", &config.challenge_site_key);
            url.to_string()
        }
        Err(_) => config.challenge_url.clone(),
    }
}

/// Shape check for a pasted verification token.
///
/// Guards against obvious paste mistakes (page text, empty clipboard); the
/// endpoint remains the actual judge of validity.
pub fn looks_like_token(token: &str) -> bool {
    let trimmed = token.trim();
    if trimmed.len() < 20 || trimmed.len() > 2048 {
        return false;
    }
    trimmed
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.'))
}
