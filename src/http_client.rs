//! Shared HTTP client configuration and bounded response helpers.

use std::io::{self, Read};
use std::sync::OnceLock;
use std::time::Duration;

use reqwest::blocking::{Client, Response};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
// Generous enough for five full-size image uploads on a slow link.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Return a shared HTTP client with consistent timeouts.
pub(crate) fn client() -> Result<&'static Client, reqwest::Error> {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }
    let built = Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(CLIENT.get_or_init(|| built))
}

/// Read a response body into a string, enforcing a maximum byte size.
pub(crate) fn read_response_text(response: Response, max_bytes: usize) -> Result<String, io::Error> {
    if let Some(length) = response.content_length() {
        if length > max_bytes as u64 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Response too large: {length} bytes"),
            ));
        }
    }
    let mut limited = response.take(max_bytes as u64 + 1);
    let mut text = String::new();
    limited.read_to_string(&mut text)?;
    if text.len() > max_bytes {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Response exceeded {max_bytes} bytes"),
        ));
    }
    Ok(text)
}
