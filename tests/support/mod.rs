//! Minimal HTTP fixture for exercising the submission transport.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{Receiver, channel};
use std::thread;
use std::time::Duration;

/// A one-shot HTTP server that captures the request body and replies with a
/// canned response.
pub struct RecordingServer {
    pub url: String,
    body_rx: Receiver<Vec<u8>>,
}

impl RecordingServer {
    /// Serve exactly one request, answering with `status_line` and `body`.
    pub fn start(status_line: &'static str, response_body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fixture listener");
        let addr = listener.local_addr().expect("fixture addr");
        let (body_tx, body_rx) = channel();
        thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            stream
                .set_read_timeout(Some(Duration::from_secs(5)))
                .expect("set read timeout");
            let request_body = read_request_body(&mut stream);
            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{response_body}",
                response_body.len(),
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = body_tx.send(request_body);
        });
        Self {
            url: format!("http://{addr}/v1/reports"),
            body_rx,
        }
    }

    /// The captured request body, decoded from chunked framing if needed.
    pub fn recorded_body(&self) -> Vec<u8> {
        self.body_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("request body recorded")
    }
}

fn read_request_body(stream: &mut std::net::TcpStream) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 8 * 1024];
    let header_end = loop {
        if let Some(pos) = find(&buffer, b"\r\n\r\n") {
            break pos + 4;
        }
        let read = stream.read(&mut chunk).expect("read request headers");
        assert!(read > 0, "connection closed before headers completed");
        buffer.extend_from_slice(&chunk[..read]);
    };

    let headers = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let mut body = buffer[header_end..].to_vec();
    if let Some(length) = content_length(&headers) {
        while body.len() < length {
            let read = stream.read(&mut chunk).expect("read request body");
            assert!(read > 0, "connection closed before body completed");
            body.extend_from_slice(&chunk[..read]);
        }
        body.truncate(length);
        body
    } else {
        // Chunked framing: read until the zero-length terminator, then strip
        // the chunk size lines.
        while find(&body, b"0\r\n\r\n").is_none() {
            let read = stream.read(&mut chunk).expect("read chunked body");
            assert!(read > 0, "connection closed before chunked body completed");
            body.extend_from_slice(&chunk[..read]);
        }
        decode_chunked(&body)
    }
}

fn content_length(headers: &str) -> Option<usize> {
    headers.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        if name.trim().eq_ignore_ascii_case("content-length") {
            value.trim().parse().ok()
        } else {
            None
        }
    })
}

fn decode_chunked(raw: &[u8]) -> Vec<u8> {
    let mut decoded = Vec::new();
    let mut rest = raw;
    loop {
        let Some(line_end) = find(rest, b"\r\n") else {
            return decoded;
        };
        let size_line = String::from_utf8_lossy(&rest[..line_end]);
        let size = usize::from_str_radix(size_line.trim(), 16).unwrap_or(0);
        if size == 0 {
            return decoded;
        }
        let start = line_end + 2;
        decoded.extend_from_slice(&rest[start..start + size]);
        rest = &rest[start + size + 2..];
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
