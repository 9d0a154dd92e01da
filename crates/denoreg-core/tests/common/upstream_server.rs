//! Minimal HTTP/1.1 server standing in for a hosting provider in integration tests.
//!
//! Serves a fixed set of paths. Unknown paths get a plain-text 404 like
//! raw.githubusercontent.com does; `/moved/<path>` answers 302 to `/<path>`.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone)]
pub struct Asset {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Asset {
    pub fn typescript(body: &str) -> Self {
        Self {
            content_type: "application/typescript; charset=utf-8",
            body: body.as_bytes().to_vec(),
        }
    }
}

/// Starts a server in a background thread serving `assets` keyed by request
/// path. Returns the base URL without trailing slash (e.g.
/// "http://127.0.0.1:12345"). The server runs until the process exits.
pub fn start(assets: HashMap<String, Asset>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let assets = Arc::new(assets);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let assets = Arc::clone(&assets);
            thread::spawn(move || handle(stream, &assets));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// A base URL on which nothing listens.
pub fn dead_base_url() -> String {
    let port = {
        let l = TcpListener::bind("127.0.0.1:0").expect("bind");
        l.local_addr().unwrap().port()
    };
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, assets: &HashMap<String, Asset>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, path) = parse_request_line(request);
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    if let Some(target) = path.strip_prefix("/moved") {
        let response = format!(
            "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            target
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }

    let (status, content_type, body): (&str, &str, &[u8]) = match assets.get(path) {
        Some(asset) => ("200 OK", asset.content_type, asset.body.as_slice()),
        None => ("404 Not Found", "text/plain; charset=utf-8", &b"404: Not Found"[..]),
    };
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nX-Upstream: test\r\nConnection: close\r\n\r\n",
        status,
        content_type,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

/// Returns (method, path) from the request line.
fn parse_request_line(request: &str) -> (&str, &str) {
    let line = request.lines().next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");
    (method, path)
}
