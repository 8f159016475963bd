//! Minimal HTTP/1.1 server for integration tests.
//!
//! Answers every request according to a [`ServerMode`] and counts the requests
//! it received, so tests can assert how many GETs the relay issued.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub enum ServerMode {
    /// Every request gets this status line and the body.
    Fixed(&'static str),
    /// `/hops/N` answers `301` with `Location: /hops/N-1`; `/hops/0` (or any
    /// other path) answers `200` with the body.
    RedirectChain,
    /// Sleeps before answering `200` with the body.
    Slow(Duration),
}

/// Handle to a running test server.
pub struct TestServer {
    pub url: String,
    requests: Arc<AtomicUsize>,
    request_lines: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// First line of each request received, e.g. `GET /a.txt HTTP/1.1`.
    pub fn request_lines(&self) -> Vec<String> {
        self.request_lines.lock().unwrap().clone()
    }

    /// URL that starts a redirect chain of `hops` 301s (see [`ServerMode::RedirectChain`]).
    pub fn hops_url(&self, hops: u32) -> String {
        format!("{}hops/{}", self.url, hops)
    }
}

/// Starts a server answering `200 OK` with `body`.
pub fn start(body: Vec<u8>) -> TestServer {
    start_with_mode(body, ServerMode::Fixed("200 OK"))
}

/// Starts a server answering every request with `status` and `body`.
pub fn start_with_status(body: Vec<u8>, status: &'static str) -> TestServer {
    start_with_mode(body, ServerMode::Fixed(status))
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start_with_mode(body: Vec<u8>, mode: ServerMode) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let requests = Arc::new(AtomicUsize::new(0));
    let request_lines = Arc::new(Mutex::new(Vec::new()));
    {
        let requests = Arc::clone(&requests);
        let request_lines = Arc::clone(&request_lines);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let body = Arc::clone(&body);
                let requests = Arc::clone(&requests);
                let request_lines = Arc::clone(&request_lines);
                thread::spawn(move || handle(stream, &body, mode, &requests, &request_lines));
            }
        });
    }
    TestServer {
        url: format!("http://127.0.0.1:{}/", port),
        requests,
        request_lines,
    }
}

/// A URL on a local port with nothing listening (connection refused).
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(
    mut stream: std::net::TcpStream,
    body: &[u8],
    mode: ServerMode,
    requests: &AtomicUsize,
    request_lines: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
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
    requests.fetch_add(1, Ordering::SeqCst);
    let first_line = request.lines().next().unwrap_or_default().to_string();
    let path = first_line.split_whitespace().nth(1).unwrap_or("/").to_string();
    request_lines.lock().unwrap().push(first_line);

    match mode {
        ServerMode::Fixed(status) => respond(&mut stream, status, "", body),
        ServerMode::Slow(delay) => {
            thread::sleep(delay);
            respond(&mut stream, "200 OK", "", body);
        }
        ServerMode::RedirectChain => match hops_remaining(&path) {
            Some(n) if n > 0 => {
                let location = format!("Location: /hops/{}\r\n", n - 1);
                respond(&mut stream, "301 Moved Permanently", &location, b"moved");
            }
            _ => respond(&mut stream, "200 OK", "", body),
        },
    }
}

fn hops_remaining(path: &str) -> Option<u32> {
    path.strip_prefix("/hops/")?.parse().ok()
}

fn respond(stream: &mut std::net::TcpStream, status: &str, extra_headers: &str, body: &[u8]) {
    let header = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/plain; charset=utf-8\r\n{}\
         Content-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        extra_headers,
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}
