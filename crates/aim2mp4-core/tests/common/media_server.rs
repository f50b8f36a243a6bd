//! Minimal HTTP/1.1 server for integration tests: fixed bodies by path.
//!
//! Serves plain GET only (no ranges); unknown paths get 404. Runs until the
//! test process exits.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

/// A canned response for one path.
pub struct Route {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Route {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }
}

/// Starts a server in a background thread serving `routes`. Returns the base
/// URL without a trailing slash (e.g. "http://127.0.0.1:12345").
pub fn start(routes: HashMap<String, Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, Route>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));

    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };

    let path = request_path(request).unwrap_or("/");
    let (status, body): (&str, &[u8]) = match routes.get(path) {
        Some(route) => (status_line(route.status), &route.body),
        None => ("404 Not Found", b""),
    };

    let header = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}

/// Extracts the request path from the first request line ("GET /x HTTP/1.1").
///
/// Any query string is dropped so routes are keyed by path alone.
fn request_path(request: &str) -> Option<&str> {
    let first_line = request.lines().next()?;
    let target = first_line.split_whitespace().nth(1)?;
    Some(target.split('?').next().unwrap_or(target))
}

fn status_line(status: u16) -> &'static str {
    match status {
        200 => "200 OK",
        404 => "404 Not Found",
        500 => "500 Internal Server Error",
        503 => "503 Service Unavailable",
        _ => "418 I'm a teapot",
    }
}
