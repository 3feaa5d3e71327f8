//! In-process HTTP responder for tests.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// Answers one connection per canned `(status, body)` response, recording
/// each request head.
pub struct TestServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let base_url = format!(
            "http://{}",
            listener.local_addr().expect("test listener address")
        );
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        thread::spawn(move || {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let head = read_head(&mut stream);
                if let Ok(mut seen) = seen.lock() {
                    seen.push(head);
                }

                let response = format!(
                    "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self { base_url, requests }
    }

    /// Every response is `200` with the given body.
    pub fn ok(bodies: Vec<String>) -> Self {
        Self::start(bodies.into_iter().map(|body| (200, body)).collect())
    }

    /// Head of the `idx`th request received.
    pub fn request(&self, idx: usize) -> String {
        self.requests.lock().expect("request log")[idx].clone()
    }
}

/// A base URL on a port nothing listens on.
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("test listener address");
    drop(listener);
    format!("http://{}", addr)
}

fn read_head(stream: &mut impl Read) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8_lossy(&head).to_string()
}

/// A quotes API page body with one record per id.
pub fn quotes_body(page: u32, total_pages: u32, ids: &[&str]) -> String {
    let results: Vec<String> = ids
        .iter()
        .map(|id| {
            format!(
                r#"{{"_id":"{id}","author":"Author {id}","authorSlug":"author-{id}","content":"Quote {id}","dateAdded":"2021-06-01","dateModified":"2023-04-14","length":7,"tags":["wisdom"]}}"#
            )
        })
        .collect();
    format!(
        r#"{{"count":{},"lastItemIndex":null,"page":{},"results":[{}],"totalCount":99,"totalPages":{}}}"#,
        ids.len(),
        page,
        results.join(","),
        total_pages
    )
}
