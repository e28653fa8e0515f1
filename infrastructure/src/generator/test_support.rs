//! Minimal HTTP/1.1 stub server for transport tests.
//!
//! Serves one connection per request (responses carry `connection: close`),
//! counts accepted connections, and records each request's first line and
//! body so tests can assert on paths and wire bodies.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub(crate) struct RecordedRequest {
    pub line: String,
    pub body: String,
}

pub(crate) struct StubServer {
    pub base_url: String,
    pub hits: Arc<AtomicUsize>,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    /// Serve the scripted `(status, body)` responses in order; once the
    /// script runs out, keep repeating the last entry.
    pub(crate) async fn scripted(responses: Vec<(u16, String)>) -> Self {
        assert!(!responses.is_empty());
        Self::with_handler(move |_, served| {
            responses[served.min(responses.len() - 1)].clone()
        })
        .await
    }

    /// Serve responses computed from the request body.
    pub(crate) async fn respond_with<F>(handler: F) -> Self
    where
        F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
    {
        Self::with_handler(move |body, _| handler(body)).await
    }

    /// Accept connections and drop them without writing a response, so the
    /// client sees a transport-level failure on every attempt.
    pub(crate) async fn closing() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let counter = hits.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                drop(stream);
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
            requests,
        }
    }

    async fn with_handler<F>(handler: F) -> Self
    where
        F: Fn(&str, usize) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::new(Mutex::new(Vec::new()));

        let counter = hits.clone();
        let recorded = requests.clone();
        tokio::spawn(async move {
            let mut served = 0usize;
            while let Ok((mut stream, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                let request = read_request(&mut stream).await;
                let (status, body) = handler(&request.body, served);
                served += 1;
                recorded.lock().unwrap().push(request);

                let reply = format!(
                    "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(reply.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
            requests,
        }
    }
}

/// Read one HTTP request: headers up to the blank line, then exactly
/// `content-length` body bytes.
async fn read_request(stream: &mut TcpStream) -> RecordedRequest {
    let mut buf: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break buf.len(),
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    };

    let header = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = header
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);

    let body_start = (header_end + 4).min(buf.len());
    while buf.len() - body_start < content_length {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }

    RecordedRequest {
        line: header.lines().next().unwrap_or_default().to_string(),
        body: String::from_utf8_lossy(&buf[body_start..]).to_string(),
    }
}
