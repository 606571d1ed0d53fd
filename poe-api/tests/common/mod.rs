//! Stub HTTP server that records every request it receives.
//!
//! The server runs on its own thread with a single-threaded tokio runtime so
//! the blocking client under test never touches an async context.

use std::sync::{Arc, Mutex};
use std::thread;

use axum::Router;
use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use url::Url;

/// One request as seen by the stub.
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: String,
    pub path: String,
    pub cookie: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

struct Stub {
    status: StatusCode,
    headers: Vec<(&'static str, &'static str)>,
    body: Vec<u8>,
    requests: Mutex<Vec<Captured>>,
}

/// A running stub. Shuts down when dropped.
pub struct StubServer {
    pub base_url: Url,
    stub: Arc<Stub>,
    _shutdown: oneshot::Sender<()>,
}

impl StubServer {
    /// Start a stub answering every request with `status` and `body`.
    pub fn start(status: u16, body: &str) -> Self {
        Self::start_with_headers(status, &[], body.as_bytes())
    }

    /// Like [`start`](Self::start) but with an arbitrary byte body.
    pub fn start_bytes(status: u16, body: &[u8]) -> Self {
        Self::start_with_headers(status, &[], body)
    }

    /// Like [`start`](Self::start) but also sets response headers.
    pub fn start_with_headers(
        status: u16,
        headers: &[(&'static str, &'static str)],
        body: &[u8],
    ) -> Self {
        let stub = Arc::new(Stub {
            status: StatusCode::from_u16(status).unwrap(),
            headers: headers.to_vec(),
            body: body.to_vec(),
            requests: Mutex::new(Vec::new()),
        });
        let (addr_tx, addr_rx) = std::sync::mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let app = Router::new().fallback(record).with_state(Arc::clone(&stub));
        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async move {
                let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
                addr_tx.send(listener.local_addr().unwrap()).unwrap();
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .unwrap();
            });
        });

        let addr = addr_rx.recv().unwrap();
        Self {
            base_url: Url::parse(&format!("http://{addr}")).unwrap(),
            stub,
            _shutdown: shutdown_tx,
        }
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<Captured> {
        self.stub.requests.lock().unwrap().clone()
    }
}

async fn record(State(stub): State<Arc<Stub>>, req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let header = |name: HeaderName| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    stub.requests.lock().unwrap().push(Captured {
        method: parts.method.to_string(),
        path: parts.uri.path().to_owned(),
        cookie: header(COOKIE),
        content_type: header(CONTENT_TYPE),
        body: String::from_utf8_lossy(&bytes).into_owned(),
    });

    let mut resp = (stub.status, stub.body.clone()).into_response();
    for (name, value) in &stub.headers {
        resp.headers_mut().insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    resp
}
