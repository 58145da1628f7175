//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::Response;
use axum::Router;
use tokio::net::TcpListener;

use telegram_relay::{HttpServer, RelayConfig, Shutdown};

/// One request as seen by the mock upstream.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    status: u16,
    content_type: Option<String>,
    body: Vec<u8>,
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers,
        body: body.to_vec(),
    });

    let mut response = Response::builder()
        .status(StatusCode::from_u16(state.status).unwrap());
    if let Some(ct) = &state.content_type {
        response = response.header(header::CONTENT_TYPE, ct);
    }
    response.body(Body::from(state.body.clone())).unwrap()
}

/// Start a mock upstream that records every request and returns a fixed
/// response. Returns its address and the request log.
pub async fn start_mock_upstream(
    status: u16,
    content_type: Option<&str>,
    body: &[u8],
) -> (SocketAddr, Arc<Mutex<Vec<RecordedRequest>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        requests: requests.clone(),
        status,
        content_type: content_type.map(str::to_owned),
        body: body.to_vec(),
    };

    let app = Router::new().fallback(record).with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, requests)
}

/// Spawn a relay pointed at the given upstream base URL. Returns the relay's
/// address and a shutdown handle that stops it.
pub async fn start_relay(upstream_base: &str, relay_enabled: bool) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = RelayConfig::default();
    config.listener.bind_address = addr.to_string();
    config.upstream.base_url = upstream_base.to_string();
    config.webhook.relay_enabled = relay_enabled;

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Non-pooled client so nothing lingers across tests.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
