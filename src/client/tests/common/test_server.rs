use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use std::future::IntoFuture;
use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const INGEST_PATH: &str = "/telemetry/ingest";

#[derive(Clone, Debug)]
pub struct ReceivedRequest {
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct IngestState {
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
    status: StatusCode,
}

async fn ingest(
    State(state): State<IngestState>,
    headers: HeaderMap,
    body: String,
) -> StatusCode {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    state
        .received
        .lock()
        .unwrap()
        .push(ReceivedRequest { content_type, body });

    state.status
}

/// Stand-in for the ingestion service: records every POST it gets.
pub struct TestServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
    handle: JoinHandle<io::Result<()>>,
}

impl TestServer {
    pub async fn launch() -> anyhow::Result<Self> {
        Self::launch_with_status(StatusCode::OK).await
    }

    pub async fn launch_with_status(status: StatusCode) -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?; // 0: port picked by the OS
        let addr = listener.local_addr()?;

        let received = Arc::new(Mutex::new(Vec::new()));
        let state = IngestState {
            received: received.clone(),
            status,
        };
        let router = Router::new()
            .route(INGEST_PATH, post(ingest))
            .with_state(state);

        let handle = tokio::spawn(axum::serve(listener, router).into_future());

        Ok(Self {
            addr,
            received,
            handle,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}{}", self.addr, INGEST_PATH)
    }

    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// An endpoint nothing listens on: binds a port, then releases it.
pub fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, INGEST_PATH)
}
