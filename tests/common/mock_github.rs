//! Minimal stand-in for the GitHub repos endpoint.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub user: String,
    pub user_agent: Option<String>,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct MockGithub {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockGithub {
    /// Serve `body` with `status` for every `/users/{user}/repos` request.
    pub async fn start(status: u16, body: &str) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).expect("valid status"),
            body: body.to_string(),
            captured: Arc::clone(&captured),
        };
        let app = Router::new()
            .route("/users/{user}/repos", get(repos))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock");
        let addr = listener.local_addr().expect("mock addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, captured }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn captured(&self) -> Vec<CapturedRequest> {
        self.captured.lock().await.clone()
    }
}

async fn repos(
    State(state): State<MockState>,
    Path(user): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.captured.lock().await.push(CapturedRequest {
        user,
        user_agent: headers
            .get("user-agent")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
    });
    (
        state.status,
        [("content-type", "application/json")],
        state.body.clone(),
    )
        .into_response()
}
