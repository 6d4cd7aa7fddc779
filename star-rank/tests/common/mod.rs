//! In-process stand-in for the GitHub REST API.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// How the stub answers a route.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Respond with a status code and body.
    Json(u16, String),
    /// Accept the request and never answer.
    Hang,
}

/// A running stub server.
pub struct GitHubStub {
    /// Base URL to pass as the API base.
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl GitHubStub {
    /// Request paths received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct StubState {
    routes: Arc<HashMap<String, Reply>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Builds a `GET /repos/{owner}/{repo}` success body.
pub fn repo_body(owner: &str, repo: &str, stars: u64) -> String {
    serde_json::json!({
        "stargazers_count": stars,
        "description": format!("{owner}/{repo} description"),
        "html_url": format!("https://github.com/{owner}/{repo}"),
        "updated_at": "2024-05-06T07:08:09Z",
    })
    .to_string()
}

/// Starts a stub answering the given routes. Unknown repositories get a 404.
pub async fn spawn_github_stub(routes: Vec<(&str, Reply)>) -> GitHubStub {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        routes: Arc::new(
            routes
                .into_iter()
                .map(|(path, reply)| (path.to_string(), reply))
                .collect(),
        ),
        requests: Arc::clone(&requests),
    };
    let app = Router::new()
        .route("/repos/{owner}/{repo}", get(repository))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    GitHubStub {
        base_url: format!("http://{addr}"),
        requests,
    }
}

async fn repository(
    State(state): State<StubState>,
    Path((owner, repo)): Path<(String, String)>,
) -> Response {
    let path = format!("/repos/{owner}/{repo}");
    state.requests.lock().unwrap().push(path.clone());

    match state.routes.get(&path) {
        Some(Reply::Json(status, body)) => json_response(*status, body.clone()),
        Some(Reply::Hang) => {
            tokio::time::sleep(Duration::from_secs(60)).await;
            StatusCode::GATEWAY_TIMEOUT.into_response()
        }
        None => json_response(404, r#"{"message":"Not Found"}"#.to_string()),
    }
}

fn json_response(status: u16, body: String) -> Response {
    let status = StatusCode::from_u16(status).unwrap();
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Directory holding the checked-in fixtures.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}
