#![allow(dead_code)]

//! In-process fake of the link backend, bound to `127.0.0.1:0`.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const SHORT_HOST: &str = "https://x.sh";

/// A request as the backend received it. `path` keeps its percent-encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct BackendState {
    links: Mutex<HashMap<String, Value>>,
    requests: Mutex<Vec<RecordedRequest>>,
    /// Canned replies by route name (`shorten`, `stats`, `delete`).
    overrides: Mutex<HashMap<&'static str, (StatusCode, String)>>,
    next_id: Mutex<u64>,
}

pub struct FakeBackend {
    pub base_url: String,
    pub state: Arc<BackendState>,
}

impl FakeBackend {
    pub async fn spawn() -> Self {
        let state = Arc::new(BackendState::default());

        let app = Router::new()
            .route("/api/shorten", post(shorten))
            .route("/api/stats/{slug}", get(stats))
            .route("/api/links/{slug}", delete(remove))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Stores a statistics payload served verbatim for `slug`.
    pub fn insert_link(&self, slug: &str, stats: Value) {
        self.state
            .links
            .lock()
            .unwrap()
            .insert(slug.to_string(), stats);
    }

    pub fn has_link(&self, slug: &str) -> bool {
        self.state.links.lock().unwrap().contains_key(slug)
    }

    /// Makes every request to `route` answer with `status` and a raw `body`.
    pub fn respond_with(&self, route: &'static str, status: u16, body: &str) {
        self.state.overrides.lock().unwrap().insert(
            route,
            (StatusCode::from_u16(status).unwrap(), body.to_string()),
        );
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_with(&self, method: Method) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }
}

/// A statistics payload created at 2024-01-01T00:00:00Z.
pub fn stats_payload(slug: &str, url: &str, clicks: u64) -> Value {
    json!({
        "slug": slug,
        "url": url,
        "clicks": clicks,
        "createdAt": "2024-01-01T00:00:00Z",
    })
}

/// Binds and immediately releases a port, leaving nothing listening on it.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

impl BackendState {
    fn record(&self, method: Method, uri: &Uri, body: Option<Value>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: uri.path().to_string(),
            body,
        });
    }

    fn canned(&self, route: &'static str) -> Option<Response> {
        let overrides = self.overrides.lock().unwrap();
        let (status, body) = overrides.get(route)?;
        Some(
            (
                *status,
                [(header::CONTENT_TYPE, "application/json")],
                body.clone(),
            )
                .into_response(),
        )
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Link not found" })),
    )
        .into_response()
}

async fn shorten(
    State(state): State<Arc<BackendState>>,
    uri: Uri,
    Json(body): Json<Value>,
) -> Response {
    state.record(Method::POST, &uri, Some(body.clone()));
    if let Some(response) = state.canned("shorten") {
        return response;
    }

    let slug = {
        let mut next_id = state.next_id.lock().unwrap();
        *next_id += 1;
        format!("s{}", *next_id)
    };

    let mut stats = stats_payload(&slug, body["url"].as_str().unwrap_or_default(), 0);
    stats["expiresAt"] = body["expiresAt"].clone();
    state.links.lock().unwrap().insert(slug.clone(), stats);

    Json(json!({ "shortUrl": format!("{SHORT_HOST}/{slug}") })).into_response()
}

async fn stats(
    State(state): State<Arc<BackendState>>,
    uri: Uri,
    Path(slug): Path<String>,
) -> Response {
    state.record(Method::GET, &uri, None);
    if let Some(response) = state.canned("stats") {
        return response;
    }

    match state.links.lock().unwrap().get(&slug) {
        Some(stats) => Json(stats.clone()).into_response(),
        None => not_found(),
    }
}

async fn remove(
    State(state): State<Arc<BackendState>>,
    uri: Uri,
    Path(slug): Path<String>,
) -> Response {
    state.record(Method::DELETE, &uri, None);
    if let Some(response) = state.canned("delete") {
        return response;
    }

    match state.links.lock().unwrap().remove(&slug) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found(),
    }
}
