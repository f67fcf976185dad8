//! In-process stand-in for the DCP API server

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Map, Value};
use tokio::task::JoinHandle;

/// A request the fake server received
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

#[derive(Debug, Clone)]
struct FakeState {
    stations: Arc<Map<String, Value>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeState {
    fn record(&self, method: &str, path: String, body: String) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            path,
            body,
        });
    }
}

#[derive(Debug)]
pub struct FakeUpstream {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    task: JoinHandle<()>,
}

impl FakeUpstream {
    pub async fn start(stations: Map<String, Value>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            stations: Arc::new(stations),
            requests: Arc::clone(&requests),
        };

        let router = Router::new()
            .route("/api/json", get(list))
            .route("/api/last", get(last))
            .route("/api/{mac}", get(station).post(save))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Self {
            addr,
            requests,
            task,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for FakeUpstream {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn list(State(state): State<FakeState>) -> impl IntoResponse {
    state.record("GET", "/api/json".to_string(), String::new());
    Json(Value::Object((*state.stations).clone()))
}

async fn last(State(state): State<FakeState>) -> impl IntoResponse {
    state.record("GET", "/api/last".to_string(), String::new());
    Json(Value::String("2024-06-01T12:00:00Z".to_string()))
}

async fn station(State(state): State<FakeState>, Path(mac): Path<String>) -> impl IntoResponse {
    state.record("GET", format!("/api/{}", mac), String::new());
    match state.stations.get(&mac) {
        Some(record) => (StatusCode::OK, Json(record.clone())),
        None => (StatusCode::NOT_FOUND, Json(Value::Null)),
    }
}

async fn save(
    State(state): State<FakeState>,
    Path(mac): Path<String>,
    body: String,
) -> impl IntoResponse {
    state.record("POST", format!("/api/{}", mac), body);
    "ok"
}
