// tests/common/mod.rs — Mock intake backend (axum) for integration tests

#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockState {
    pub requests: Arc<Mutex<Vec<(String, Value)>>>,
    pub update_status: StatusCode,
    pub update_body: Value,
    pub chat_status: StatusCode,
    /// Verbatim body for `/update-patient`, replacing `update_body`
    pub update_raw: Option<&'static str>,
    /// Verbatim 200 body for `/chat`
    pub chat_raw: Option<&'static str>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            update_status: StatusCode::OK,
            update_body: json!({"status": "success"}),
            chat_status: StatusCode::OK,
            update_raw: None,
            chat_raw: None,
        }
    }
}

impl MockState {
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }
}

async fn update_patient(
    State(state): State<MockState>,
    Json(body): Json<Value>,
) -> Response {
    state
        .requests
        .lock()
        .unwrap()
        .push(("/update-patient".into(), body));
    match state.update_raw {
        Some(raw) => (state.update_status, raw).into_response(),
        None => (state.update_status, Json(state.update_body.clone())).into_response(),
    }
}

async fn chat(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    let message = body["message"].as_str().unwrap_or_default().to_string();
    state.requests.lock().unwrap().push(("/chat".into(), body));
    if !state.chat_status.is_success() {
        return (
            state.chat_status,
            Json(json!({"detail": "Internal server error"})),
        )
            .into_response();
    }
    if let Some(raw) = state.chat_raw {
        return (StatusCode::OK, raw).into_response();
    }
    (
        StatusCode::OK,
        Json(json!({"response": format!("You said: **{message}**")})),
    )
        .into_response()
}

async fn health() -> Json<Value> {
    Json(json!({"status": "Server is running", "message": "Test endpoint reached"}))
}

/// Serve the mock on an ephemeral port; returns the base URL.
pub async fn spawn_backend(state: MockState) -> String {
    let router = Router::new()
        .route("/update-patient", post(update_patient))
        .route("/chat", post(chat))
        .route("/test", get(health))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}
