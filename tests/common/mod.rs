#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use recipe_form::{
    backend::{BackendConfig, RecipeBackend},
    form::QueryForm,
};
use serde_json::{json, Value};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    sync::{mpsc, Notify},
};

/// Handle on a running mock recipe backend.
pub struct MockBackend {
    pub url: String,
    pub calls: mpsc::UnboundedReceiver<Value>,
    pub release: Arc<Notify>,
}

#[derive(Clone)]
struct MockState {
    calls: mpsc::UnboundedSender<Value>,
    release: Arc<Notify>,
}

pub fn sample_body() -> Value {
    json!({
        "answer": "A",
        "details": {
            "recipe_name": "R",
            "ingredients": ["i1", "i2"],
            "instructions": ["s1"],
            "tips": ["t1"],
            "prep_time": "10m"
        }
    })
}

fn recipe_named(name: &str) -> Value {
    json!({
        "answer": format!("Try {name}"),
        "details": {
            "recipe_name": name,
            "ingredients": ["chicken", "rice"],
            "instructions": ["cook"],
            "tips": [],
            "prep_time": "20 minutes"
        }
    })
}

// Any query starting with "slow" first waits for a release permit. Then
// "sample" answers with the sample body, "fail" and "slow fail" with a 500,
// "malformed" with a body missing its details, and everything else echoes the
// query as the recipe name.
async fn mock_query(State(mock): State<MockState>, Json(body): Json<Value>) -> Response {
    let query = body["query"].as_str().unwrap_or_default().to_string();
    let _ = mock.calls.send(body);

    if query.starts_with("slow") {
        mock.release.notified().await;
    }

    match query.as_str() {
        "sample" => Json(sample_body()).into_response(),
        "fail" | "slow fail" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        "malformed" => Json(json!({ "answer": "A" })).into_response(),
        q => Json(recipe_named(q)).into_response(),
    }
}

pub async fn spawn_mock_backend() -> MockBackend {
    let (tx, rx) = mpsc::unbounded_channel();
    let release = Arc::new(Notify::new());
    let app = Router::new()
        .route("/api/query", post(mock_query))
        .with_state(MockState {
            calls: tx,
            release: release.clone(),
        });

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        url: format!("http://{addr}/api/query"),
        calls: rx,
        release,
    }
}

/// Backend that answers 200 with a partial body and then goes silent while
/// keeping the connection open.
pub async fn spawn_stalling_backend() -> String {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 500\r\n\r\n{\"answer\":",
                )
                .await;
            let _ = socket.flush().await;
            open.push(socket);
        }
    });

    format!("http://{addr}/api/query")
}

pub fn form_for(url: &str, timeout_ms: Option<u64>) -> Arc<QueryForm> {
    Arc::new(QueryForm::new(RecipeBackend::new(BackendConfig::new(
        url, timeout_ms,
    ))))
}
