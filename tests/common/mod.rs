#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use smart_city_admin::{
    config::AppConfig,
    error::ClientResult,
    navigation::{History, LOGIN_ROUTE},
    notify::ToastLog,
    services::upload_service::{ImageUploader, UploadFile},
    state::AppState,
    storage::MemoryStore,
};

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: Value,
    pub bearer: Option<String>,
}

/// In-process stand-in for the REST API: canned replies, every call recorded.
#[derive(Clone, Default)]
pub struct Backend {
    requests: Arc<Mutex<Vec<Recorded>>>,
    replies: Arc<Mutex<HashMap<(String, String), (StatusCode, Value)>>>,
}

impl Backend {
    pub fn reply(&self, method: &str, path: &str, status: u16, body: Value) {
        let status = StatusCode::from_u16(status).unwrap();
        self.replies
            .lock()
            .unwrap()
            .insert((method.to_string(), format!("/api{path}")), (status, body));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self, method: &str, path: &str) -> Vec<Recorded> {
        let path = format!("/api{path}");
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.calls(method, path).len()
    }

    fn lookup(&self, method: &str, path: &str) -> (StatusCode, Value) {
        self.replies
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
            .unwrap_or((StatusCode::OK, json!({})))
    }
}

async fn handle(
    State(backend): State<Backend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string);
    let recorded = Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
        bearer,
    };
    backend.requests.lock().unwrap().push(recorded);

    let (status, reply) = backend.lookup(method.as_str(), uri.path());
    (status, Json(reply)).into_response()
}

/// Hands back a predictable URL per file instead of hitting the image host.
#[derive(Default)]
pub struct FakeUploader {
    pub uploaded: Mutex<Vec<String>>,
}

#[async_trait]
impl ImageUploader for FakeUploader {
    async fn upload(&self, file: &UploadFile) -> ClientResult<String> {
        self.uploaded.lock().unwrap().push(file.file_name.clone());
        Ok(format!("https://img.test/{}", file.file_name))
    }
}

pub struct Harness {
    pub backend: Backend,
    pub state: AppState,
    pub toasts: Arc<ToastLog>,
    pub history: Arc<History>,
    pub store: Arc<MemoryStore>,
    pub uploader: Arc<FakeUploader>,
}

impl Harness {
    pub fn last_toast(&self) -> String {
        self.toasts.last().map(|t| t.message).unwrap_or_default()
    }

    /// Log in through the fake backend with the given role.
    pub async fn login_as(&self, role: &str) -> anyhow::Result<()> {
        self.backend.reply(
            "POST",
            "/user/login",
            200,
            json!({
                "token": "tok-1",
                "uid": "u-42",
                "role": role,
                "firsname": "Sara",
                "lastname": "Khan"
            }),
        );
        self.state.session.login("sara@example.com", "secret1").await?;
        Ok(())
    }
}

pub async fn harness() -> anyhow::Result<Harness> {
    let backend = Backend::default();
    let app = Router::new().fallback(handle).with_state(backend.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    let config = AppConfig::for_base_url(format!("http://{addr}/api/"));
    let toasts = Arc::new(ToastLog::new());
    let history = Arc::new(History::new(LOGIN_ROUTE));
    let store = Arc::new(MemoryStore::new());
    let uploader = Arc::new(FakeUploader::default());
    let state = AppState::new(config, store.clone(), history.clone(), toasts.clone())?
        .with_uploader(uploader.clone());

    Ok(Harness {
        backend,
        state,
        toasts,
        history,
        store,
        uploader,
    })
}
