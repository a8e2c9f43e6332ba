use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "hunter2";
pub const DEMO_FILE: &str = "hello.txt";
pub const DEMO_FILE_CONTENTS: &[u8] = b"hello world\n";

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub email: String,
}

#[derive(Deserialize)]
pub struct CreateNote {
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    pub id: Uuid,
    pub author: String,
    pub text: String,
}

#[derive(Default)]
pub struct Backend {
    users: HashMap<String, String>,
    sessions: HashMap<String, String>,
    files: HashMap<String, Vec<u8>>,
}

impl Backend {
    /// One demo user and one demo file.
    pub fn seeded() -> Self {
        let mut backend = Self::default();
        backend.users.insert(DEMO_EMAIL.to_string(), DEMO_PASSWORD.to_string());
        backend.files.insert(DEMO_FILE.to_string(), DEMO_FILE_CONTENTS.to_vec());
        backend
    }

    pub fn with_user(mut self, email: &str, password: &str) -> Self {
        self.users.insert(email.to_string(), password.to_string());
        self
    }

    pub fn with_file(mut self, name: &str, contents: &[u8]) -> Self {
        self.files.insert(name.to_string(), contents.to_vec());
        self
    }
}

pub type Db = Arc<RwLock<Backend>>;

pub fn app() -> Router {
    app_with(Backend::seeded())
}

pub fn app_with(backend: Backend) -> Router {
    let db: Db = Arc::new(RwLock::new(backend));
    Router::new()
        .route("/auth/login", post(login))
        .route("/profile", get(profile))
        .route("/notes", post(create_note))
        .route("/ping", post(ping))
        .route("/public/status", get(status))
        .route("/public/files/{name}", get(file))
        .route("/public/echo", post(echo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn login(
    State(db): State<Db>,
    Json(input): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    let mut backend = db.write().await;
    if backend.users.get(&input.email) != Some(&input.password) {
        info!(email = %input.email, "rejected login");
        return Err(StatusCode::UNAUTHORIZED);
    }
    let token = Uuid::new_v4().to_string();
    backend.sessions.insert(token.clone(), input.email);
    Ok(Json(LoginResponse { token }))
}

/// Resolve the bearer token in `headers` to the logged-in email.
async fn session_email(db: &Db, headers: &HeaderMap) -> Result<String, StatusCode> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(StatusCode::UNAUTHORIZED)?;
    let backend = db.read().await;
    backend.sessions.get(token).cloned().ok_or(StatusCode::UNAUTHORIZED)
}

async fn profile(State(db): State<Db>, headers: HeaderMap) -> Result<Json<Profile>, StatusCode> {
    let email = session_email(&db, &headers).await?;
    Ok(Json(Profile { email }))
}

async fn create_note(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreateNote>,
) -> Result<(StatusCode, Json<Note>), StatusCode> {
    let author = session_email(&db, &headers).await?;
    let note = Note {
        id: Uuid::new_v4(),
        author,
        text: input.text,
    };
    Ok((StatusCode::CREATED, Json(note)))
}

async fn ping(State(db): State<Db>, headers: HeaderMap) -> Result<Json<serde_json::Value>, StatusCode> {
    session_email(&db, &headers).await?;
    Ok(Json(serde_json::json!({ "pong": true })))
}

async fn status() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn file(State(db): State<Db>, Path(name): Path<String>) -> Result<Vec<u8>, StatusCode> {
    let backend = db.read().await;
    backend.files.get(&name).cloned().ok_or(StatusCode::NOT_FOUND)
}

async fn echo(body: Bytes) -> Result<([(header::HeaderName, &'static str); 1], Bytes), StatusCode> {
    serde_json::from_slice::<serde_json::Value>(&body).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
