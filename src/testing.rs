//! In-process stand-in for the portal backend, used by unit tests.
//!
//! Mirrors the real backend's routes and cookie behavior closely enough to
//! drive the client end to end: `/login` and `/register` set an
//! `access_token` cookie, `/verify-token` reads it back, `/logout` expires it.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde_json::{Value, json};

use crate::config::ClientConfig;
use crate::context::PortalContext;
use crate::nav::History;
use crate::net::api::find_cookie;

pub(crate) const ALICE_EMAIL: &str = "alice@example.test";
pub(crate) const ALICE_PASSWORD: &str = "secret";
/// Login with this email returns 200 but no `username`.
pub(crate) const NAMELESS_EMAIL: &str = "nameless@example.test";
/// Login with this email returns 200 with a non-JSON body.
pub(crate) const GARBLED_EMAIL: &str = "garbled@example.test";
/// `/verify-token` with this session token returns 200 with a non-JSON body.
pub(crate) const GARBLED_TOKEN: &str = "tok-garbled";

#[derive(Default)]
pub(crate) struct Backend {
    pub events: Mutex<Vec<Value>>,
    pub logouts: AtomicUsize,
    pub verifies: AtomicUsize,
}

impl Backend {
    pub fn logout_count(&self) -> usize {
        self.logouts.load(Ordering::SeqCst)
    }

    pub fn verify_count(&self) -> usize {
        self.verifies.load(Ordering::SeqCst)
    }
}

pub(crate) struct TestServer {
    pub base_url: String,
    pub backend: Arc<Backend>,
}

impl TestServer {
    pub fn config(&self) -> ClientConfig {
        config_for(&self.base_url)
    }

    pub fn context(&self) -> (PortalContext, History) {
        context_for(&self.base_url)
    }
}

pub(crate) fn config_for(base_url: &str) -> ClientConfig {
    ClientConfig::from_parts(Some(base_url), None, None).unwrap()
}

pub(crate) fn context_for(base_url: &str) -> (PortalContext, History) {
    PortalContext::with_history(config_for(base_url)).unwrap()
}

// =============================================================================
// SERVERS
// =============================================================================

pub(crate) async fn spawn_backend() -> TestServer {
    let backend = Arc::new(Backend::default());
    let app = Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/logout", post(logout))
        .route("/verify-token", get(verify_token))
        .route("/db-test", get(db_test))
        .route("/create_event", post(create_event))
        .route("/get_events", get(get_events))
        .with_state(Arc::clone(&backend));
    let base_url = serve(app).await;
    TestServer { base_url, backend }
}

/// Every route answers 500.
pub(crate) async fn spawn_failing_backend() -> String {
    let app = Router::new().fallback(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") });
    serve(app).await
}

/// An origin with nothing listening, so every request fails at connect.
pub(crate) async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

// =============================================================================
// HANDLERS
// =============================================================================

fn with_session(username: &str, body: Value) -> Response {
    let cookie = format!("access_token=tok-{username}; Path=/; HttpOnly");
    ([(header::SET_COOKIE, cookie)], Json(body)).into_response()
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn login(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    match (email, password) {
        (ALICE_EMAIL, ALICE_PASSWORD) => with_session("alice", json!({ "username": "alice", "email": ALICE_EMAIL })),
        (NAMELESS_EMAIL, _) => Json(json!({ "email": NAMELESS_EMAIL })).into_response(),
        (GARBLED_EMAIL, _) => (StatusCode::OK, "<html>oops</html>").into_response(),
        _ => detail(StatusCode::BAD_REQUEST, "Invalid email or password"),
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    let email = body["email"].clone();
    match body["username"].as_str().unwrap_or_default() {
        "taken" => detail(StatusCode::BAD_REQUEST, "User already exists"),
        "" => Json(json!({ "email": email })).into_response(),
        name => with_session(name, json!({ "username": name, "email": email })),
    }
}

async fn logout(State(backend): State<Arc<Backend>>) -> Response {
    backend.logouts.fetch_add(1, Ordering::SeqCst);
    let cookie = "access_token=; Path=/; HttpOnly; Max-Age=0";
    ([(header::SET_COOKIE, cookie)], Json(json!({ "message": "Successfully logged out" }))).into_response()
}

async fn verify_token(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Response {
    backend.verifies.fetch_add(1, Ordering::SeqCst);
    let username = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|raw| find_cookie(raw, "access_token"))
        .and_then(|token| token.strip_prefix("tok-"))
        .filter(|name| !name.is_empty());
    match username {
        Some("garbled") => (StatusCode::OK, "<html>expired</html>").into_response(),
        Some(name) => Json(json!({ "username": name, "email": format!("{name}@example.test") })).into_response(),
        None => detail(StatusCode::FORBIDDEN, "Not authenticated"),
    }
}

async fn db_test() -> Json<Value> {
    Json(json!({ "status": "connected" }))
}

async fn create_event(State(backend): State<Arc<Backend>>, Json(body): Json<Value>) -> Json<Value> {
    backend.events.lock().unwrap().push(body);
    Json(json!({ "message": "Event created successfully" }))
}

async fn get_events(State(backend): State<Arc<Backend>>) -> Json<Value> {
    let events = backend.events.lock().unwrap().clone();
    Json(Value::Array(events))
}
