//! Common Test Utilities
//!
//! An in-memory stand-in for the workflow backend, served over real HTTP,
//! with switches that make it break one contract at a time.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use parking_lot::Mutex;
use serde_json::{json, Map, Value};
use tempfile::TempDir;
use tokio::net::TcpListener;
use uuid::Uuid;

use workflow_api_harness::application::cases::CaseContext;
use workflow_api_harness::config::{AccountSettings, Settings};
use workflow_api_harness::infrastructure::http::ApiClient;

const ANONYMOUS: &str = "anonymous@example.com";

/// How the stub deviates from a conforming backend
#[derive(Debug, Clone)]
pub struct Behavior {
    pub register_status: StatusCode,
    pub leak_password_hash: bool,
    pub accept_wrong_password: bool,
    pub accept_missing_token: bool,
    pub ignore_enabled: bool,
    pub omit_step_results: bool,
    pub fail_delete: bool,
    pub missing_workflow_status: StatusCode,
    pub missing_workflow_success: bool,
    /// Register the default harness account at startup
    pub seed_account: bool,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            register_status: StatusCode::OK,
            leak_password_hash: false,
            accept_wrong_password: false,
            accept_missing_token: false,
            ignore_enabled: false,
            omit_step_results: false,
            fail_delete: false,
            missing_workflow_status: StatusCode::NOT_FOUND,
            missing_workflow_success: false,
            seed_account: true,
        }
    }
}

struct StoredUser {
    id: String,
    email: String,
    name: Option<String>,
    password: String,
}

struct StoredWorkflow {
    owner: String,
    body: Map<String, Value>,
}

#[derive(Default)]
struct Store {
    users: HashMap<String, StoredUser>,
    /// token -> email
    tokens: HashMap<String, String>,
    workflows: Vec<StoredWorkflow>,
}

impl Store {
    fn add_user(&mut self, email: &str, password: &str, name: Option<String>) -> &StoredUser {
        self.users.entry(email.to_string()).or_insert_with(|| StoredUser {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name,
            password: password.to_string(),
        })
    }

    fn issue_token(&mut self, email: &str) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.tokens.insert(token.clone(), email.to_string());
        token
    }

    fn position(&self, owner: &str, id: &str) -> Option<usize> {
        self.workflows
            .iter()
            .position(|w| w.owner == owner && w.body.get("id").and_then(Value::as_str) == Some(id))
    }
}

struct StubState {
    behavior: Behavior,
    store: Mutex<Store>,
}

type Shared = State<Arc<StubState>>;

fn failure(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"success": false, "error": message}))).into_response()
}

fn user_json(user: &StoredUser, leak: bool) -> Value {
    let mut value = json!({"id": user.id, "email": user.email, "name": user.name});
    if leak {
        value["password_hash"] = json!(format!("$argon2id$stub${}", user.password));
    }
    value
}

/// Top-level `user`/`token` plus the same pair in a `data` envelope
fn auth_body(user: Value, token: String) -> Value {
    json!({
        "success": true,
        "user": user.clone(),
        "token": token.clone(),
        "data": {"user": user, "token": token},
    })
}

fn authenticate(state: &StubState, headers: &HeaderMap) -> Result<String, Response> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match token {
        Some(token) => state
            .store
            .lock()
            .tokens
            .get(token)
            .cloned()
            .ok_or_else(|| failure(StatusCode::UNAUTHORIZED, "Invalid token")),
        None if state.behavior.accept_missing_token => Ok(ANONYMOUS.to_string()),
        None => Err(failure(StatusCode::UNAUTHORIZED, "No token provided")),
    }
}

fn missing_workflow(state: &StubState) -> Response {
    (
        state.behavior.missing_workflow_status,
        Json(json!({
            "success": state.behavior.missing_workflow_success,
            "error": "Workflow not found",
        })),
    )
        .into_response()
}

async fn register(State(state): Shared, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    if email.is_empty() || password.is_empty() {
        return failure(StatusCode::BAD_REQUEST, "Email and password are required");
    }

    let mut store = state.store.lock();
    if store.users.contains_key(email) {
        return failure(StatusCode::CONFLICT, "User already exists");
    }
    let name = body["name"].as_str().map(str::to_string);
    let user = user_json(
        store.add_user(email, password, name),
        state.behavior.leak_password_hash,
    );
    let token = store.issue_token(email);
    (state.behavior.register_status, Json(auth_body(user, token))).into_response()
}

async fn login(State(state): Shared, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    let mut store = state.store.lock();
    let user = match store.users.get(email) {
        Some(user) if user.password == password || state.behavior.accept_wrong_password => {
            user_json(user, state.behavior.leak_password_hash)
        }
        _ => return failure(StatusCode::UNAUTHORIZED, "Invalid credentials"),
    };
    let token = store.issue_token(email);
    Json(auth_body(user, token)).into_response()
}

async fn me(State(state): Shared, headers: HeaderMap) -> Response {
    let email = match authenticate(&state, &headers) {
        Ok(email) => email,
        Err(resp) => return resp,
    };
    let store = state.store.lock();
    let user = match store.users.get(&email) {
        Some(user) => user_json(user, false),
        None => json!({"id": "anonymous", "email": email}),
    };
    Json(json!({"success": true, "user": user})).into_response()
}

async fn chat(State(state): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if let Err(resp) = authenticate(&state, &headers) {
        return resp;
    }
    let message = body["message"].as_str().unwrap_or_default();
    if message.trim().is_empty() {
        return failure(StatusCode::BAD_REQUEST, "Message is required");
    }
    let conversation_id = body["sessionId"]
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    Json(json!({
        "success": true,
        "conversationId": conversation_id,
        "response": format!("Here is a draft workflow for: {}", message),
        "workflow": {"name": "Reminder emails", "trigger": {"type": "manual"}, "steps": []},
    }))
    .into_response()
}

async fn list_workflows(State(state): Shared, headers: HeaderMap) -> Response {
    let owner = match authenticate(&state, &headers) {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };
    let store = state.store.lock();
    let workflows: Vec<_> = store
        .workflows
        .iter()
        .filter(|w| w.owner == owner)
        .map(|w| Value::Object(w.body.clone()))
        .collect();
    Json(json!({"success": true, "workflows": workflows})).into_response()
}

async fn create_workflow(State(state): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let owner = match authenticate(&state, &headers) {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };
    let Value::Object(mut body) = body else {
        return failure(StatusCode::BAD_REQUEST, "Workflow must be an object");
    };
    if body.get("name").and_then(Value::as_str).map_or(true, str::is_empty) {
        return failure(StatusCode::BAD_REQUEST, "Workflow name is required");
    }

    body.insert("id".into(), json!(Uuid::new_v4().to_string()));
    body.entry("enabled").or_insert(json!(true));
    body.entry("steps").or_insert(json!([]));
    let workflow = Value::Object(body.clone());
    state.store.lock().workflows.push(StoredWorkflow { owner, body });
    Json(json!({"success": true, "workflow": workflow})).into_response()
}

async fn get_workflow(State(state): Shared, headers: HeaderMap, Path(id): Path<String>) -> Response {
    let owner = match authenticate(&state, &headers) {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };
    let store = state.store.lock();
    match store.position(&owner, &id) {
        Some(i) => Json(json!({"success": true, "workflow": store.workflows[i].body})).into_response(),
        None => missing_workflow(&state),
    }
}

async fn update_workflow(
    State(state): Shared,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let owner = match authenticate(&state, &headers) {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };
    let Value::Object(changes) = body else {
        return failure(StatusCode::BAD_REQUEST, "Update must be an object");
    };

    let mut store = state.store.lock();
    let Some(i) = store.position(&owner, &id) else {
        return missing_workflow(&state);
    };
    let stored = &mut store.workflows[i].body;
    for (key, value) in changes {
        if key == "id" || (key == "enabled" && state.behavior.ignore_enabled) {
            continue;
        }
        stored.insert(key, value);
    }
    Json(json!({"success": true, "workflow": stored})).into_response()
}

async fn delete_workflow(State(state): Shared, headers: HeaderMap, Path(id): Path<String>) -> Response {
    let owner = match authenticate(&state, &headers) {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };
    if state.behavior.fail_delete {
        return failure(StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable");
    }
    let mut store = state.store.lock();
    match store.position(&owner, &id) {
        Some(i) => {
            store.workflows.remove(i);
            Json(json!({"success": true, "message": "Workflow deleted"})).into_response()
        }
        None => missing_workflow(&state),
    }
}

async fn execute_workflow(State(state): Shared, headers: HeaderMap, Path(id): Path<String>) -> Response {
    let owner = match authenticate(&state, &headers) {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };
    let store = state.store.lock();
    let Some(i) = store.position(&owner, &id) else {
        return missing_workflow(&state);
    };

    let steps = store.workflows[i]
        .body
        .get("steps")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let step_results: Vec<_> = steps
        .iter()
        .enumerate()
        .map(|(n, step)| {
            json!({
                "stepId": step.get("id").cloned().unwrap_or_else(|| json!(format!("step{}", n + 1))),
                "status": "success",
            })
        })
        .collect();

    let mut execution = json!({
        "id": Uuid::new_v4().to_string(),
        "workflowId": id,
        "status": "completed",
    });
    if !state.behavior.omit_step_results {
        execution["step_results"] = json!(step_results);
    }
    Json(json!({"success": true, "execution": execution})).into_response()
}

fn router(state: Arc<StubState>) -> Router {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/chat", post(chat))
        .route("/api/workflows", get(list_workflows).post(create_workflow))
        .route(
            "/api/workflows/{id}",
            get(get_workflow).put(update_workflow).delete(delete_workflow),
        )
        .route("/api/workflows/{id}/execute", post(execute_workflow))
        .with_state(state)
}

/// A running stub backend plus settings pointing at it
pub struct TestApp {
    pub address: String,
    pub settings: Settings,
    state: Arc<StubState>,
    _token_dir: TempDir,
}

impl TestApp {
    /// Spawn a conforming backend on an ephemeral port
    pub async fn spawn() -> Self {
        Self::spawn_with(Behavior::default()).await
    }

    pub async fn spawn_with(behavior: Behavior) -> Self {
        let state = Arc::new(StubState {
            behavior,
            store: Mutex::new(Store::default()),
        });

        let account = AccountSettings::default();
        if state.behavior.seed_account {
            state
                .store
                .lock()
                .add_user(&account.email, &account.password, Some(account.name.clone()));
        }

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub listener");
        let address = format!("http://{}", listener.local_addr().unwrap());
        let app = router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub server failed");
        });

        let token_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut settings = Settings::for_base_url(address.clone());
        settings.api.timeout_secs = 5;
        settings.auth.token_file = token_dir
            .path()
            .join("test_token.txt")
            .to_string_lossy()
            .into_owned();

        Self {
            address,
            settings,
            state,
            _token_dir: token_dir,
        }
    }

    /// Client without a token
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.settings.api).expect("Failed to build client")
    }

    /// Fresh token for the seeded account
    pub fn issue_token(&self) -> String {
        self.state.store.lock().issue_token(&self.settings.account.email)
    }

    /// Context authenticated as the seeded account
    pub fn context(&self) -> CaseContext {
        CaseContext::new(self.client().with_token(self.issue_token()), self.settings.clone())
    }

    pub fn workflow_count(&self) -> usize {
        self.state.store.lock().workflows.len()
    }

    pub fn has_user(&self, email: &str) -> bool {
        self.state.store.lock().users.contains_key(email)
    }
}

/// Random account that the stub does not know yet
pub fn unknown_account() -> AccountSettings {
    AccountSettings {
        email: SafeEmail().fake(),
        password: "Password123!".into(),
        name: Name().fake(),
    }
}

/// Base URL on which nothing listens
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral listener");
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", address)
}
