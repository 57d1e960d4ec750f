//! In-memory stand-in for the Coresight messaging API
//!
//! Serves both the global routes (`/projects/{project_id}/...`) and the
//! key-scoped routes, where the project is looked up from `x-api-key`.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Key allowed to create projects
pub const ADMIN_KEY: &str = "admin-key";

type Shared = Arc<FakeState>;

/// Running fake API server
pub struct FakeApi {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Shared,
}

struct FakeState {
    store: Mutex<Store>,
    request_count: AtomicU32,
}

#[derive(Default)]
struct Store {
    /// API key to project id
    keys: HashMap<String, String>,
    projects: HashMap<String, Value>,
    users: Vec<Value>,
    threads: Vec<Value>,
    messages: Vec<Value>,
    feedback: Vec<Value>,
}

impl FakeApi {
    /// Start the fake on a random local port
    pub async fn start() -> anyhow::Result<Self> {
        let state = Arc::new(FakeState {
            store: Mutex::new(Store::default()),
            request_count: AtomicU32::new(0),
        });

        let app = Router::new()
            .route("/health", routing::get(|| async { "OK" }))
            .route("/projects", routing::post(create_project))
            .route("/projects/from_api_key", routing::get(project_from_key))
            .route("/projects/{project_id}", routing::get(get_project))
            .route("/projects/{project_id}/anonymous-users", routing::post(create_anonymous))
            .route("/projects/{project_id}/authenticated-users", routing::post(create_authenticated))
            .route("/projects/{project_id}/users", routing::get(list_users))
            .route(
                "/projects/{project_id}/threads",
                routing::post(create_thread).get(list_threads),
            )
            .route("/projects/{project_id}/threads/{thread_id}", routing::get(get_thread))
            .route(
                "/projects/{project_id}/threads/{thread_id}/messages",
                routing::post(create_message).get(list_messages),
            )
            .route(
                "/projects/{project_id}/messages/{message_id}/feedback",
                routing::post(add_feedback).get(list_feedback),
            )
            .route("/anonymous-users", routing::post(scoped_create_anonymous))
            .route("/authenticated-users", routing::post(scoped_create_authenticated))
            .route("/users", routing::get(scoped_list_users))
            .route("/threads", routing::post(scoped_create_thread))
            .route("/threads/{thread_id}", routing::get(scoped_get_thread))
            .route("/users/{user_id}/threads", routing::get(scoped_list_threads))
            .route(
                "/users/{user_id}/threads/{thread_id}/messages",
                routing::post(scoped_create_message).get(scoped_list_messages),
            )
            .route(
                "/messages/{message_id}/feedback",
                routing::post(scoped_add_feedback).get(scoped_list_feedback),
            )
            .layer(middleware::from_fn_with_state(Arc::clone(&state), count_requests))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL with a trailing slash, as deployments usually hand it out
    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Number of HTTP requests served so far
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }
}

impl Drop for FakeApi {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn count_requests(State(state): State<Shared>, request: Request, next: Next) -> Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    next.run(request).await
}

// -- Responses --

fn created(value: Value) -> Response {
    (StatusCode::CREATED, Json(value)).into_response()
}

fn ok(value: Value) -> Response {
    Json(value).into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response()
}

fn forbidden() -> Response {
    (StatusCode::FORBIDDEN, Json(json!({"message": "Forbidden"}))).into_response()
}

// -- Store --

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn select(records: &[Value], filters: &[(&str, &str)]) -> Vec<Value> {
    records
        .iter()
        .filter(|record| filters.iter().all(|(field, value)| record[*field] == *value))
        .cloned()
        .collect()
}

impl Store {
    fn add_user(&mut self, project_id: &str, mut body: Value, kind: &str) -> Value {
        body["user_id"] = json!(new_id());
        body["project_id"] = json!(project_id);
        body["kind"] = json!(kind);
        self.users.push(body.clone());
        body
    }

    fn add_thread(&mut self, project_id: &str, body: &Value) -> Value {
        let thread = json!({
            "thread_id": new_id(),
            "project_id": project_id,
            "user_id": body["user_id"],
        });
        self.threads.push(thread.clone());
        thread
    }

    fn thread(&self, project_id: &str, thread_id: &str) -> Option<Value> {
        select(&self.threads, &[("project_id", project_id), ("thread_id", thread_id)])
            .into_iter()
            .next()
    }

    fn add_message(&mut self, project_id: &str, thread_id: &str, body: &Value) -> Option<Value> {
        self.thread(project_id, thread_id)?;

        let message = json!({
            "message_id": new_id(),
            "project_id": project_id,
            "thread_id": thread_id,
            "sender_id": body["sender_id"],
            "content": body["content"],
        });
        self.messages.push(message.clone());
        Some(message)
    }

    fn add_feedback(&mut self, project_id: &str, message_id: &str, body: &Value) -> Option<Value> {
        select(&self.messages, &[("project_id", project_id), ("message_id", message_id)])
            .into_iter()
            .next()?;

        let feedback = json!({
            "feedback_id": new_id(),
            "project_id": project_id,
            "message_id": message_id,
            "user_id": body["user_id"],
            "rating": body["rating"],
            "comment": body["comment"],
        });
        self.feedback.push(feedback.clone());
        Some(feedback)
    }
}

impl FakeState {
    /// Run `f` if the project exists
    fn in_project(&self, project_id: &str, f: impl FnOnce(&mut Store) -> Response) -> Response {
        let mut store = self.store.lock().unwrap();
        if !store.projects.contains_key(project_id) {
            return not_found();
        }
        f(&mut store)
    }

    /// Run `f` in the project owning the request's API key
    fn in_key_project(&self, headers: &HeaderMap, f: impl FnOnce(&mut Store, &str) -> Response) -> Response {
        let mut store = self.store.lock().unwrap();
        let project_id = headers
            .get("x-api-key")
            .and_then(|key| key.to_str().ok())
            .and_then(|key| store.keys.get(key))
            .cloned();

        match project_id {
            Some(project_id) => f(&mut store, &project_id),
            None => forbidden(),
        }
    }
}

// -- Global routes --

async fn create_project(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if headers.get("x-api-key").is_none_or(|key| key != ADMIN_KEY) {
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }

    let project_id = new_id();
    let api_key = format!("key-{}", new_id());
    let project = json!({
        "project_id": project_id,
        "name": body["name"],
        "llm_config": body["llm_config"],
        "api_key": api_key,
    });

    let mut store = state.store.lock().unwrap();
    store.keys.insert(api_key, project_id.clone());
    store.projects.insert(project_id, project.clone());

    created(project)
}

async fn project_from_key(State(state): State<Shared>, headers: HeaderMap) -> Response {
    state.in_key_project(&headers, |store, project_id| ok(store.projects[project_id].clone()))
}

async fn get_project(State(state): State<Shared>, Path(project_id): Path<String>) -> Response {
    state.in_project(&project_id, |store| ok(store.projects[&project_id].clone()))
}

async fn create_anonymous(
    State(state): State<Shared>,
    Path(project_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    state.in_project(&project_id, |store| created(store.add_user(&project_id, body, "anonymous")))
}

async fn create_authenticated(
    State(state): State<Shared>,
    Path(project_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    state.in_project(&project_id, |store| {
        created(store.add_user(&project_id, body, "authenticated"))
    })
}

async fn list_users(State(state): State<Shared>, Path(project_id): Path<String>) -> Response {
    state.in_project(&project_id, |store| {
        ok(json!(select(&store.users, &[("project_id", project_id.as_str())])))
    })
}

async fn create_thread(
    State(state): State<Shared>,
    Path(project_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    state.in_project(&project_id, |store| created(store.add_thread(&project_id, &body)))
}

async fn list_threads(State(state): State<Shared>, Path(project_id): Path<String>) -> Response {
    state.in_project(&project_id, |store| {
        ok(json!(select(&store.threads, &[("project_id", project_id.as_str())])))
    })
}

async fn get_thread(State(state): State<Shared>, Path((project_id, thread_id)): Path<(String, String)>) -> Response {
    state.in_project(&project_id, |store| {
        store.thread(&project_id, &thread_id).map_or_else(not_found, ok)
    })
}

async fn create_message(
    State(state): State<Shared>,
    Path((project_id, thread_id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    state.in_project(&project_id, |store| {
        store
            .add_message(&project_id, &thread_id, &body)
            .map_or_else(not_found, created)
    })
}

async fn list_messages(
    State(state): State<Shared>,
    Path((project_id, thread_id)): Path<(String, String)>,
) -> Response {
    state.in_project(&project_id, |store| {
        ok(json!(select(&store.messages, &[("project_id", project_id.as_str()), ("thread_id", thread_id.as_str())])))
    })
}

async fn add_feedback(
    State(state): State<Shared>,
    Path((project_id, message_id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    state.in_project(&project_id, |store| {
        store
            .add_feedback(&project_id, &message_id, &body)
            .map_or_else(not_found, created)
    })
}

async fn list_feedback(
    State(state): State<Shared>,
    Path((project_id, message_id)): Path<(String, String)>,
) -> Response {
    state.in_project(&project_id, |store| {
        ok(json!(select(&store.feedback, &[("project_id", project_id.as_str()), ("message_id", message_id.as_str())])))
    })
}

// -- Key-scoped routes --

#[derive(Deserialize)]
struct EmailQuery {
    email: Option<String>,
}

async fn scoped_create_anonymous(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.in_key_project(&headers, |store, project_id| {
        created(store.add_user(project_id, body, "anonymous"))
    })
}

async fn scoped_create_authenticated(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.in_key_project(&headers, |store, project_id| {
        created(store.add_user(project_id, body, "authenticated"))
    })
}

async fn scoped_list_users(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<EmailQuery>,
) -> Response {
    state.in_key_project(&headers, |store, project_id| match query.email.as_deref() {
        Some(email) => ok(json!(select(&store.users, &[("project_id", project_id), ("email", email)]))),
        None => ok(json!(select(&store.users, &[("project_id", project_id)]))),
    })
}

async fn scoped_create_thread(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    state.in_key_project(&headers, |store, project_id| created(store.add_thread(project_id, &body)))
}

async fn scoped_get_thread(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(thread_id): Path<String>,
) -> Response {
    state.in_key_project(&headers, |store, project_id| {
        store.thread(project_id, &thread_id).map_or_else(not_found, ok)
    })
}

async fn scoped_list_threads(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Response {
    state.in_key_project(&headers, |store, project_id| {
        ok(json!(select(&store.threads, &[("project_id", project_id), ("user_id", user_id.as_str())])))
    })
}

async fn scoped_create_message(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((user_id, thread_id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    state.in_key_project(&headers, |store, project_id| {
        match store.thread(project_id, &thread_id) {
            Some(thread) if thread["user_id"] == *user_id => store
                .add_message(project_id, &thread_id, &body)
                .map_or_else(not_found, created),
            _ => not_found(),
        }
    })
}

async fn scoped_list_messages(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((user_id, thread_id)): Path<(String, String)>,
) -> Response {
    state.in_key_project(&headers, |store, project_id| {
        match store.thread(project_id, &thread_id) {
            Some(thread) if thread["user_id"] == *user_id => {
                ok(json!(select(&store.messages, &[("project_id", project_id), ("thread_id", thread_id.as_str())])))
            }
            _ => not_found(),
        }
    })
}

async fn scoped_add_feedback(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(message_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    state.in_key_project(&headers, |store, project_id| {
        store
            .add_feedback(project_id, &message_id, &body)
            .map_or_else(not_found, created)
    })
}

async fn scoped_list_feedback(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(message_id): Path<String>,
) -> Response {
    state.in_key_project(&headers, |store, project_id| {
        ok(json!(select(&store.feedback, &[("project_id", project_id), ("message_id", message_id.as_str())])))
    })
}
