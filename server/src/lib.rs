//! HTTP layer for the todo store.
//!
//! # Design
//! One `TodoStore` instance is constructed at startup, wrapped in
//! `Arc<RwLock<_>>`, and injected into the router as shared state — reads
//! take the read lock, mutations take the write lock, which serializes
//! create/update/delete against each other and against reads. Handlers do
//! nothing beyond parsing the request, calling one store operation, and
//! mapping the result: store errors become 400/404 JSON bodies, and
//! unsupported verbs become 405 with an exact `Allow` header, without ever
//! reaching the store.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::{net::TcpListener, sync::RwLock};
use todo_core::{parse_id, CreateTodo, StoreError, Todo, TodoStore, UpdateTodo};

/// Shared handle to the single store instance behind the router.
pub type Db = Arc<RwLock<TodoStore>>;

/// Construct a fresh store wrapped for sharing across handlers.
pub fn new_db() -> Db {
    Arc::new(RwLock::new(TodoStore::new()))
}

/// Build the router around an injected store handle.
///
/// Taking the handle as an argument (rather than constructing it here)
/// keeps the store's lifecycle explicit and lets tests run against a fresh
/// instance per case.
pub fn app(db: Db) -> Router {
    Router::new()
        .route(
            "/todos",
            get(list_todos)
                .post(create_todo)
                .fallback(collection_method_not_allowed),
        )
        .route(
            "/todos/{id}",
            get(get_todo)
                .put(update_todo)
                .delete(delete_todo)
                .fallback(item_method_not_allowed),
        )
        .with_state(db)
}

/// Serve the API on the given listener with a freshly constructed store.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app(new_db())).await
}

/// JSON body for every error response: `{"error": "..."}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Confirmation body returned by a successful delete.
#[derive(Serialize)]
struct Deleted {
    message: &'static str,
}

/// Store error adapted to an HTTP response.
///
/// Newtype rather than a direct `IntoResponse` impl on `StoreError` because
/// both the trait and the error type are foreign to this crate.
struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            StoreError::Validation(_) | StoreError::InvalidId => StatusCode::BAD_REQUEST,
            StoreError::NotFound => StatusCode::NOT_FOUND,
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.list())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = db.write().await.create(input)?;
    tracing::debug!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    let todo = db.read().await.get(id)?;
    Ok(Json(todo))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    patch: Option<Json<UpdateTodo>>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&id)?;
    // a bodyless PUT is an empty patch, not a rejected request
    let patch = patch.map(|Json(p)| p).unwrap_or_default();
    let todo = db.write().await.update(id, patch)?;
    tracing::debug!(id, "updated todo");
    Ok(Json(todo))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Deleted>, ApiError> {
    let id = parse_id(&id)?;
    db.write().await.delete(id)?;
    tracing::debug!(id, "deleted todo");
    Ok(Json(Deleted {
        message: "todo deleted",
    }))
}

// Method-router fallbacks so unsupported verbs report exactly which
// methods each endpoint implements.

async fn collection_method_not_allowed() -> Response {
    method_not_allowed("GET, POST")
}

async fn item_method_not_allowed() -> Response {
    method_not_allowed("GET, PUT, DELETE")
}

fn method_not_allowed(allow: &'static str) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, allow)],
        Json(ErrorBody {
            error: "method not allowed".to_string(),
        }),
    )
        .into_response()
}
