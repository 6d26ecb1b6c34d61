//! REST surface for the todo service.
//!
//! # Overview
//! Routes the five todo operations onto a [`SharedStore`] and implements the
//! create/update disambiguation: a submitted record is routed to create,
//! update or rejection based on whether it carries an id.
//!
//! # Design
//! - Handlers are stateless and reentrant; all state lives behind the store
//!   trait, so no locking happens at this layer.
//! - Validation runs first on every write path; the id-based branch is only
//!   evaluated afterwards.
//! - `PUT /todos` with an id-less payload is an implicit create and answers
//!   201, not 400. See `update_todo` before "fixing" this.
//! - `DELETE` is idempotent: deleting an absent id still answers 200.

pub mod error;
pub mod memory;
pub mod pagination;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tracing::debug;

use todo_core::{ApiError, SharedStore, Todo, TodoPayload};

use crate::error::RestError;
use crate::pagination::{pagination_headers, ListParams};

pub use memory::InMemoryStore;

/// Build the todo REST router on top of `store`.
pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo).put(update_todo))
        .route("/todos/{id}", get(get_todo).delete(delete_todo))
        .with_state(store)
}

/// Serve [`app`] on an already-bound listener.
pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

/// `POST /todos` — create a new todo.
///
/// The payload must not carry an id: creation is only valid for unsaved
/// records. Callers holding an id must use `PUT /todos` instead.
async fn create_todo(
    State(store): State<SharedStore>,
    Json(payload): Json<TodoPayload>,
) -> Result<Response, RestError> {
    debug!("REST request to create todo: {payload:?}");
    let todo = payload.validate()?;
    if todo.id.is_some() {
        return Err(ApiError::IdAlreadyPresent.into());
    }
    save_new(&store, todo).await
}

/// `PUT /todos` — update the todo identified by the payload's id.
///
/// A payload without an id is not rejected: the record was never saved, so
/// the request is forwarded to the create path and answers 201. Existing
/// callers rely on this, so it must not be tightened into update-only
/// semantics. With an id present this is an upsert — last write wins, no
/// conflict detection.
async fn update_todo(
    State(store): State<SharedStore>,
    Json(payload): Json<TodoPayload>,
) -> Result<Response, RestError> {
    debug!("REST request to update todo: {payload:?}");
    let todo = payload.validate()?;
    // Implicit create: no id means the record was never saved.
    if todo.id.is_none() {
        return save_new(&store, todo).await;
    }
    let saved = store.save(todo).await?;
    Ok((StatusCode::OK, Json(saved)).into_response())
}

/// Shared tail of both create paths: persist and answer 201 + Location.
async fn save_new(store: &SharedStore, todo: Todo) -> Result<Response, RestError> {
    let created = store.save(todo).await?;
    let location = format!("/todos/{}", created.id.as_deref().unwrap_or_default());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

/// `GET /todos` — one sorted page of the collection.
async fn list_todos(
    State(store): State<SharedStore>,
    Query(params): Query<ListParams>,
) -> Result<Response, RestError> {
    debug!("REST request to list todos: {params:?}");
    let request = params.into_page_request()?;
    let page = store.find_all(&request).await?;
    let headers = pagination_headers("/todos", &request, page.total);
    Ok((StatusCode::OK, headers, Json(page.items)).into_response())
}

/// `GET /todos/{id}` — read one todo.
async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Response, RestError> {
    debug!("REST request to get todo {id}");
    let todo = store.find_by_id(&id).await?.ok_or(ApiError::NotFound)?;
    Ok((StatusCode::OK, Json(todo)).into_response())
}

/// `DELETE /todos/{id}` — delete one todo.
///
/// Delegates unconditionally; deleting an absent id still answers 200.
async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Response, RestError> {
    debug!("REST request to delete todo {id}");
    store.delete_by_id(&id).await?;
    Ok(StatusCode::OK.into_response())
}
