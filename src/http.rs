//! HTTP transport — maps the REST surface onto the service facade.
//!
//! Uses axum for routing. The handlers are pass-through: decode the body,
//! lock the service, call the one matching operation, encode the result.
//! Error responses carry `{ "error": "<message>" }` with the status code
//! from [`CatalogError::status_code`].
//!
//! ## Routes
//!
//! - `POST /books` — create; 201, 400 on missing field, 409 on duplicate title
//! - `GET /books` — list; 200
//! - `GET /books/:id` — fetch one; 200 or 404
//! - `PATCH /books/:id` — partial update; 200, 404, or 409
//! - `DELETE /books/:id` — remove; 204 or 404
//!
//! The service sits behind a mutex because store mutations take
//! `&mut self`; handlers hold the lock only across the store call, never
//! across an await point.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::json;
use uuid::Uuid;

use crate::error::CatalogError;
use crate::model::{BookDraft, BookPatch};
use crate::service::BookService;
use crate::store::RecordStore;

/// Shared handle the handlers clone.
pub type SharedService<S> = Arc<Mutex<BookService<S>>>;

/// Wrap a service for sharing across handlers.
pub fn shared<S: RecordStore>(service: BookService<S>) -> SharedService<S> {
    Arc::new(Mutex::new(service))
}

/// Build an axum `Router` exposing the catalog over the given service.
pub fn router<S>(service: SharedService<S>) -> Router
where
    S: RecordStore + Send + 'static,
{
    Router::new()
        .route("/books", get(list_books::<S>).post(create_book::<S>))
        .route(
            "/books/:id",
            get(get_book::<S>)
                .patch(update_book::<S>)
                .delete(delete_book::<S>),
        )
        .with_state(service)
}

/// Serve the catalog over HTTP at the given address (e.g. `"127.0.0.1:4000"`).
pub async fn serve<S>(service: SharedService<S>, addr: &str) -> Result<(), std::io::Error>
where
    S: RecordStore + Send + 'static,
{
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

async fn create_book<S>(
    State(service): State<SharedService<S>>,
    payload: Result<Json<BookDraft>, JsonRejection>,
) -> Response
where
    S: RecordStore + Send + 'static,
{
    // A body missing a field fails deserialization; the contract calls
    // that a 400, same as an empty field caught by validation.
    let Json(draft) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    match service.lock().create(draft) {
        Ok(book) => (StatusCode::CREATED, Json(book)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn list_books<S>(State(service): State<SharedService<S>>) -> Response
where
    S: RecordStore + Send + 'static,
{
    match service.lock().list() {
        Ok(books) => (StatusCode::OK, Json(books)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn get_book<S>(State(service): State<SharedService<S>>, Path(id): Path<Uuid>) -> Response
where
    S: RecordStore + Send + 'static,
{
    match service.lock().get(&id) {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn update_book<S>(
    State(service): State<SharedService<S>>,
    Path(id): Path<Uuid>,
    payload: Result<Json<BookPatch>, JsonRejection>,
) -> Response
where
    S: RecordStore + Send + 'static,
{
    let Json(patch) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    match service.lock().update(&id, patch) {
        Ok(book) => (StatusCode::OK, Json(book)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn delete_book<S>(State(service): State<SharedService<S>>, Path(id): Path<Uuid>) -> Response
where
    S: RecordStore + Send + 'static,
{
    match service.lock().delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

fn error_response(e: CatalogError) -> Response {
    let status =
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        log::error!("request failed: {}", e);
    }
    (status, Json(json!({ "error": e.to_string() }))).into_response()
}
