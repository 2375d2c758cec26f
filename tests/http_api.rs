//! Route-level tests for the REST surface: status codes and JSON bodies.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use bookrack::http::{router, shared};
use bookrack::service::BookService;
use bookrack::store::memory::InMemoryStore;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    router(shared(BookService::new(InMemoryStore::new())))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn dune() -> Value {
    json!({
        "title": "Dune",
        "author": "Herbert",
        "publishYear": 1965,
        "genre": "SciFi",
        "description": "desert planet"
    })
}

#[tokio::test]
async fn create_returns_201_with_the_book() {
    let app = app();
    let (status, body) = send(&app, "POST", "/books", Some(dune())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "Dune");
    assert_eq!(body["publishYear"], 1965);
    assert!(body["id"].is_string());
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn create_with_missing_field_is_400() {
    let app = app();
    let mut draft = dune();
    draft.as_object_mut().unwrap().remove("author");

    let (status, body) = send(&app, "POST", "/books", Some(draft)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_with_empty_field_is_400() {
    let app = app();
    let mut draft = dune();
    draft["genre"] = json!("   ");

    let (status, body) = send(&app, "POST", "/books", Some(draft)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("genre"));
}

#[tokio::test]
async fn duplicate_title_is_409() {
    let app = app();
    send(&app, "POST", "/books", Some(dune())).await;

    let (status, body) = send(&app, "POST", "/books", Some(dune())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("Dune"));
}

#[tokio::test]
async fn list_returns_all_books() {
    let app = app();
    send(&app, "POST", "/books", Some(dune())).await;

    let (status, body) = send(&app, "GET", "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["title"], "Dune");
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let app = app();
    let uri = format!("/books/{}", uuid::Uuid::new_v4());

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn get_malformed_id_is_400() {
    let app = app();
    let (status, _) = send(&app, "GET", "/books/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_merges_partial_fields() {
    let app = app();
    let (_, created) = send(&app, "POST", "/books", Some(dune())).await;
    let uri = format!("/books/{}", created["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        "PATCH",
        &uri,
        Some(json!({ "genre": "Science Fiction" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["genre"], "Science Fiction");
    assert_eq!(body["title"], "Dune");
    assert_eq!(body["author"], "Herbert");
}

#[tokio::test]
async fn patch_to_colliding_title_is_409() {
    let app = app();
    send(&app, "POST", "/books", Some(dune())).await;
    let mut other = dune();
    other["title"] = json!("Solaris");
    let (_, created) = send(&app, "POST", "/books", Some(other)).await;
    let uri = format!("/books/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&app, "PATCH", &uri, Some(json!({ "title": "Dune" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn patch_unknown_id_is_404() {
    let app = app();
    let uri = format!("/books/{}", uuid::Uuid::new_v4());

    let (status, _) = send(&app, "PATCH", &uri, Some(json!({ "genre": "Horror" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_204_then_get_is_404() {
    let app = app();
    let (_, created) = send(&app, "POST", "/books", Some(dune())).await;
    let uri = format!("/books/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
