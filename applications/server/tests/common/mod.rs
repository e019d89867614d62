//! Common test utilities and fixtures

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;
use vidshelf_server::{create_router, state::AppState};
use vidshelf_storage::LocalCatalog;

/// Router over a file-backed catalog
///
/// The temp dir holds both the database and the `/public` directory and must
/// outlive the test.
pub async fn create_test_app() -> (Router, Arc<LocalCatalog>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let catalog = Arc::new(LocalCatalog::open(&db_url, 5).await.unwrap());

    let public_dir = temp_dir.path().join("public");
    std::fs::create_dir_all(&public_dir).unwrap();

    let app = create_router(AppState::new(catalog.clone()), &public_dir);

    (app, catalog, temp_dir)
}

/// Send a request and decode the JSON body (Null when empty)
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    decode(response).await
}

async fn decode(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    if bytes.is_empty() {
        return (status, Value::Null);
    }

    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
