#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use forum_api_rust::auth::{AuthError, TokenVerifier, VerifiedToken};
use forum_api_rust::routes::app;
use forum_api_rust::state::AppState;
use forum_api_rust::store::{DocumentPath, DocumentStore, StoreError};
use forum_api_rust::tenant::TenantPaths;

pub const TEST_APP_ID: &str = "test-app";
pub const VALID_TOKEN: &str = "valid-token";
pub const VALID_UID: &str = "user-1";

/// Verifier that accepts a fixed token -> uid mapping and rejects
/// everything else.
pub struct StaticVerifier {
    token: String,
    uid: String,
}

impl StaticVerifier {
    pub fn new(token: &str, uid: &str) -> Self {
        Self {
            token: token.to_string(),
            uid: uid.to_string(),
        }
    }
}

#[async_trait]
impl TokenVerifier for StaticVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedToken, AuthError> {
        if token == self.token {
            Ok(VerifiedToken {
                uid: self.uid.clone(),
            })
        } else {
            Err(AuthError::Rejected("unknown token".to_string()))
        }
    }
}

/// In-memory store that records every insert and hands out sequential ids.
#[derive(Default)]
pub struct RecordingStore {
    inserts: Mutex<Vec<(String, Value)>>,
}

impl RecordingStore {
    pub fn inserts(&self) -> Vec<(String, Value)> {
        self.inserts.lock().unwrap().clone()
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.lock().unwrap().len()
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn insert(&self, collection: &DocumentPath, record: &Value) -> Result<String, StoreError> {
        let mut inserts = self.inserts.lock().unwrap();
        inserts.push((collection.to_string(), record.clone()));
        Ok(format!("doc-{}", inserts.len()))
    }
}

/// Store whose inserts always fail, for exercising the 500 path.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn insert(&self, _collection: &DocumentPath, _record: &Value) -> Result<String, StoreError> {
        Err(StoreError::Rejected {
            status: 403,
            body: "permission denied".to_string(),
        })
    }
}

/// Build the application router around fake capabilities, returning the
/// recording store for assertions.
pub fn test_app() -> (Router, Arc<RecordingStore>) {
    let store = Arc::new(RecordingStore::default());
    let router = app(AppState::new(
        Arc::new(StaticVerifier::new(VALID_TOKEN, VALID_UID)),
        store.clone(),
        TenantPaths::new(TEST_APP_ID),
    ));
    (router, store)
}

/// Same as [`test_app`] but with a store that rejects every insert.
pub fn failing_app() -> Router {
    app(AppState::new(
        Arc::new(StaticVerifier::new(VALID_TOKEN, VALID_UID)),
        Arc::new(FailingStore),
        TenantPaths::new(TEST_APP_ID),
    ))
}

/// Drive one request through the router, returning status and raw body.
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router never fails");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, body)
}

/// Drive one request and parse the body as JSON.
pub async fn send_json(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(router, request).await;
    let value = serde_json::from_slice(&body).expect("response body is JSON");
    (status, value)
}

/// A POST /api/posts request with the given auth header value and JSON body.
pub fn create_post_request(auth: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/posts")
        .header("content-type", "application/json");
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
