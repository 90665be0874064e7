use axum::{
    extract::{rejection::JsonRejection, Extension, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::models::post::{normalize_tags, Post};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub course_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Raw JSON on purpose; any non-array shape normalizes to no tags.
    pub tags: Option<Value>,
}

/// POST /api/posts - Create a post in the shared tenant namespace.
///
/// The auth middleware must already have attached [`AuthUser`]; a missing
/// subject here is treated as a validation failure, not an auth failure.
pub async fn create(
    State(state): State<AppState>,
    auth_user: Option<Extension<AuthUser>>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload
        .map_err(|rejection| ApiError::bad_request(format!("Invalid request body: {}", rejection.body_text())))?;

    let Extension(auth_user) =
        auth_user.ok_or_else(|| ApiError::bad_request("Missing authenticated user id"))?;

    let course_id = require_field(payload.course_id, "courseId")?;
    let title = require_field(payload.title, "title")?;
    let content = require_field(payload.content, "content")?;

    let tags = normalize_tags(payload.tags.as_ref());
    let collection = state.tenant.course_posts(&course_id);

    let post = Post::new(auth_user.uid, course_id, title, content, tags);
    let record = serde_json::to_value(&post).map_err(|err| {
        tracing::error!("Failed to serialize post record: {}", err);
        ApiError::internal_server_error("An error occurred while saving the post")
    })?;

    // Single insert, server-generated id. No idempotency key: a retried
    // submission creates a second post.
    let post_id = state.store.insert(&collection, &record).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Post created successfully.",
            "postId": post_id
        })),
    ))
}

/// Presence check matching the original behavior: only absent or empty
/// values are rejected.
fn require_field(value: Option<String>, name: &str) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::bad_request(format!(
            "Missing required field: {}",
            name
        ))),
    }
}
