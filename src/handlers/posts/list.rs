use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

/// GET /api/posts - Public list of posts.
///
/// Returns fixture data; listing is not wired to the document store in this
/// version.
pub async fn list() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "message": "This is the public list of posts (mock data).",
            "data": [
                { "id": "mock-101", "title": "Welcome to the forum", "votes": 5 }
            ]
        })),
    )
}
