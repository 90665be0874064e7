use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// A forum post. Immutable once created; no update or delete path exists.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    /// Set server-side from the verified token, never from client input.
    pub author_id: String,
    pub course_id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub vote_score: i64,
    pub comment_count: i64,
    /// Server-assigned; client-supplied timestamps are ignored.
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        author_id: String,
        course_id: String,
        title: String,
        content: String,
        tags: Vec<String>,
    ) -> Self {
        Self {
            author_id,
            course_id,
            title,
            content,
            tags,
            vote_score: 0,
            comment_count: 0,
            created_at: Utc::now(),
        }
    }
}

/// Normalize the client-supplied `tags` value.
///
/// A JSON array of strings is kept verbatim, order preserved. Any other
/// shape (absent, non-array, or an array containing a non-string) collapses
/// to an empty list; malformed tags are never an error.
pub fn normalize_tags(tags: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(items)) = tags else {
        return Vec::new();
    };

    let mut normalized = Vec::with_capacity(items.len());
    for item in items {
        match item.as_str() {
            Some(tag) => normalized.push(tag.to_string()),
            None => return Vec::new(),
        }
    }
    normalized
}
