use crate::store::DocumentPath;

/// Computes the tenant-scoped roots all persisted data lives under.
///
/// The application id is used verbatim. An id containing a path delimiter
/// silently addresses a different (likely invalid) location in the store.
#[derive(Debug, Clone)]
pub struct TenantPaths {
    app_id: String,
}

impl TenantPaths {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
        }
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Shared root: `artifacts/{appId}/public/data`
    pub fn public_root(&self) -> DocumentPath {
        DocumentPath::root()
            .collection("artifacts")
            .doc(self.app_id.as_str())
            .collection("public")
            .doc("data")
    }

    /// Per-user private root: `artifacts/{appId}/users/{userId}`
    pub fn private_user_root(&self, user_id: &str) -> DocumentPath {
        DocumentPath::root()
            .collection("artifacts")
            .doc(self.app_id.as_str())
            .collection("users")
            .doc(user_id)
    }

    /// Posts collection for a course under the shared root:
    /// `artifacts/{appId}/public/data/courses/{courseId}/posts`
    pub fn course_posts(&self, course_id: &str) -> DocumentPath {
        self.public_root()
            .collection("courses")
            .doc(course_id)
            .collection("posts")
    }
}
