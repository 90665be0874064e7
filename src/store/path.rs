use std::fmt;

/// A hierarchical document path, alternating collection and document
/// segments (e.g. `artifacts/{appId}/public/data`).
///
/// Segments are joined verbatim; nothing rejects a segment containing `/`,
/// so such a segment silently addresses a different path in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPath {
    segments: Vec<String>,
}

impl DocumentPath {
    pub fn root() -> Self {
        Self { segments: Vec::new() }
    }

    /// Descend into a named collection.
    pub fn collection(mut self, name: impl Into<String>) -> Self {
        self.segments.push(name.into());
        self
    }

    /// Descend into a named document.
    pub fn doc(mut self, id: impl Into<String>) -> Self {
        self.segments.push(id.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_segments_join() {
        let path = DocumentPath::root()
            .collection("artifacts")
            .doc("app-1")
            .collection("public")
            .doc("data");
        assert_eq!(path.to_string(), "artifacts/app-1/public/data");
        assert_eq!(path.segments().len(), 4);
    }

    #[test]
    fn test_root_is_empty() {
        assert_eq!(DocumentPath::root().to_string(), "");
    }
}
