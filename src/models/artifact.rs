use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::file::CodeFile;

/// A titled, described bundle of generated code files.
///
/// Artifacts come from two places: the code-fence extractor synthesizes
/// them from assistant text, and tool call events report them directly.
/// The `id` is generated at creation time and never reused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artifact {
    pub id: String,
    pub title: String,
    pub description: String,
    pub files: Vec<CodeFile>,
    pub created_at: DateTime<Utc>,
}

impl Artifact {
    /// Create an artifact with a fresh id and the current timestamp.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        files: Vec<CodeFile>,
    ) -> Self {
        Self {
            id: format!("artifact-{}", Uuid::new_v4()),
            title: title.into(),
            description: description.into(),
            files,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;

    #[test]
    fn test_new_artifact_has_unique_id() {
        let a = Artifact::new("A", "first", vec![]);
        let b = Artifact::new("B", "second", vec![]);
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("artifact-"));
    }

    #[test]
    fn test_artifact_keeps_files() {
        let file = CodeFile::new("index.html", "<html></html>", Language::Html);
        let artifact = Artifact::new("Page", "an html page", vec![file.clone()]);
        assert_eq!(artifact.files, vec![file]);
    }
}
