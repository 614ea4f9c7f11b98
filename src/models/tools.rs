use serde::{Deserialize, Serialize};

use super::file::CodeFile;

/// A tool call reported by the backend during a streaming turn.
///
/// Carries the generated files so the client can surface them without a
/// second round trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCall {
    pub tool_name: String,
    pub description: String,
    pub files: Vec<CodeFile>,
}

impl ToolCall {
    /// One-line summary appended to the assistant message when the call is
    /// recorded.
    pub fn summary(&self) -> String {
        format!(
            "Generated {} file(s) using {}: {}",
            self.files.len(),
            self.tool_name,
            self.description
        )
    }
}
