use serde::{Deserialize, Serialize};

use super::file::CodeFile;
use super::message::ChatMessage;

/// Request body for the chat streaming endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    /// The message to send
    pub message: String,
    /// Prior turns, oldest first, excluding the message being sent
    pub conversation_history: Vec<ChatMessage>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, conversation_history: Vec<ChatMessage>) -> Self {
        Self {
            message: message.into(),
            conversation_history,
        }
    }
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Request body for the sandboxed execution collaborator.
///
/// The sandbox service is opaque to this client; only the shapes are part
/// of the contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SandboxRequest {
    pub files: Vec<CodeFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
}

/// Result of a sandboxed run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SandboxResponse {
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    #[serde(rename = "exitCode", default)]
    pub exit_code: i32,
}
