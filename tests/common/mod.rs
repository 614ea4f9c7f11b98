//! Common test utilities for integration tests.
//!
//! Helpers for standing up a mock backend serving the newline-delimited
//! JSON chat protocol.

#![allow(dead_code)]

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Join JSON events into a newline-delimited body with a trailing newline.
pub fn ndjson_body(events: &[serde_json::Value]) -> String {
    let mut body = events
        .iter()
        .map(|event| event.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    body.push('\n');
    body
}

/// Mount the chat stream endpoint with a fixed response body.
pub async fn mock_chat_stream(server: &MockServer, body: impl Into<Vec<u8>>) {
    Mock::given(method("POST"))
        .and(path("/api/v1/chat/stream"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.into(), "application/x-ndjson"))
        .mount(server)
        .await;
}

/// A chunk event payload.
pub fn chunk_event(content: &str) -> serde_json::Value {
    json!({"type": "chunk", "content": content})
}

/// A complete event payload.
pub fn complete_event(full_response: &str, message_count: u32) -> serde_json::Value {
    json!({
        "type": "complete",
        "full_response": full_response,
        "message_count": message_count,
    })
}

/// An error event payload.
pub fn error_event(content: &str) -> serde_json::Value {
    json!({"type": "error", "content": content})
}

/// A tool_call event payload with one HTML file.
pub fn tool_call_event(tool_name: &str, description: &str) -> serde_json::Value {
    json!({
        "type": "tool_call",
        "tool_name": tool_name,
        "description": description,
        "files": [
            {"filename": "index.html", "content": "<html></html>", "language": "html"}
        ],
    })
}
