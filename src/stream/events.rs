//! Protocol event definitions for the chat streaming API.
//!
//! The backend sends one JSON object per line over a chunked response body.
//! Each object carries a `type` discriminator that selects a variant here.

use serde::{Deserialize, Serialize};

use crate::models::CodeFile;

/// One decoded unit from the streaming protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Partial assistant text
    Chunk { content: String },
    /// Turn finished; `full_response` is the authoritative final text and
    /// may differ from the concatenation of chunks
    Complete {
        full_response: String,
        message_count: u32,
    },
    /// Tool invocation that produced files
    ToolCall {
        tool_name: String,
        description: String,
        files: Vec<CodeFile>,
    },
    /// Backend-reported error; ends the turn
    Error { content: String },
}

impl StreamEvent {
    /// Returns the wire name of the event type, for logging.
    pub fn event_type_name(&self) -> &'static str {
        match self {
            StreamEvent::Chunk { .. } => "chunk",
            StreamEvent::Complete { .. } => "complete",
            StreamEvent::ToolCall { .. } => "tool_call",
            StreamEvent::Error { .. } => "error",
        }
    }

    /// Whether this event terminates the turn.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StreamEvent::Complete { .. } | StreamEvent::Error { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Language;

    #[test]
    fn test_chunk_round_trip() {
        let event: StreamEvent =
            serde_json::from_str(r#"{"type":"chunk","content":"Hel"}"#).unwrap();
        assert_eq!(
            event,
            StreamEvent::Chunk {
                content: "Hel".to_string()
            }
        );
    }

    #[test]
    fn test_complete_uses_snake_case_fields() {
        let event: StreamEvent = serde_json::from_str(
            r#"{"type":"complete","full_response":"Hello world","message_count":4}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            StreamEvent::Complete {
                full_response: "Hello world".to_string(),
                message_count: 4
            }
        );
    }

    #[test]
    fn test_tool_call_carries_files() {
        let event: StreamEvent = serde_json::from_str(
            r#"{"type":"tool_call","tool_name":"generate_code","description":"a page","files":[{"filename":"index.html","content":"<html/>","language":"html"}]}"#,
        )
        .unwrap();
        match event {
            StreamEvent::ToolCall {
                tool_name, files, ..
            } => {
                assert_eq!(tool_name, "generate_code");
                assert_eq!(files.len(), 1);
                assert_eq!(files[0].language, Language::Html);
            }
            other => panic!("Expected ToolCall, got {:?}", other),
        }
    }

    #[test]
    fn test_event_type_name() {
        let event = StreamEvent::Error {
            content: "boom".to_string(),
        };
        assert_eq!(event.event_type_name(), "error");
        assert!(event.is_terminal());

        let event = StreamEvent::Chunk {
            content: String::new(),
        };
        assert_eq!(event.event_type_name(), "chunk");
        assert!(!event.is_terminal());
    }
}
