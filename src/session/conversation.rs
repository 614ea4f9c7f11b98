use serde::{Deserialize, Serialize};

use crate::models::{ChatMessage, ToolCall};

/// Where the in-flight turn is in its lifecycle.
///
/// `Sending` is transient: `begin_turn` passes through it while the user
/// message and assistant placeholder are appended, then lands in
/// `Streaming`. `Completed`/`Errored` persist until the next turn starts
/// or the session is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    #[default]
    Idle,
    Sending,
    Streaming,
    Completed,
    Errored,
}

/// Conversation state owned by one chat session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConversationState {
    pub messages: Vec<ChatMessage>,
    pub tool_calls: Vec<ToolCall>,
    pub is_streaming: bool,
    pub error: Option<String>,
}

impl ConversationState {
    /// The assistant placeholder of the in-flight turn, if present.
    ///
    /// During a turn the placeholder is always the trailing message.
    pub(super) fn streaming_assistant_mut(&mut self) -> Option<&mut ChatMessage> {
        self.messages
            .last_mut()
            .filter(|msg| msg.role == crate::models::MessageRole::Assistant)
    }
}
