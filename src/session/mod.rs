//! Per-session conversation state and the streaming event reducer.
//!
//! A [`ChatSession`] is an explicit object owning conversation and sidebar
//! state for one chat session; handlers get a reference instead of
//! reaching into ambient globals. Events from one stream are folded in
//! strictly in arrival order.
//!
//! Turn lifecycle: `Idle -> Sending -> Streaming -> {Completed | Errored}`.
//! At most one turn is in flight; the `is_streaming` flag is the guard and
//! the only mutual-exclusion mechanism (all mutation happens on one
//! cooperative task).

mod conversation;

pub use conversation::{ConversationState, TurnPhase};

use tracing::debug;

use crate::artifacts::SidebarStore;
use crate::models::{ChatMessage, ChatRequest, ToolCall};
use crate::stream::StreamEvent;

/// One chat session: conversation history, tool calls, and the artifact
/// sidebar fed by tool call events.
#[derive(Debug, Default)]
pub struct ChatSession {
    conversation: ConversationState,
    sidebar: SidebarStore,
    phase: TurnPhase,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a turn for `text`.
    ///
    /// Returns the request to send, built from the history as it stood
    /// before this turn. While a turn is already in flight this is a
    /// no-op returning `None`: no message is appended, no state changes.
    pub fn begin_turn(&mut self, text: &str) -> Option<ChatRequest> {
        if self.conversation.is_streaming {
            debug!("send while streaming ignored");
            return None;
        }

        self.phase = TurnPhase::Sending;
        let request = ChatRequest::new(text, self.conversation.messages.clone());

        self.conversation.messages.push(ChatMessage::user(text));
        self.conversation
            .messages
            .push(ChatMessage::assistant_placeholder());
        self.conversation.error = None;
        self.conversation.is_streaming = true;
        self.phase = TurnPhase::Streaming;

        Some(request)
    }

    /// Fold one stream event into the session.
    ///
    /// Events arriving outside a live turn (after a `Complete`/`Error`
    /// already ended it) are dropped.
    pub fn apply_event(&mut self, event: StreamEvent) {
        if !self.conversation.is_streaming {
            debug!(event_type = event.event_type_name(), "event after turn end dropped");
            return;
        }

        match event {
            StreamEvent::Chunk { content } => {
                if let Some(assistant) = self.conversation.streaming_assistant_mut() {
                    assistant.content.push_str(&content);
                }
            }
            StreamEvent::ToolCall {
                tool_name,
                description,
                files,
            } => {
                let call = ToolCall {
                    tool_name,
                    description,
                    files,
                };
                self.sidebar.add_files(call.files.clone());
                let summary = call.summary();
                if let Some(assistant) = self.conversation.streaming_assistant_mut() {
                    assistant.content.push_str(&summary);
                }
                self.conversation.tool_calls.push(call);
            }
            StreamEvent::Complete { full_response, .. } => {
                // Authoritative final text: replaces, never appends to, the
                // accumulated chunks
                if let Some(assistant) = self.conversation.streaming_assistant_mut() {
                    assistant.content = full_response;
                }
                self.conversation.is_streaming = false;
                self.phase = TurnPhase::Completed;
            }
            StreamEvent::Error { content } => {
                self.end_turn_with_error(content);
            }
        }
    }

    /// End the turn without a terminal event.
    ///
    /// A stream that closes cleanly before a `complete` arrives is a
    /// success termination: the accumulated content stands and no error is
    /// recorded.
    pub fn finish_turn(&mut self) {
        if !self.conversation.is_streaming {
            return;
        }
        self.conversation.is_streaming = false;
        self.phase = TurnPhase::Completed;
    }

    /// Transport-level failure of the in-flight turn. Handled exactly like
    /// a backend `error` event.
    pub fn fail_turn(&mut self, message: impl Into<String>) {
        if !self.conversation.is_streaming {
            return;
        }
        self.end_turn_with_error(message.into());
    }

    fn end_turn_with_error(&mut self, message: String) {
        self.conversation.error = Some(message);
        // Never leave a half-built assistant turn in history
        if self
            .conversation
            .streaming_assistant_mut()
            .is_some()
        {
            self.conversation.messages.pop();
        }
        self.conversation.is_streaming = false;
        self.phase = TurnPhase::Errored;
    }

    /// Reset to an empty conversation. Permitted in any phase.
    pub fn clear(&mut self) {
        self.conversation = ConversationState::default();
        self.phase = TurnPhase::Idle;
    }

    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.conversation.messages
    }

    pub fn tool_calls(&self) -> &[ToolCall] {
        &self.conversation.tool_calls
    }

    pub fn is_streaming(&self) -> bool {
        self.conversation.is_streaming
    }

    pub fn error(&self) -> Option<&str> {
        self.conversation.error.as_deref()
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn sidebar(&self) -> &SidebarStore {
        &self.sidebar
    }

    pub fn sidebar_mut(&mut self) -> &mut SidebarStore {
        &mut self.sidebar
    }
}
