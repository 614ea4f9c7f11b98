//! Streaming protocol layer: newline-delimited JSON over a chunked body.
//!
//! # Module structure
//! - `decoder` - byte chunks to complete lines (LineDecoder)
//! - `events` - event type definitions (StreamEvent)
//! - `parser` - tolerant per-line parsing (parse_event_line)

mod decoder;
mod events;
mod parser;

pub use decoder::LineDecoder;
pub use events::StreamEvent;
pub use parser::parse_event_line;

/// Failure of the underlying byte source while a stream is being read.
///
/// Line-level parse problems degrade to skipped lines and never produce
/// this; only transport errors do.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamReadError {
    pub message: String,
}

impl StreamReadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StreamReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stream read failed: {}", self.message)
    }
}

impl std::error::Error for StreamReadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_read_error_display() {
        let err = StreamReadError::new("connection reset");
        assert_eq!(err.to_string(), "stream read failed: connection reset");
    }

    #[test]
    fn test_decoder_and_parser_compose() {
        let mut decoder = LineDecoder::new();
        let mut events = Vec::new();

        let payload: &[&[u8]] = &[
            b"{\"type\":\"chunk\",\"content\":\"Hel\"}\n{\"ty",
            b"pe\":\"chunk\",\"content\":\"lo\"}\nnot-json\n",
            b"{\"type\":\"complete\",\"full_response\":\"Hello\",\"message_count\":2}",
        ];

        for chunk in payload {
            for line in decoder.feed(chunk) {
                events.extend(parse_event_line(&line));
            }
        }
        if let Some(line) = decoder.finish() {
            events.extend(parse_event_line(&line));
        }

        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], StreamEvent::Chunk { .. }));
        assert!(matches!(events[1], StreamEvent::Chunk { .. }));
        assert!(matches!(events[2], StreamEvent::Complete { .. }));
    }
}
