//! Tolerant per-line protocol parsing.
//!
//! Upstream network chunking can split or merge lines, so one bad line
//! must never take down the whole stream. Malformed JSON and unknown
//! `type` values are logged and skipped; the caller keeps reading.

use tracing::warn;

use super::events::StreamEvent;

/// Parse one line of the stream into a typed event.
///
/// Returns `None` for empty lines, malformed JSON, and unrecognized event
/// shapes. Parse failures are logged and never propagate.
pub fn parse_event_line(line: &str) -> Option<StreamEvent> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value: serde_json::Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, line = %truncate(trimmed, 120), "skipping malformed stream line");
            return None;
        }
    };

    match serde_json::from_value::<StreamEvent>(value.clone()) {
        Ok(event) => Some(event),
        Err(err) => {
            let event_type = value
                .get("type")
                .and_then(|t| t.as_str())
                .unwrap_or("<missing>");
            warn!(event_type, error = %err, "skipping unrecognized stream event");
            None
        }
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chunk_line() {
        let event = parse_event_line(r#"{"type":"chunk","content":"Hello"}"#);
        assert_eq!(
            event,
            Some(StreamEvent::Chunk {
                content: "Hello".to_string()
            })
        );
    }

    #[test]
    fn test_parse_complete_line() {
        let event = parse_event_line(
            r#"{"type":"complete","full_response":"Hello world","message_count":2}"#,
        );
        assert!(matches!(event, Some(StreamEvent::Complete { .. })));
    }

    #[test]
    fn test_parse_error_line() {
        let event = parse_event_line(r#"{"type":"error","content":"model overloaded"}"#);
        assert_eq!(
            event,
            Some(StreamEvent::Error {
                content: "model overloaded".to_string()
            })
        );
    }

    #[test]
    fn test_empty_line_yields_nothing() {
        assert_eq!(parse_event_line(""), None);
        assert_eq!(parse_event_line("   "), None);
    }

    #[test]
    fn test_malformed_json_is_skipped() {
        assert_eq!(parse_event_line("{not json"), None);
        assert_eq!(parse_event_line(r#"{"type":"chunk","#), None);
    }

    #[test]
    fn test_unknown_type_is_skipped() {
        assert_eq!(parse_event_line(r#"{"type":"ping"}"#), None);
        assert_eq!(parse_event_line(r#"{"no_type_at_all":true}"#), None);
    }

    #[test]
    fn test_bad_line_does_not_poison_subsequent_lines() {
        assert_eq!(parse_event_line("garbage"), None);
        let event = parse_event_line(r#"{"type":"chunk","content":"still fine"}"#);
        assert_eq!(
            event,
            Some(StreamEvent::Chunk {
                content: "still fine".to_string()
            })
        );
    }

    #[test]
    fn test_wrong_field_shape_is_skipped() {
        // Known type but content has the wrong JSON type
        assert_eq!(parse_event_line(r#"{"type":"chunk","content":42}"#), None);
    }
}
