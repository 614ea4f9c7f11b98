//! Byte stream to line decoder.
//!
//! The streaming endpoint delivers newline-delimited JSON over a chunked
//! response body. Network chunk boundaries fall anywhere, including inside
//! a line or inside a multi-byte UTF-8 sequence, so the decoder buffers
//! raw bytes and only converts complete lines. `\n` is a single byte that
//! never occurs inside a UTF-8 continuation, which makes splitting on it
//! safe before conversion.

/// Stateful decoder turning arbitrary byte chunks into complete lines.
///
/// Lines are split on `\n`, stripped of a trailing `\r`, and trimmed.
/// Whitespace-only lines are dropped. An unterminated trailing fragment is
/// held across calls and surfaced by [`LineDecoder::finish`] when the
/// source ends. Buffering is unbounded; a line is as long as the payload
/// says it is.
#[derive(Debug, Default)]
pub struct LineDecoder {
    buffer: Vec<u8>,
}

impl LineDecoder {
    /// Create an empty decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of bytes, returning every line completed by it.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let rest = self.buffer.split_off(pos + 1);
            let mut raw = std::mem::replace(&mut self.buffer, rest);
            raw.pop(); // the '\n'
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
            let line = String::from_utf8_lossy(&raw);
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }
        lines
    }

    /// Flush the trailing fragment, if any.
    ///
    /// A final line lacking a trailing newline must not be dropped; callers
    /// invoke this once when the underlying source reports end-of-stream.
    pub fn finish(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let raw = std::mem::take(&mut self.buffer);
        let line = String::from_utf8_lossy(&raw);
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Discard any buffered fragment.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }
}
