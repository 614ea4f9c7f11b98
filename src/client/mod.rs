//! HTTP client for the chat backend.
//!
//! Provides the streaming chat call (newline-delimited JSON over a chunked
//! response body), the health probe, and the sandboxed-execution
//! collaborator call.

use std::collections::VecDeque;
use std::pin::Pin;

use futures_util::stream::{self, Stream};
use futures_util::StreamExt;
use reqwest::Client;
use tracing::{debug, error};

use crate::config::Config;
use crate::models::{ChatRequest, ErrorResponse, SandboxRequest, SandboxResponse};
use crate::stream::{parse_event_line, LineDecoder, StreamEvent, StreamReadError};

/// Error type for chat client operations
#[derive(Debug)]
pub enum ClientError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Underlying byte source failed mid-stream
    Read(StreamReadError),
    /// JSON deserialization failed
    Json(serde_json::Error),
    /// Server returned an error status
    Server { status: u16, message: String },
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Http(e) => write!(f, "HTTP error: {}", e),
            ClientError::Read(e) => write!(f, "{}", e),
            ClientError::Json(e) => write!(f, "JSON error: {}", e),
            ClientError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Http(e) => Some(e),
            ClientError::Read(e) => Some(e),
            ClientError::Json(e) => Some(e),
            ClientError::Server { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Http(e)
    }
}

impl From<StreamReadError> for ClientError {
    fn from(e: StreamReadError) -> Self {
        ClientError::Read(e)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Json(e)
    }
}

/// A pinned, boxed stream of protocol events.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, ClientError>> + Send>>;

/// Client for the chat backend API.
pub struct ChatClient {
    base_url: String,
    client: Client,
}

impl ChatClient {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            client: Client::new(),
        }
    }

    /// Create a client for a specific base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Open a streaming chat turn.
    ///
    /// POSTs to `/api/v1/chat/stream` and returns the decoded event
    /// stream. Lines that fail to parse are skipped inside the stream
    /// (tolerant policy); only transport failures surface as errors. The
    /// returned stream is consumed exactly once and is not restartable.
    pub async fn stream(&self, request: &ChatRequest) -> Result<EventStream, ClientError> {
        let url = format!("{}/api/v1/chat/stream", self.base_url);
        debug!(%url, "opening chat stream");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let bytes_stream = response.bytes_stream();

        // Decode bytes to lines to events; one event per stream item, with
        // lines queued when a chunk completes several at once
        let event_stream = stream::unfold(
            (
                bytes_stream,
                LineDecoder::new(),
                VecDeque::<StreamEvent>::new(),
                false,
            ),
            |(mut bytes_stream, mut decoder, mut queue, mut ended)| async move {
                loop {
                    if let Some(event) = queue.pop_front() {
                        return Some((Ok(event), (bytes_stream, decoder, queue, ended)));
                    }
                    if ended {
                        return None;
                    }

                    match bytes_stream.next().await {
                        Some(Ok(chunk)) => {
                            for line in decoder.feed(&chunk) {
                                if let Some(event) = parse_event_line(&line) {
                                    queue.push_back(event);
                                }
                            }
                        }
                        Some(Err(e)) => {
                            error!(error = %e, "chat stream read failed");
                            let read_err = StreamReadError::new(e.to_string());
                            return Some((
                                Err(ClientError::Read(read_err)),
                                (bytes_stream, decoder, queue, ended),
                            ));
                        }
                        None => {
                            // Source exhausted: flush the unterminated tail
                            ended = true;
                            if let Some(line) = decoder.finish() {
                                if let Some(event) = parse_event_line(&line) {
                                    queue.push_back(event);
                                }
                            }
                        }
                    }
                }
            },
        );

        Ok(Box::pin(event_stream))
    }

    /// Probe the chat service health endpoint.
    ///
    /// Returns `true` iff the endpoint answers 2xx.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let url = format!("{}/api/v1/chat/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }

    /// Run files in the sandboxed execution service.
    ///
    /// The service is an opaque collaborator; only the request/response
    /// shapes are contractual.
    pub async fn run_sandbox(
        &self,
        request: &SandboxRequest,
    ) -> Result<SandboxResponse, ClientError> {
        let url = format!("{}/api/e2b/run", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Ok(response.json::<SandboxResponse>().await?)
    }

    /// Turn a non-2xx response into a `ClientError::Server`, preferring
    /// the backend's `{"detail": ...}` body over the bare status text.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status_code = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|err| err.detail)
            .unwrap_or_else(|_| {
                if body.is_empty() {
                    format!("HTTP {}", status_code)
                } else {
                    body
                }
            });

        Err(ClientError::Server {
            status: status_code,
            message,
        })
    }
}
