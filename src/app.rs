//! Glue between the HTTP client and the session reducer.
//!
//! One call drives one full turn: open the stream, fold every event into
//! the session in arrival order, and convert a transport failure into the
//! same turn-ending path as a backend error event.

use futures::StreamExt;
use tracing::debug;

use crate::client::ChatClient;
use crate::session::ChatSession;
use crate::stream::StreamEvent;

/// Send `text` as a new turn and fold the streamed response into
/// `session`.
///
/// A send while a turn is in flight is a no-op (the `is_streaming` guard
/// lives in [`ChatSession::begin_turn`]). Transport failures do not
/// propagate: they end the turn via [`ChatSession::fail_turn`] and the
/// error is readable from the session state afterwards. The `on_event`
/// callback observes each applied event, letting a UI repaint after every
/// chunk.
pub async fn send_message<F>(
    client: &ChatClient,
    session: &mut ChatSession,
    text: &str,
    mut on_event: F,
) where
    F: FnMut(&StreamEvent, &ChatSession),
{
    let request = match session.begin_turn(text) {
        Some(request) => request,
        None => return,
    };

    let mut stream = match client.stream(&request).await {
        Ok(stream) => stream,
        Err(e) => {
            session.fail_turn(e.to_string());
            return;
        }
    };

    while let Some(result) = stream.next().await {
        match result {
            Ok(event) => {
                session.apply_event(event.clone());
                on_event(&event, session);
                if event.is_terminal() {
                    break;
                }
            }
            Err(e) => {
                session.fail_turn(e.to_string());
                return;
            }
        }
    }

    // A clean stream end without a terminal event still ends the turn;
    // the accumulated content stands
    if session.is_streaming() {
        debug!("stream ended without terminal event");
        session.finish_turn();
    }
}
