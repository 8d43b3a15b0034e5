//! Translates raw input events into activity signals

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{services::InputEvent, state::SessionEvent};

/// Background task forwarding key presses and mouse moves to the session.
///
/// Stops quietly when the input stream ends; the hook is not restarted.
pub async fn activity_observer_task(
    mut input: mpsc::Receiver<InputEvent>,
    tx: mpsc::Sender<SessionEvent>,
) {
    info!("Starting activity observer");

    while let Some(event) = input.recv().await {
        if !event.is_activity() {
            continue;
        }

        if tx.send(SessionEvent::Activity).await.is_err() {
            debug!("Session queue closed, stopping activity observer");
            return;
        }
    }

    debug!("Input stream ended, activity observer stopped");
}
