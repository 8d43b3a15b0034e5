//! The single consumer that owns the reminder state

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    services::Notifier,
    state::{Effect, SedentaryState, SessionEvent},
    utils::Clock,
};

/// Reminder state paired with the gateway that delivers its notifications
pub struct Session<N> {
    state: SedentaryState,
    notifier: N,
}

impl<N: Notifier> Session<N> {
    pub fn new(state: SedentaryState, notifier: N) -> Self {
        Self { state, notifier }
    }

    pub fn state(&self) -> &SedentaryState {
        &self.state
    }

    /// Apply one event as a whole, including its notifications
    pub async fn handle(&mut self, event: SessionEvent, now_ms: i64) {
        let effects = match event {
            SessionEvent::Tick => {
                let outcome = self.state.tick(now_ms);
                info!("{}", outcome.report);
                outcome.effects
            }
            SessionEvent::Activity => {
                let effects = self.state.record_activity(now_ms);
                if !effects.is_empty() {
                    info!("Activity resumed, starting {}s work session", self.state.work_duration_secs());
                }
                effects
            }
        };

        for effect in effects {
            self.apply(effect).await;
        }
    }

    async fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::RetractCurrent => {
                let Some(id) = self.state.take_notification() else {
                    return;
                };
                if let Err(e) = self.notifier.retract(&id).await {
                    warn!("Failed to retract notification {}: {}", id, e);
                }
            }
            Effect::Notify(reminder) => match self.notifier.notify(reminder.message()).await {
                Ok(id) => {
                    debug!("Notification {} shown: {}", id, reminder.message());
                    self.state.set_notification(id);
                }
                Err(e) => warn!("Failed to show notification '{}': {}", reminder.message(), e),
            },
        }
    }
}

/// Background task that processes ticks and activity in arrival order
pub async fn session_task<N: Notifier>(
    mut session: Session<N>,
    mut rx: mpsc::Receiver<SessionEvent>,
    clock: Arc<dyn Clock>,
) {
    info!(
        "Starting session: work={}s, break={}s",
        session.state().work_duration_secs(),
        session.state().break_duration_secs()
    );

    while let Some(event) = rx.recv().await {
        session.handle(event, clock.now_ms()).await;
    }

    debug!("Session queue closed, session stopped");
}
