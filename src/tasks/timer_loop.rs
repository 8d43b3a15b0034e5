//! One-second tick producer

use std::time::Duration;
use tokio::{
    sync::mpsc,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::state::SessionEvent;

/// Background task that sends a tick into the session queue once per second.
///
/// Runs for the lifetime of the process; it only returns if the session has
/// gone away.
pub async fn timer_loop_task(tx: mpsc::Sender<SessionEvent>) {
    info!("Starting timer loop");

    let mut interval = interval(Duration::from_secs(1));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        if tx.send(SessionEvent::Tick).await.is_err() {
            debug!("Session queue closed, stopping timer loop");
            return;
        }
    }
}
