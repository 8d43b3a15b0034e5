//! Sedentary - an activity-driven reminder to break up sedentary time
//!
//! This is the main entry point for the sedentary application.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

use sedentary::{
    config::Config,
    services::{check_notify_send_available, InputSource, NotifySend, RdevInputSource},
    state::SedentaryState,
    tasks::{activity_observer_task, session_task, timer_loop_task, Session},
    utils::{shutdown_signal, stdin_line, Clock, SystemClock},
};

/// Capacity of the queue feeding the session
const SESSION_QUEUE_SIZE: usize = 64;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("sedentary={}", config.log_level()))
        .init();

    let work_secs = config.work_duration_secs();
    let break_secs = config.break_duration_secs();

    info!("Starting sedentary v1.0.0");
    info!("Configuration: work={}s, break={}s, idle threshold={}s",
          work_secs, break_secs, config.idle_threshold);

    // Reminders keep running without a notification daemon, they are just logged
    if let Err(e) = check_notify_send_available().await {
        warn!("{}", e);
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let state = SedentaryState::new(work_secs, break_secs, clock.now_ms())
        .with_idle_threshold_ms(config.idle_threshold_ms());

    let (tx, rx) = mpsc::channel(SESSION_QUEUE_SIZE);

    // Start the session that owns the state
    tokio::spawn(session_task(Session::new(state, NotifySend), rx, Arc::clone(&clock)));

    // Start the one-second ticker
    tokio::spawn(timer_loop_task(tx.clone()));

    // Start listening for keyboard and mouse activity
    match RdevInputSource::new(config.input_buffer).subscribe() {
        Ok(input) => {
            tokio::spawn(activity_observer_task(input, tx));
        }
        Err(e) => warn!("Failed to start input hook, activity will not be observed: {}", e),
    }

    info!("Press Enter to quit");

    tokio::select! {
        _ = stdin_line() => {
            info!("Input received on stdin");
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Sedentary stopped");
    Ok(())
}
