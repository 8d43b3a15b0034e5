//! Signal and stdin handling for shutdown

use futures::stream::StreamExt;
use signal_hook_tokio::Signals;
use tokio::sync::oneshot;
use tracing::{info, warn};

/// Wait for shutdown signals (SIGTERM, SIGINT)
pub async fn shutdown_signal() {
    let mut signals = match Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ]) {
        Ok(signals) => signals,
        Err(e) => {
            warn!("Failed to create signal handler: {}", e);
            return std::future::pending().await;
        }
    };

    if let Some(signal) = signals.next().await {
        info!("Received signal: {}", signal);
    }
}

/// Wait for a line (or end of input) on stdin.
///
/// The read happens on a plain OS thread so a blocked read never holds up
/// runtime shutdown.
pub async fn stdin_line() {
    let (tx, rx) = oneshot::channel();

    let spawned = std::thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            let mut line = String::new();
            if let Err(e) = std::io::stdin().read_line(&mut line) {
                warn!("Failed to read stdin: {}", e);
            }
            let _ = tx.send(());
        });

    match spawned {
        Ok(_) => {
            let _ = rx.await;
        }
        Err(e) => {
            warn!("Failed to spawn stdin reader: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
