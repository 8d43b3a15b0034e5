//! Desktop notifications through `notify-send`

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

use crate::state::NotificationId;

const NOTIFY_SEND: &str = "notify-send";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("failed to execute notify-send: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("notify-send failed: {0}")]
    Failed(String),
    #[error("notify-send did not print a notification id")]
    MissingId,
}

/// Gateway for showing and retracting desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a message with elevated urgency and return its handle
    async fn notify(&self, message: &str) -> Result<NotificationId, NotifyError>;

    /// Expire a previously shown notification. Unknown ids are not an error.
    async fn retract(&self, id: &NotificationId) -> Result<(), NotifyError>;
}

#[async_trait]
impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    async fn notify(&self, message: &str) -> Result<NotificationId, NotifyError> {
        (**self).notify(message).await
    }

    async fn retract(&self, id: &NotificationId) -> Result<(), NotifyError> {
        (**self).retract(id).await
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotifySend;

#[async_trait]
impl Notifier for NotifySend {
    async fn notify(&self, message: &str) -> Result<NotificationId, NotifyError> {
        debug!("Sending notification: {}", message);

        let output = Command::new(NOTIFY_SEND)
            .args(["-p", "--urgency=critical", message])
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NotifyError::Failed(stderr.trim().to_string()));
        }

        parse_notification_id(&String::from_utf8_lossy(&output.stdout))
    }

    async fn retract(&self, id: &NotificationId) -> Result<(), NotifyError> {
        debug!("Retracting notification {}", id);

        // Replacing the notification with a blank one that expires immediately
        let output = Command::new(NOTIFY_SEND)
            .arg(format!("--replace-id={}", id))
            .args(["-p", " ", "--expire-time=1"])
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NotifyError::Failed(stderr.trim().to_string()));
        }

        Ok(())
    }
}

fn parse_notification_id(stdout: &str) -> Result<NotificationId, NotifyError> {
    let id = stdout.trim_end_matches(['\n', '\r']).trim();
    if id.is_empty() {
        return Err(NotifyError::MissingId);
    }
    Ok(NotificationId::new(id))
}

/// Check if notify-send is available on the system
pub async fn check_notify_send_available() -> Result<(), String> {
    Command::new(NOTIFY_SEND)
        .arg("--version")
        .output()
        .await
        .map_err(|_| format!("{} is not available. Reminders will only be logged.", NOTIFY_SEND))?;

    info!("{} is available", NOTIFY_SEND);
    Ok(())
}
