//! External capability module
//!
//! This module contains the boundaries to the desktop: the notification
//! gateway and the global input hook.

pub mod input;
pub mod notifier;

// Re-export main types
pub use input::{InputEvent, InputSource, RdevInputSource};
pub use notifier::{check_notify_send_available, NotifyError, NotifySend, Notifier};
