//! Global keyboard and mouse hook

use rdev::{listen, Event, EventType};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, error, info};

/// Raw input event kinds reported by the hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyPress,
    KeyRelease,
    ButtonPress,
    ButtonRelease,
    MouseMove,
    Wheel,
}

impl InputEvent {
    /// Only key presses and mouse moves count as the user being at the computer
    pub fn is_activity(&self) -> bool {
        matches!(self, InputEvent::KeyPress | InputEvent::MouseMove)
    }
}

impl From<&EventType> for InputEvent {
    fn from(event_type: &EventType) -> Self {
        match event_type {
            EventType::KeyPress(_) => InputEvent::KeyPress,
            EventType::KeyRelease(_) => InputEvent::KeyRelease,
            EventType::ButtonPress(_) => InputEvent::ButtonPress,
            EventType::ButtonRelease(_) => InputEvent::ButtonRelease,
            EventType::MouseMove { .. } => InputEvent::MouseMove,
            EventType::Wheel { .. } => InputEvent::Wheel,
        }
    }
}

/// Something that can deliver a live stream of input events
pub trait InputSource {
    fn subscribe(self) -> anyhow::Result<mpsc::Receiver<InputEvent>>;
}

/// Input source backed by `rdev::listen` on a dedicated thread
#[derive(Debug, Clone)]
pub struct RdevInputSource {
    buffer: usize,
}

impl RdevInputSource {
    pub fn new(buffer: usize) -> Self {
        Self { buffer: buffer.max(1) }
    }
}

impl InputSource for RdevInputSource {
    fn subscribe(self) -> anyhow::Result<mpsc::Receiver<InputEvent>> {
        let (tx, rx) = mpsc::channel(self.buffer);

        std::thread::Builder::new()
            .name("input-hook".to_string())
            .spawn(move || {
                info!("Listening for keyboard and mouse events");
                let result = listen(move |event: Event| {
                    match tx.try_send(InputEvent::from(&event.event_type)) {
                        // Activity is idempotent, dropping a burst of mouse moves loses nothing
                        Ok(()) | Err(TrySendError::Full(_)) => {}
                        Err(TrySendError::Closed(_)) => debug!("Input receiver dropped"),
                    }
                });

                // Ending here drops the sender, which ends the stream
                if let Err(e) = result {
                    error!("Input hook stopped: {:?}", e);
                }
            })?;

        Ok(rx)
    }
}
