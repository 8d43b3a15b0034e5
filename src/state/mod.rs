//! State management module
//!
//! This module contains the reminder's state machine and the events that drive it.

pub mod reminder;
pub mod sedentary_state;
pub mod timer_state;

// Re-export main types
pub use reminder::{Effect, NotificationId, Reminder};
pub use sedentary_state::{SedentaryState, TickOutcome, DEFAULT_IDLE_THRESHOLD_MS};
pub use timer_state::{Countdown, Phase, TickReport};

/// Inputs funnelled into the single session consumer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// One second elapsed
    Tick,
    /// The user pressed a key or moved the mouse
    Activity,
}
