//! Reminders and the side effects a state transition asks for

use std::fmt;

/// Opaque handle returned by the notification gateway
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotificationId(String);

impl NotificationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The messages shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reminder {
    /// Work countdown finished
    BreakDue,
    /// The user has been away long enough for the break to count
    BreakInProgress,
    /// Break countdown finished
    FocusDue,
}

impl Reminder {
    pub fn message(self) -> &'static str {
        match self {
            Reminder::BreakDue => "Break up sedentary time!",
            Reminder::BreakInProgress => "Break in progress",
            Reminder::FocusDue => "Time to focus!",
        }
    }
}

/// Side effect requested by the state machine, executed in order by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Retract the most recent notification, if there is one
    RetractCurrent,
    Notify(Reminder),
}
