//! Countdown and phase types driving the reminder

use std::fmt;

/// Which part of the work/break cycle the user is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    /// The phase that follows a completed countdown
    pub fn flipped(self) -> Self {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::Work => "Work",
            Phase::Break => "Break",
        }
    }
}

/// Countdown state for the current phase
///
/// `Awaiting` means the previous countdown finished and the reminder is waiting
/// for the user to either resume activity or stay away long enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Counting(u64),
    Awaiting,
}

impl Countdown {
    pub fn is_active(&self) -> bool {
        matches!(self, Countdown::Counting(_))
    }
}

/// What a single tick observed, used for the per-tick diagnostic line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickReport {
    Counting { phase: Phase, remaining_seconds: u64 },
    Idle { since_last_activity_ms: i64 },
}

impl fmt::Display for TickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickReport::Counting { phase, remaining_seconds } => {
                write!(f, "{} ({})", phase.name(), remaining_seconds)
            }
            TickReport::Idle { since_last_activity_ms } => {
                write!(f, "Time since last activity: {} ms", since_last_activity_ms)
            }
        }
    }
}
