//! The activity-driven work/break state machine

use super::{Countdown, Effect, NotificationId, Phase, Reminder, TickReport};

/// Idle time after which a prompted break is assumed to have started
pub const DEFAULT_IDLE_THRESHOLD_MS: i64 = 30 * 1000;

/// Result of advancing the state machine by one second
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub report: TickReport,
    pub effects: Vec<Effect>,
}

/// Single owner record of the reminder's state.
///
/// Transitions are synchronous and return the side effects they need, so the
/// caller decides how (and whether) notifications actually get delivered.
#[derive(Debug, Clone)]
pub struct SedentaryState {
    work_duration_secs: u64,
    break_duration_secs: u64,
    idle_threshold_ms: i64,
    countdown: Countdown,
    phase: Phase,
    last_activity_ms: i64,
    current_notification: Option<NotificationId>,
}

impl SedentaryState {
    /// Create a state that starts counting down a work session right away
    pub fn new(work_duration_secs: u64, break_duration_secs: u64, now_ms: i64) -> Self {
        Self {
            work_duration_secs,
            break_duration_secs,
            idle_threshold_ms: DEFAULT_IDLE_THRESHOLD_MS,
            countdown: Countdown::Counting(work_duration_secs),
            phase: Phase::Work,
            last_activity_ms: now_ms,
            current_notification: None,
        }
    }

    pub fn with_idle_threshold_ms(mut self, idle_threshold_ms: i64) -> Self {
        self.idle_threshold_ms = idle_threshold_ms;
        self
    }

    pub fn work_duration_secs(&self) -> u64 {
        self.work_duration_secs
    }

    pub fn break_duration_secs(&self) -> u64 {
        self.break_duration_secs
    }

    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_break_mode(&self) -> bool {
        self.phase == Phase::Break
    }

    pub fn last_activity_ms(&self) -> i64 {
        self.last_activity_ms
    }

    pub fn current_notification(&self) -> Option<&NotificationId> {
        self.current_notification.as_ref()
    }

    /// Remove the current notification handle so it can be retracted
    pub fn take_notification(&mut self) -> Option<NotificationId> {
        self.current_notification.take()
    }

    pub fn set_notification(&mut self, id: NotificationId) {
        self.current_notification = Some(id);
    }

    /// Advance by one second.
    ///
    /// A countdown of 0 stays visible for one tick, then clears and flips the
    /// phase. With no countdown running, a break is auto-detected once the
    /// user has been idle past the threshold.
    pub fn tick(&mut self, now_ms: i64) -> TickOutcome {
        match self.countdown {
            Countdown::Counting(0) => {
                let report = TickReport::Counting { phase: self.phase, remaining_seconds: 0 };
                self.countdown = Countdown::Awaiting;

                let effects = match self.phase {
                    Phase::Break => vec![Effect::RetractCurrent, Effect::Notify(Reminder::FocusDue)],
                    // The break prompt must stay up until the break actually starts
                    Phase::Work => vec![Effect::Notify(Reminder::BreakDue)],
                };
                self.phase = self.phase.flipped();

                TickOutcome { report, effects }
            }
            Countdown::Counting(remaining) => {
                let report = TickReport::Counting { phase: self.phase, remaining_seconds: remaining };
                self.countdown = Countdown::Counting(remaining - 1);
                TickOutcome { report, effects: Vec::new() }
            }
            Countdown::Awaiting => {
                let since_last_activity_ms = now_ms - self.last_activity_ms;
                let report = TickReport::Idle { since_last_activity_ms };

                let effects = if self.phase == Phase::Break && since_last_activity_ms > self.idle_threshold_ms {
                    self.countdown = Countdown::Counting(self.break_duration_secs);
                    vec![Effect::RetractCurrent, Effect::Notify(Reminder::BreakInProgress)]
                } else {
                    Vec::new()
                };

                TickOutcome { report, effects }
            }
        }
    }

    /// Register a key press or mouse move.
    ///
    /// Only starts a new work countdown when a finished break is waiting for
    /// the user to come back. Activity while a break is awaited is ignored.
    pub fn record_activity(&mut self, now_ms: i64) -> Vec<Effect> {
        self.last_activity_ms = now_ms;

        if self.phase == Phase::Work && !self.countdown.is_active() {
            self.countdown = Countdown::Counting(self.work_duration_secs);
            vec![Effect::RetractCurrent]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_MS: i64 = 1_700_000_000_000;

    fn tick_n(state: &mut SedentaryState, n: u64, now_ms: i64) -> Vec<Effect> {
        let mut effects = Vec::new();
        for _ in 0..n {
            effects.extend(state.tick(now_ms).effects);
        }
        effects
    }

    /// Work countdown done, break mode awaiting inactivity
    fn awaiting_break() -> SedentaryState {
        let mut state = SedentaryState::new(0, 300, START_MS);
        state.tick(START_MS);
        assert!(state.is_break_mode());
        assert_eq!(state.countdown(), Countdown::Awaiting);
        state
    }

    #[test]
    fn work_countdown_completes_after_full_duration() {
        let mut state = SedentaryState::new(1500, 300, START_MS);

        let effects = tick_n(&mut state, 1500, START_MS);
        assert!(effects.is_empty());
        assert_eq!(state.countdown(), Countdown::Counting(0));
        assert!(!state.is_break_mode());

        let outcome = state.tick(START_MS);
        assert_eq!(outcome.report, TickReport::Counting { phase: Phase::Work, remaining_seconds: 0 });
        assert_eq!(outcome.effects, vec![Effect::Notify(Reminder::BreakDue)]);
        assert!(state.is_break_mode());
        assert_eq!(state.countdown(), Countdown::Awaiting);
    }

    #[test]
    fn zero_work_duration_completes_on_first_tick() {
        let mut state = SedentaryState::new(0, 5, START_MS);

        let outcome = state.tick(START_MS);
        assert_eq!(outcome.effects, vec![Effect::Notify(Reminder::BreakDue)]);
        assert!(state.is_break_mode());
    }

    #[test]
    fn cleared_countdown_stays_absent_without_trigger() {
        let mut state = awaiting_break();

        // Idle but under the threshold
        for second in 1..=30 {
            let outcome = state.tick(START_MS + second * 1000);
            assert!(outcome.effects.is_empty());
            assert_eq!(state.countdown(), Countdown::Awaiting);
        }
    }

    #[test]
    fn activity_in_break_mode_is_ignored() {
        let mut state = awaiting_break();

        let effects = state.record_activity(START_MS + 500);
        assert!(effects.is_empty());
        assert_eq!(state.countdown(), Countdown::Awaiting);
        assert!(state.is_break_mode());
        assert_eq!(state.last_activity_ms(), START_MS + 500);
    }

    #[test]
    fn sustained_idle_starts_break_countdown() {
        let mut state = awaiting_break();

        let mut notified = Vec::new();
        for second in 1..=31 {
            let outcome = state.tick(START_MS + second * 1000);
            notified.extend(outcome.effects);
        }

        assert_eq!(
            notified,
            vec![Effect::RetractCurrent, Effect::Notify(Reminder::BreakInProgress)]
        );
        assert_eq!(state.countdown(), Countdown::Counting(300));
        assert!(state.is_break_mode());
    }

    #[test]
    fn idle_threshold_is_exclusive() {
        let mut state = awaiting_break();

        assert!(state.tick(START_MS + 30_000).effects.is_empty());
        assert_eq!(state.countdown(), Countdown::Awaiting);
        assert!(!state.tick(START_MS + 30_001).effects.is_empty());
    }

    #[test]
    fn custom_idle_threshold_is_respected() {
        let mut state = SedentaryState::new(0, 10, START_MS).with_idle_threshold_ms(2_000);
        state.tick(START_MS);

        assert!(state.tick(START_MS + 2_000).effects.is_empty());
        assert_eq!(
            state.tick(START_MS + 2_001).effects,
            vec![Effect::RetractCurrent, Effect::Notify(Reminder::BreakInProgress)]
        );
    }

    #[test]
    fn break_completion_retracts_before_notifying() {
        let mut state = SedentaryState::new(0, 2, START_MS);
        state.tick(START_MS);
        state.tick(START_MS + 31_000);
        assert_eq!(state.countdown(), Countdown::Counting(2));

        let effects = tick_n(&mut state, 3, START_MS + 31_000);
        assert_eq!(effects, vec![Effect::RetractCurrent, Effect::Notify(Reminder::FocusDue)]);
        assert!(!state.is_break_mode());
        assert_eq!(state.countdown(), Countdown::Awaiting);
    }

    #[test]
    fn activity_after_break_starts_work_countdown() {
        let mut state = SedentaryState::new(0, 0, START_MS);
        state.set_notification(NotificationId::new("1"));
        state.tick(START_MS);
        state.tick(START_MS + 31_000);
        state.tick(START_MS + 32_000);
        assert_eq!(state.phase(), Phase::Work);
        assert_eq!(state.countdown(), Countdown::Awaiting);

        // No activity yet, work mode just waits
        assert!(state.tick(START_MS + 90_000).effects.is_empty());
        assert_eq!(state.countdown(), Countdown::Awaiting);

        let effects = state.record_activity(START_MS + 91_000);
        assert_eq!(effects, vec![Effect::RetractCurrent]);
        assert_eq!(state.countdown(), Countdown::Counting(state.work_duration_secs()));
    }

    #[test]
    fn activity_mid_countdown_only_updates_timestamp() {
        let mut state = SedentaryState::new(100, 5, START_MS);
        tick_n(&mut state, 10, START_MS);

        let effects = state.record_activity(START_MS + 10_000);
        assert!(effects.is_empty());
        assert_eq!(state.countdown(), Countdown::Counting(90));
        assert_eq!(state.last_activity_ms(), START_MS + 10_000);
    }

    #[test]
    fn every_completion_toggles_phase_once() {
        let mut state = SedentaryState::new(3, 2, START_MS);
        let mut now = START_MS;
        let mut completions = 0;
        let mut toggles = 0;

        for _ in 0..200 {
            now += 1000;
            let before = state.phase();
            let outcome = state.tick(now);
            let notifications = outcome
                .effects
                .iter()
                .filter(|effect| matches!(effect, Effect::Notify(_)))
                .count();

            if let TickReport::Counting { remaining_seconds: 0, .. } = outcome.report {
                completions += 1;
                assert_eq!(notifications, 1);
            }
            if state.phase() != before {
                toggles += 1;
            }

            // Come back to the keyboard as soon as work is awaited
            if state.phase() == Phase::Work && state.countdown() == Countdown::Awaiting {
                state.record_activity(now);
            }
        }

        assert!(completions > 2);
        assert_eq!(completions, toggles);
    }

    #[test]
    fn tick_report_renders_diagnostic_line() {
        let counting = TickReport::Counting { phase: Phase::Break, remaining_seconds: 42 };
        assert_eq!(counting.to_string(), "Break (42)");

        let idle = TickReport::Idle { since_last_activity_ms: 1234 };
        assert_eq!(idle.to_string(), "Time since last activity: 1234 ms");
    }

    #[test]
    fn notification_handle_is_cleared_when_taken() {
        let mut state = SedentaryState::new(10, 5, START_MS);
        state.set_notification(NotificationId::new("7"));

        assert_eq!(state.take_notification(), Some(NotificationId::new("7")));
        assert!(state.current_notification().is_none());
        assert_eq!(state.take_notification(), None);
    }
}
