use std::time::Instant;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TimerState {
    Armed,
    Fired,
    Cancelled,
}

/// A one-shot, cancellable hide timer driven by caller-supplied time.
#[derive(Debug, Clone)]
pub struct HideTimer {
    deadline: Instant,
    state: TimerState,
}

impl HideTimer {
    pub fn arm(deadline: Instant) -> Self {
        Self {
            deadline,
            state: TimerState::Armed,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.state == TimerState::Armed
    }

    /// No-op unless still armed.
    pub fn cancel(&mut self) {
        if self.state == TimerState::Armed {
            self.state = TimerState::Cancelled;
        }
    }

    /// Fires the timer if it is armed and `now` has reached the deadline.
    /// Returns whether it fired on this call.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.state == TimerState::Armed && now >= self.deadline {
            self.state = TimerState::Fired;
            return true;
        }
        false
    }
}
