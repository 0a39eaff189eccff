use crate::tooltip::{HideTimer, PopupSurface};
use std::time::{Duration, Instant};

/// How long the popup lingers after the pointer leaves its bucket.
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TooltipState {
    Hidden,
    Visible { bucket: usize },
    PendingHide { bucket: usize, deadline: Instant },
}

/// Hover state machine for one rendered histogram.
///
/// Entering a bucket always shows its popup immediately and cancels any
/// pending hide. Leaving the shown bucket arms a single hide timer; time only
/// moves when the owner calls [`TooltipController::advance`].
#[derive(Debug, Clone)]
pub struct TooltipController {
    // state machine data
    state: TooltipState,
    hide_delay: Duration,

    // PendingHide
    timer: Option<HideTimer>,
}

impl Default for TooltipController {
    fn default() -> Self {
        Self::new(DEFAULT_HIDE_DELAY)
    }
}

impl TooltipController {
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            state: TooltipState::Hidden,
            hide_delay,
            timer: None,
        }
    }

    pub fn state(&self) -> TooltipState {
        self.state
    }

    pub fn hide_delay(&self) -> Duration {
        self.hide_delay
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.state, TooltipState::Hidden)
    }

    /// Bucket whose content the popup currently shows, if any.
    pub fn active_bucket(&self) -> Option<usize> {
        match self.state {
            TooltipState::Hidden => None,
            TooltipState::Visible { bucket } | TooltipState::PendingHide { bucket, .. } => {
                Some(bucket)
            }
        }
    }

    /// Deadline of the outstanding hide timer, for drivers that sleep on it.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer
            .as_ref()
            .filter(|t| t.is_armed())
            .map(HideTimer::deadline)
    }

    pub fn pointer_enter(
        &mut self,
        bucket: usize,
        entries: &[String],
        surface: &mut impl PopupSurface,
    ) {
        self.cancel_pending();
        surface.show_popup(entries);
        self.state = TooltipState::Visible { bucket };
        tracing::debug!(bucket, entries = entries.len(), "popup shown");
    }

    pub fn pointer_leave(&mut self, bucket: usize, now: Instant) {
        match self.state {
            TooltipState::Visible { bucket: shown } if shown == bucket => {
                let deadline = now + self.hide_delay;
                self.timer = Some(HideTimer::arm(deadline));
                self.state = TooltipState::PendingHide { bucket, deadline };
                tracing::debug!(bucket, delay_ms = self.hide_delay.as_millis() as u64, "hide scheduled");
            }

            // Leaving a bucket other than the one shown, or leaving twice,
            // must not disturb the current popup or its timer.
            _ => {
                tracing::trace!(bucket, state = ?self.state, "pointer leave ignored");
            }
        }
    }

    /// Moves virtual time to `now`, hiding the popup if the timer is due.
    /// Returns whether the popup was hidden by this call.
    pub fn advance(&mut self, now: Instant, surface: &mut impl PopupSurface) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };

        if !timer.poll(now) {
            return false;
        }

        self.timer = None;
        self.state = TooltipState::Hidden;
        surface.hide_popup();
        tracing::debug!("popup hidden");
        true
    }

    /// Cancels the outstanding hide timer, if any. Safe to call repeatedly.
    pub fn cancel_pending(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        if let TooltipState::PendingHide { bucket, .. } = self.state {
            self.state = TooltipState::Visible { bucket };
        }
    }
}
