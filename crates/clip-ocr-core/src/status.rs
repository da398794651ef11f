//! Status marker states and the per-invocation state machine.
//!
//! A single marker is visible at a time. [`StatusTracker`] owns the current
//! state and only lets an invocation move `Idle -> Processing ->
//! (Success | Failure) -> Idle`.

use tracing::{debug, instrument, warn};

/// What the menu-bar marker is currently telling the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusState {
    /// Nothing shown.
    #[default]
    Idle,
    /// OCR in progress (amber).
    Processing,
    /// Text copied to the clipboard (green).
    Success,
    /// No image, request failed or no text came back (red).
    Failure,
}

impl StatusState {
    /// Success and Failure end an invocation.
    pub fn is_terminal(self) -> bool {
        matches!(self, StatusState::Success | StatusState::Failure)
    }

    fn can_transition_to(self, next: StatusState) -> bool {
        matches!(
            (self, next),
            (StatusState::Idle, StatusState::Processing)
                | (StatusState::Processing, StatusState::Success)
                | (StatusState::Processing, StatusState::Failure)
        )
    }
}

/// Platform marker in the menu bar.
pub trait StatusIndicator: Send {
    /// Replace whatever marker is visible with one for `state`.
    ///
    /// `show(StatusState::Idle)` behaves like [`StatusIndicator::clear`].
    fn show(&mut self, state: StatusState);

    /// Remove the marker. Must be a no-op when nothing is shown.
    fn clear(&mut self);
}

/// Owns the indicator and the state it currently displays.
#[derive(Debug)]
pub struct StatusTracker<S> {
    indicator: S,
    current: StatusState,
}

impl<S: StatusIndicator> StatusTracker<S> {
    /// Tracker starting in [`StatusState::Idle`].
    pub fn new(indicator: S) -> Self {
        Self {
            indicator,
            current: StatusState::Idle,
        }
    }

    /// State currently displayed.
    pub fn current(&self) -> StatusState {
        self.current
    }

    /// The wrapped indicator.
    pub fn indicator(&self) -> &S {
        &self.indicator
    }

    /// Move to `next` and show it. Illegal transitions are logged and ignored.
    ///
    /// Returns whether the transition was applied.
    #[instrument(skip(self))]
    pub fn transition(&mut self, next: StatusState) -> bool {
        if !self.current.can_transition_to(next) {
            warn!(current = ?self.current, next = ?next, "Ignoring illegal status transition");
            return false;
        }

        self.indicator.show(next);
        debug!(from = ?self.current, to = ?next, "Status changed");
        self.current = next;
        true
    }

    /// Clear the marker and return to Idle. Safe from any state.
    pub fn reset(&mut self) {
        self.indicator.clear();
        self.current = StatusState::Idle;
    }
}
