//! Per-submission state machine and the single-slot in-flight marker.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::AppError;

/// Lifecycle of one form submission.
///
/// `Idle → Building → Sent → Rendering → Rendered`, or `Sent → Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Building,
    Sent,
    Rendering,
    Rendered,
    Failed,
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Rendered | SubmissionState::Failed)
    }

    fn allows(&self, next: SubmissionState) -> bool {
        use SubmissionState::*;
        matches!(
            (self, next),
            (Idle, Building)
                | (Building, Sent)
                | (Sent, Rendering)
                | (Sent, Failed)
                | (Rendering, Rendered)
                | (Rendering, Failed)
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Building => "building",
            SubmissionState::Sent => "sent",
            SubmissionState::Rendering => "rendering",
            SubmissionState::Rendered => "rendered",
            SubmissionState::Failed => "failed",
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State tracker for a single submission.
#[derive(Debug)]
pub struct Submission {
    state: SubmissionState,
}

impl Default for Submission {
    fn default() -> Self {
        Self::new()
    }
}

impl Submission {
    pub fn new() -> Self {
        Self { state: SubmissionState::Idle }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Move to `next`, rejecting transitions outside the lifecycle.
    pub fn advance(&mut self, next: SubmissionState) -> Result<(), AppError> {
        if !self.state.allows(next) {
            return Err(AppError::InvalidTransition { from: self.state, to: next });
        }
        tracing::debug!(from = %self.state, to = %next, "submission state");
        self.state = next;
        Ok(())
    }
}

/// Busy/idle marker gating new submissions until the prior one resolves.
#[derive(Debug, Default)]
pub struct InFlightGuard {
    busy: AtomicBool,
}

impl InFlightGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot, or fail if a submission is already in flight.
    pub fn acquire(&self) -> Result<InFlightSlot<'_>, AppError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::SubmissionInFlight)?;
        Ok(InFlightSlot { guard: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Held while a submission is in flight; releases the slot on drop.
#[derive(Debug)]
pub struct InFlightSlot<'a> {
    guard: &'a InFlightGuard,
}

impl Drop for InFlightSlot<'_> {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_path_reaches_rendered() {
        let mut submission = Submission::new();
        for next in [
            SubmissionState::Building,
            SubmissionState::Sent,
            SubmissionState::Rendering,
            SubmissionState::Rendered,
        ] {
            submission.advance(next).unwrap();
        }
        assert!(submission.state().is_terminal());
    }

    #[test]
    fn failure_path_reaches_failed() {
        let mut submission = Submission::new();
        submission.advance(SubmissionState::Building).unwrap();
        submission.advance(SubmissionState::Sent).unwrap();
        submission.advance(SubmissionState::Failed).unwrap();
        assert_eq!(submission.state(), SubmissionState::Failed);
    }

    #[test]
    fn terminal_states_do_not_return_to_idle() {
        let mut submission = Submission::new();
        submission.advance(SubmissionState::Building).unwrap();
        submission.advance(SubmissionState::Sent).unwrap();
        submission.advance(SubmissionState::Failed).unwrap();

        let err = submission.advance(SubmissionState::Idle).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidTransition { from: SubmissionState::Failed, to: SubmissionState::Idle }
        ));
    }

    #[test]
    fn skipping_the_send_is_rejected() {
        let mut submission = Submission::new();
        submission.advance(SubmissionState::Building).unwrap();
        assert!(submission.advance(SubmissionState::Rendering).is_err());
        assert_eq!(submission.state(), SubmissionState::Building);
    }

    #[test]
    fn guard_admits_one_submission_at_a_time() {
        let guard = InFlightGuard::new();
        let slot = guard.acquire().unwrap();
        assert!(guard.is_busy());
        assert!(matches!(guard.acquire(), Err(AppError::SubmissionInFlight)));

        drop(slot);
        assert!(!guard.is_busy());
        assert!(guard.acquire().is_ok());
    }
}
