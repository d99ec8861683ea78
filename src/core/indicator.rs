//! "Copied!" feedback with a deadline-based reset.
//!
//! The reset is a deadline stored next to the state rather than a detached timer. A
//! new copy replaces the deadline, which cancels the reset scheduled by the previous one.
//! Callers pass `now` explicitly so the behaviour is testable without sleeping.

use std::time::{Duration, Instant};

/// Default window during which the copy trigger reads "Copied!".
pub const DEFAULT_COPY_FEEDBACK: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    Idle,
    Copied,
    /// Both clipboard mechanisms failed.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Copied { reset_at: Instant },
    Failed { reset_at: Instant },
}

#[derive(Debug, Clone)]
pub struct CopyIndicator {
    window: Duration,
    pending: Option<Pending>,
}

impl Default for CopyIndicator {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_FEEDBACK)
    }
}

impl CopyIndicator {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record a successful copy at `now`. Any pending reset is replaced.
    pub fn mark_copied(&mut self, now: Instant) {
        self.pending = Some(Pending::Copied {
            reset_at: now + self.window,
        });
    }

    /// Record a failed copy at `now`.
    pub fn mark_failed(&mut self, now: Instant) {
        self.pending = Some(Pending::Failed {
            reset_at: now + self.window,
        });
    }

    /// Drop any pending state immediately.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn status(&self, now: Instant) -> CopyStatus {
        match self.pending {
            Some(Pending::Copied { reset_at }) if now < reset_at => CopyStatus::Copied,
            Some(Pending::Failed { reset_at }) if now < reset_at => CopyStatus::Failed,
            _ => CopyStatus::Idle,
        }
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.status(now) == CopyStatus::Copied
    }

    /// Run the reset if its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.pending.is_some() && self.status(now) == CopyStatus::Idle {
            self.pending = None;
        }
    }

    /// Caption for the copy trigger.
    pub fn label(&self, now: Instant) -> &'static str {
        match self.status(now) {
            CopyStatus::Idle => "Copy to Clipboard",
            CopyStatus::Copied => "Copied!",
            CopyStatus::Failed => "Copy failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn idle_by_default() {
        let ind = CopyIndicator::default();
        assert_eq!(ind.status(Instant::now()), CopyStatus::Idle);
        assert_eq!(ind.label(Instant::now()), "Copy to Clipboard");
        assert_eq!(ind.window, ms(2000));
    }

    #[test]
    fn copied_immediately_then_resets_after_window() {
        let t0 = Instant::now();
        let mut ind = CopyIndicator::default();
        ind.mark_copied(t0);
        assert!(ind.is_copied(t0));
        assert!(ind.is_copied(t0 + ms(1999)));
        assert_eq!(ind.label(t0), "Copied!");
        assert!(!ind.is_copied(t0 + ms(2000)));
        assert!(!ind.is_copied(t0 + ms(5000)));
    }

    #[test]
    fn second_copy_cancels_pending_reset() {
        let t0 = Instant::now();
        let mut ind = CopyIndicator::default();
        ind.mark_copied(t0);
        ind.mark_copied(t0 + ms(1500));
        // The first copy's reset at t0+2000 no longer applies.
        assert!(ind.is_copied(t0 + ms(2500)));
        assert!(!ind.is_copied(t0 + ms(3500)));
    }

    #[test]
    fn tick_clears_expired_state() {
        let t0 = Instant::now();
        let mut ind = CopyIndicator::new(ms(100));
        ind.mark_copied(t0);
        ind.tick(t0 + ms(50));
        assert!(ind.is_copied(t0 + ms(50)));
        ind.tick(t0 + ms(100));
        assert_eq!(ind.pending, None);
    }

    #[test]
    fn failure_is_shown_then_cleared() {
        let t0 = Instant::now();
        let mut ind = CopyIndicator::default();
        ind.mark_failed(t0);
        assert_eq!(ind.status(t0), CopyStatus::Failed);
        assert!(!ind.is_copied(t0));
        assert_eq!(ind.label(t0), "Copy failed");
        assert_eq!(ind.status(t0 + ms(2000)), CopyStatus::Idle);
    }

    #[test]
    fn success_after_failure_replaces_it() {
        let t0 = Instant::now();
        let mut ind = CopyIndicator::default();
        ind.mark_failed(t0);
        ind.mark_copied(t0 + ms(10));
        assert!(ind.is_copied(t0 + ms(10)));
    }

    #[test]
    fn cancel_drops_state() {
        let t0 = Instant::now();
        let mut ind = CopyIndicator::default();
        ind.mark_copied(t0);
        ind.cancel();
        assert!(!ind.is_copied(t0));
    }
}
