//! Exit animation state for the departing card.
//!
//! The controller is a two-state machine, `Idle -> Leaving -> Idle`. Entering
//! `Leaving` arms a single deadline; the event loop polls [`LeavingController::poll`]
//! on its tick and the controller hands back the finished [`LeavingState`]
//! exactly once when the deadline has passed. There is never more than one
//! pending deadline.

use std::time::{Duration, Instant};

use crate::gesture::SwipeDirection;

/// Default duration of the exit animation.
pub const DEFAULT_EXIT_DELAY: Duration = Duration::from_millis(300);

/// The card currently animating off-stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeavingState {
    pub card_id: String,
    pub direction: SwipeDirection,
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Leaving {
        state: LeavingState,
        started_at: Instant,
        deadline: Instant,
    },
}

/// Owns the exit animation and gates input while it runs.
#[derive(Debug, Clone)]
pub struct LeavingController {
    phase: Phase,
    exit_delay: Duration,
}

impl Default for LeavingController {
    fn default() -> Self {
        Self::new(DEFAULT_EXIT_DELAY)
    }
}

impl LeavingController {
    pub fn new(exit_delay: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            exit_delay,
        }
    }

    pub fn exit_delay(&self) -> Duration {
        self.exit_delay
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub fn is_leaving(&self) -> bool {
        !self.is_idle()
    }

    /// The pending exit, if any.
    pub fn current(&self) -> Option<&LeavingState> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Leaving { state, .. } => Some(state),
        }
    }

    /// When the pending exit completes.
    pub fn deadline(&self) -> Option<Instant> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Leaving { deadline, .. } => Some(*deadline),
        }
    }

    /// Start the exit animation for `card_id`.
    ///
    /// Returns `false` without touching the pending exit if one is already
    /// running; a second deadline is never armed.
    pub fn start(&mut self, card_id: &str, direction: SwipeDirection, now: Instant) -> bool {
        if self.is_leaving() {
            return false;
        }
        self.phase = Phase::Leaving {
            state: LeavingState {
                card_id: card_id.to_string(),
                direction,
            },
            started_at: now,
            deadline: now + self.exit_delay,
        };
        true
    }

    /// Fraction of the exit animation elapsed at `now`, in `[0.0, 1.0]`.
    /// `None` while idle.
    pub fn progress(&self, now: Instant) -> Option<f64> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Leaving { started_at, .. } => {
                if self.exit_delay.is_zero() {
                    return Some(1.0);
                }
                let elapsed = now.saturating_duration_since(*started_at);
                Some((elapsed.as_secs_f64() / self.exit_delay.as_secs_f64()).min(1.0))
            }
        }
    }

    /// Complete the exit if its deadline has passed.
    ///
    /// This is the only `Leaving -> Idle` transition. It returns the finished
    /// state once; later polls return `None` until a new exit starts.
    pub fn poll(&mut self, now: Instant) -> Option<LeavingState> {
        let due = match &self.phase {
            Phase::Idle => return None,
            Phase::Leaving { deadline, .. } => now >= *deadline,
        };
        if !due {
            return None;
        }
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Leaving { state, .. } => Some(state),
            Phase::Idle => None,
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
    fn test_starts_idle() {
        let controller = LeavingController::default();
        assert!(controller.is_idle());
        assert!(controller.current().is_none());
        assert_eq!(controller.exit_delay(), ms(300));
    }

    #[test]
    fn test_start_enters_leaving() {
        let now = Instant::now();
        let mut controller = LeavingController::new(ms(300));
        assert!(controller.start("c1", SwipeDirection::Right, now));
        assert!(controller.is_leaving());
        assert_eq!(
            controller.current(),
            Some(&LeavingState {
                card_id: "c1".to_string(),
                direction: SwipeDirection::Right
            })
        );
        assert_eq!(controller.deadline(), Some(now + ms(300)));
    }

    #[test]
    fn test_second_start_is_rejected() {
        let now = Instant::now();
        let mut controller = LeavingController::new(ms(300));
        controller.start("c1", SwipeDirection::Left, now);
        assert!(!controller.start("c2", SwipeDirection::Right, now + ms(10)));
        assert_eq!(controller.current().unwrap().card_id, "c1");
        assert_eq!(controller.deadline(), Some(now + ms(300)));
    }

    #[test]
    fn test_poll_before_deadline_keeps_leaving() {
        let now = Instant::now();
        let mut controller = LeavingController::new(ms(300));
        controller.start("c1", SwipeDirection::Left, now);
        assert!(controller.poll(now + ms(299)).is_none());
        assert!(controller.is_leaving());
    }

    #[test]
    fn test_poll_at_deadline_completes_once() {
        let now = Instant::now();
        let mut controller = LeavingController::new(ms(300));
        controller.start("c1", SwipeDirection::Left, now);

        let done = controller.poll(now + ms(300)).unwrap();
        assert_eq!(done.card_id, "c1");
        assert_eq!(done.direction, SwipeDirection::Left);
        assert!(controller.is_idle());
        assert!(controller.poll(now + ms(600)).is_none());
    }

    #[test]
    fn test_progress() {
        let now = Instant::now();
        let mut controller = LeavingController::new(ms(200));
        assert_eq!(controller.progress(now), None);
        controller.start("c1", SwipeDirection::Right, now);
        assert_eq!(controller.progress(now), Some(0.0));
        assert_eq!(controller.progress(now + ms(100)), Some(0.5));
        assert_eq!(controller.progress(now + ms(900)), Some(1.0));
    }

    #[test]
    fn test_zero_delay_completes_immediately() {
        let now = Instant::now();
        let mut controller = LeavingController::new(Duration::ZERO);
        controller.start("c1", SwipeDirection::Right, now);
        assert_eq!(controller.progress(now), Some(1.0));
        assert!(controller.poll(now).is_some());
    }
}
