//! Single active gesture tracking.

use super::pointer::{PointerId, PointerPhase, PointerSample};

/// Transient state of the gesture bound to the front card.
///
/// Neutral (inactive, zero delta) outside a begin/end pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub active: bool,
    pub origin_x: f64,
    pub origin_y: f64,
    pub delta_x: f64,
    pub delta_y: f64,
}

/// Tracks at most one active pointer gesture.
///
/// The tracker makes no business decisions; it only records the origin and
/// the live displacement. Locking out input during an exit animation is the
/// caller's job (see [`Deck`](crate::deck::Deck)).
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    state: GestureState,
    pointer: Option<PointerId>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current gesture state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Pointer that owns the active gesture, if any.
    pub fn pointer(&self) -> Option<PointerId> {
        self.pointer
    }

    /// Start tracking. Returns `false` (and changes nothing) if a gesture is
    /// already active.
    pub fn begin(&mut self, pointer: PointerId, x: f64, y: f64) -> bool {
        if self.state.active {
            return false;
        }
        self.pointer = Some(pointer);
        self.state = GestureState {
            active: true,
            origin_x: x,
            origin_y: y,
            delta_x: 0.0,
            delta_y: 0.0,
        };
        true
    }

    /// Recompute the delta from the origin. Ignored when inactive or when the
    /// sample comes from a pointer other than the one that began the gesture.
    pub fn update(&mut self, pointer: PointerId, x: f64, y: f64) -> bool {
        if !self.owns(pointer) {
            return false;
        }
        self.state.delta_x = x - self.state.origin_x;
        self.state.delta_y = y - self.state.origin_y;
        true
    }

    /// Finish the gesture, returning the final `(delta_x, delta_y)`.
    ///
    /// The tracker returns to the neutral state. `None` when no gesture owned
    /// by `pointer` is active.
    pub fn end(&mut self, pointer: PointerId) -> Option<(f64, f64)> {
        if !self.owns(pointer) {
            return None;
        }
        let delta = (self.state.delta_x, self.state.delta_y);
        self.reset();
        Some(delta)
    }

    /// Drop any active gesture without producing a delta.
    pub fn reset(&mut self) {
        self.state = GestureState::default();
        self.pointer = None;
    }

    /// Route a normalized sample to begin/update/end.
    ///
    /// Returns the final delta when the sample ended the gesture.
    pub fn apply(&mut self, sample: &PointerSample) -> Option<(f64, f64)> {
        match sample.phase {
            PointerPhase::Begin => {
                self.begin(sample.pointer, sample.x, sample.y);
                None
            }
            PointerPhase::Move => {
                self.update(sample.pointer, sample.x, sample.y);
                None
            }
            PointerPhase::End => {
                // Final position counts; a release can arrive without a prior move.
                self.update(sample.pointer, sample.x, sample.y);
                self.end(sample.pointer)
            }
            PointerPhase::Cancel => {
                if self.owns(sample.pointer) {
                    self.reset();
                }
                None
            }
        }
    }

    fn owns(&self, pointer: PointerId) -> bool {
        self.state.active && self.pointer == Some(pointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_records_origin() {
        let mut tracker = GestureTracker::new();
        assert!(tracker.begin(1, 10.0, 20.0));
        let state = tracker.state();
        assert!(state.active);
        assert_eq!((state.origin_x, state.origin_y), (10.0, 20.0));
        assert_eq!((state.delta_x, state.delta_y), (0.0, 0.0));
    }

    #[test]
    fn test_begin_while_active_is_rejected() {
        let mut tracker = GestureTracker::new();
        tracker.begin(1, 0.0, 0.0);
        tracker.update(1, 30.0, 0.0);
        assert!(!tracker.begin(2, 500.0, 500.0));
        assert_eq!(tracker.pointer(), Some(1));
        assert_eq!(tracker.state().delta_x, 30.0);
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut tracker = GestureTracker::new();
        tracker.begin(1, 5.0, 5.0);
        tracker.update(1, 45.0, 10.0);
        let first = tracker.state();
        tracker.update(1, 45.0, 10.0);
        assert_eq!(first, tracker.state());
        assert_eq!((first.delta_x, first.delta_y), (40.0, 5.0));
    }

    #[test]
    fn test_update_without_gesture_is_noop() {
        let mut tracker = GestureTracker::new();
        assert!(!tracker.update(1, 99.0, 99.0));
        assert_eq!(tracker.state(), GestureState::default());
    }

    #[test]
    fn test_end_returns_delta_and_resets() {
        let mut tracker = GestureTracker::new();
        tracker.begin(1, 0.0, 0.0);
        tracker.update(1, 40.0, 5.0);
        assert_eq!(tracker.end(1), Some((40.0, 5.0)));
        assert!(!tracker.is_active());
        assert_eq!(tracker.state(), GestureState::default());
        assert_eq!(tracker.end(1), None);
    }

    #[test]
    fn test_second_pointer_is_ignored() {
        let mut tracker = GestureTracker::new();
        tracker.begin(1, 0.0, 0.0);
        assert!(!tracker.update(2, 300.0, 0.0));
        assert_eq!(tracker.end(2), None);
        assert!(tracker.is_active());
        assert_eq!(tracker.end(1), Some((0.0, 0.0)));
    }

    #[test]
    fn test_apply_release_uses_final_position() {
        let mut tracker = GestureTracker::new();
        tracker.apply(&PointerSample::new(3, PointerPhase::Begin, 100.0, 50.0));
        let delta = tracker.apply(&PointerSample::new(3, PointerPhase::End, 260.0, 40.0));
        assert_eq!(delta, Some((160.0, -10.0)));
    }

    #[test]
    fn test_apply_cancel_resets() {
        let mut tracker = GestureTracker::new();
        tracker.apply(&PointerSample::new(3, PointerPhase::Begin, 0.0, 0.0));
        tracker.apply(&PointerSample::new(3, PointerPhase::Move, 80.0, 0.0));
        tracker.apply(&PointerSample::new(3, PointerPhase::Cancel, 0.0, 0.0));
        assert!(!tracker.is_active());
        assert_eq!(tracker.state().delta_x, 0.0);
    }
}
