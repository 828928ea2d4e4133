//! Swipe feedback sink abstraction.

use crate::gesture::SwipeDirection;

/// Fire-and-forget recorder of swipe decisions.
///
/// Calls must return immediately; any I/O happens in the background and
/// failures are logged, never reported back.
pub trait FeedbackSink: Send + Sync {
    fn record_feedback(&self, card_id: &str, direction: SwipeDirection);
}
