//! Swipe classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default minimum horizontal displacement for a release to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 100.0;

/// Direction of a decided swipe. `Left` passes the card, `Right` saves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }

    /// Sign of the horizontal motion for this direction.
    pub fn sign(&self) -> f64 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a released gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Swipe(SwipeDirection),
    /// Below threshold: the card snaps back and nothing changes.
    SnapBack,
}

impl SwipeOutcome {
    pub fn direction(&self) -> Option<SwipeDirection> {
        match self {
            SwipeOutcome::Swipe(direction) => Some(*direction),
            SwipeOutcome::SnapBack => None,
        }
    }
}

/// Classify a horizontal displacement against `threshold`.
///
/// Strictly greater than the threshold is required; `|delta_x| == threshold`
/// snaps back.
pub fn classify(delta_x: f64, threshold: f64) -> SwipeOutcome {
    if delta_x.abs() > threshold {
        if delta_x > 0.0 {
            SwipeOutcome::Swipe(SwipeDirection::Right)
        } else {
            SwipeOutcome::Swipe(SwipeDirection::Left)
        }
    } else {
        SwipeOutcome::SnapBack
    }
}

/// Visual tilt for a drag, in degrees. Presentation only.
pub fn rotation_degrees(delta_x: f64, divisor: f64, max_degrees: f64) -> f64 {
    if divisor == 0.0 {
        return 0.0;
    }
    (delta_x / divisor).clamp(-max_degrees, max_degrees)
}
