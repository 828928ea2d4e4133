//! Displayed transform of the front card.
//!
//! The transform is re-derived from explicit inputs on every frame: the gesture
//! state while dragging, or the leaving direction and progress while the card
//! animates off-stage. Nothing here holds state between frames.

use super::decision::{rotation_degrees, SwipeDirection};
use super::tracker::GestureState;

/// Translation (px-equivalent units) and tilt (degrees) applied to a card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub rotation_deg: f64,
}

impl CardTransform {
    /// The rest position.
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Transform for a live drag. Inactive gestures yield the identity.
    pub fn from_gesture(state: &GestureState, tilt_divisor: f64, max_tilt: f64) -> Self {
        if !state.active {
            return Self::identity();
        }
        Self {
            offset_x: state.delta_x,
            offset_y: state.delta_y,
            rotation_deg: rotation_degrees(state.delta_x, tilt_divisor, max_tilt),
        }
    }

    /// Transform for a card leaving the stage.
    ///
    /// `progress` runs from 0.0 (exit decided) to 1.0 (fully off-stage);
    /// `travel` is the horizontal distance to clear the stage.
    pub fn leaving(direction: SwipeDirection, progress: f64, travel: f64, max_tilt: f64) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        Self {
            offset_x: direction.sign() * travel * progress,
            offset_y: 0.0,
            rotation_deg: direction.sign() * max_tilt * progress,
        }
    }
}
