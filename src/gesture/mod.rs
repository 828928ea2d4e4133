//! Gesture recognition for the front card.
//!
//! Raw input flows through three stages:
//!
//! - [`pointer`] - normalizes mouse and touch events into [`PointerSample`]s
//! - [`tracker`] - [`GestureTracker`] turns samples into a live displacement
//! - [`decision`] - classifies a released displacement as a swipe or a snap back
//!
//! [`transform`] derives the displayed card transform from the gesture state
//! (or from the leaving animation) so renderers never read gesture internals.

pub mod decision;
pub mod pointer;
pub mod tracker;
pub mod transform;

pub use decision::{classify, rotation_degrees, SwipeDirection, SwipeOutcome};
pub use pointer::{CellScale, PointerId, PointerPhase, PointerSample, TouchPoint};
pub use tracker::{GestureState, GestureTracker};
pub use transform::CardTransform;
