//! Pointer and touch normalization.
//!
//! Both event families are reduced to a single [`PointerSample`] carrying
//! absolute coordinates in px-equivalent units before they reach the
//! [`GestureTracker`](super::GestureTracker). Terminal mouse events arrive in
//! cells and are scaled by [`CellScale`]; touch lists collapse to their first
//! reported point.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Identifier of the pointer (or touch point) that produced a sample.
pub type PointerId = u64;

/// Pointer id used for the terminal mouse.
pub const MOUSE_POINTER_ID: PointerId = 0;

/// Phase of a pointer sample within a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Begin,
    Move,
    End,
    Cancel,
}

/// A normalized pointer sample in px-equivalent units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub pointer: PointerId,
    pub phase: PointerPhase,
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub fn new(pointer: PointerId, phase: PointerPhase, x: f64, y: f64) -> Self {
        Self {
            pointer,
            phase,
            x,
            y,
        }
    }

    /// Normalize a crossterm mouse event.
    ///
    /// Only the primary button participates in gestures: `Down(Left)` begins,
    /// `Drag(Left)` moves and `Up(Left)` ends. Everything else (hover, scroll,
    /// other buttons) yields `None`.
    pub fn from_mouse(event: &MouseEvent, scale: CellScale) -> Option<Self> {
        let phase = match event.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerPhase::Begin,
            MouseEventKind::Drag(MouseButton::Left) => PointerPhase::Move,
            MouseEventKind::Up(MouseButton::Left) => PointerPhase::End,
            _ => return None,
        };
        let (x, y) = scale.to_units(event.column, event.row);
        Some(Self::new(MOUSE_POINTER_ID, phase, x, y))
    }

    /// Normalize a touch event carrying every active touch point.
    ///
    /// Multiple simultaneous touches collapse to the first reported point.
    /// An empty list yields `None`.
    pub fn from_touches(phase: PointerPhase, touches: &[TouchPoint]) -> Option<Self> {
        touches
            .first()
            .map(|touch| Self::new(touch.id, phase, touch.x, touch.y))
    }
}

/// A single touch point as reported by a touch-capable host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub id: PointerId,
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(id: PointerId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// Size of one terminal cell in px-equivalent units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScale {
    pub width: f64,
    pub height: f64,
}

impl Default for CellScale {
    fn default() -> Self {
        Self {
            width: 8.0,
            height: 16.0,
        }
    }
}

impl CellScale {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Convert a cell position into px-equivalent units.
    pub fn to_units(&self, column: u16, row: u16) -> (f64, f64) {
        (f64::from(column) * self.width, f64::from(row) * self.height)
    }

    /// Convert a horizontal distance in units back to whole cells.
    pub fn columns_for(&self, units: f64) -> i32 {
        if self.width <= 0.0 {
            return 0;
        }
        (units / self.width).round() as i32
    }
}
