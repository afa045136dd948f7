//! Keeps the widget fully on the virtual screen.
//!
//! Invoked by the shell on every window move or resize; the rule set is
//! pure and idempotent so it can also run defensively after a size change.

use serde::{Deserialize, Serialize};

/// Window rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Virtual screen bounds, origin at (0, 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: f64,
    pub height: f64,
}

/// Clamp a window rectangle so it stays fully visible.
///
/// Rules apply in order: negative left/top snap to 0, then the right and
/// bottom edges are pulled back inside the bounds. Returns the adjusted
/// `(left, top)`; width and height are never changed.
pub fn clamp_to_screen(rect: Rect, bounds: ScreenBounds) -> (f64, f64) {
    let mut left = rect.left;
    let mut top = rect.top;

    if left < 0.0 {
        left = 0.0;
    }
    if top < 0.0 {
        top = 0.0;
    }
    if left + rect.width > bounds.width {
        left = bounds.width - rect.width;
    }
    if top + rect.height > bounds.height {
        top = bounds.height - rect.height;
    }

    (left, top)
}
