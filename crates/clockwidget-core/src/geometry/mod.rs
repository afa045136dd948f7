//! Pure clock-face geometry: hand angles, hand line segments, and the
//! focus-progress arc descriptor. Everything here is a function of its
//! inputs; degenerate inputs yield `None` rather than NaN coordinates.

mod angles;
mod arc;
mod hands;

pub use angles::HandAngles;
pub use arc::{progress_arc, ProgressArcGeometry};
pub use hands::{hand_geometry, HandGeometry};

use serde::{Deserialize, Serialize};

/// A point in widget-local coordinates (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Point on the circle of radius `r` around `center`, at `deg` degrees.
/// 0 degrees points right (+x); angles grow clockwise in screen space.
pub fn polar_point(center: Point, r: f64, deg: f64) -> Point {
    let rad = deg.to_radians();
    Point::new(center.x + rad.cos() * r, center.y + rad.sin() * r)
}
