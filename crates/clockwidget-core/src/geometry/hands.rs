use serde::{Deserialize, Serialize};

use super::Point;

/// A clock hand as a drawable line segment: a short tail on the far side of
/// the center, the tip at the given length, and a stroke thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandGeometry {
    pub tail: Point,
    pub tip: Point,
    pub thickness: f64,
}

/// Build the line segment for one hand.
///
/// `angle_deg` follows clock convention: 0 points up, values grow clockwise.
/// The tail extends 10% of `length` past the center on the opposite side.
///
/// Returns `None` when the face is not laid out yet (non-finite center or
/// non-positive length) so callers skip the hand instead of drawing NaNs.
pub fn hand_geometry(
    center: Point,
    length: f64,
    thickness: f64,
    angle_deg: f64,
) -> Option<HandGeometry> {
    if !center.is_finite() || !length.is_finite() || length <= 0.0 {
        return None;
    }

    // Rotate by -90 so that 0 degrees points up.
    let rad = (angle_deg - 90.0).to_radians();
    let (sin, cos) = rad.sin_cos();
    let tail_len = length * 0.1;

    Some(HandGeometry {
        tail: Point::new(center.x - cos * tail_len, center.y - sin * tail_len),
        tip: Point::new(center.x + cos * length, center.y + sin * length),
        thickness,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: Point = Point { x: 100.0, y: 100.0 };

    #[test]
    fn angle_zero_points_up() {
        let h = hand_geometry(C, 50.0, 3.0, 0.0).unwrap();
        assert!((h.tip.x - 100.0).abs() < 1e-9);
        assert!((h.tip.y - 50.0).abs() < 1e-9);
        // Tail pokes out the bottom.
        assert!((h.tail.x - 100.0).abs() < 1e-9);
        assert!((h.tail.y - 105.0).abs() < 1e-9);
    }

    #[test]
    fn angle_90_points_right() {
        let h = hand_geometry(C, 40.0, 3.0, 90.0).unwrap();
        assert!((h.tip.x - 140.0).abs() < 1e-9);
        assert!((h.tip.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn tip_is_length_from_center() {
        let h = hand_geometry(C, 37.0, 1.5, 123.0).unwrap();
        let d = ((h.tip.x - C.x).powi(2) + (h.tip.y - C.y).powi(2)).sqrt();
        assert!((d - 37.0).abs() < 1e-9);
    }

    #[test]
    fn thickness_passes_through() {
        let h = hand_geometry(C, 10.0, 4.0, 0.0).unwrap();
        assert_eq!(h.thickness, 4.0);
    }

    #[test]
    fn degenerate_inputs_are_skipped() {
        assert!(hand_geometry(Point::new(f64::NAN, 0.0), 10.0, 1.0, 0.0).is_none());
        assert!(hand_geometry(C, 0.0, 1.0, 0.0).is_none());
        assert!(hand_geometry(C, -5.0, 1.0, 0.0).is_none());
    }
}
