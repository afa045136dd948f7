use serde::{Deserialize, Serialize};

use super::{polar_point, Point};

/// Sweep for a "full" ring. A single arc segment cannot represent exactly
/// 360 degrees (start and end would coincide and the path collapses), so
/// fraction 1.0 is rendered as just under a full turn.
const MAX_SWEEP_DEG: f64 = 359.999;

/// One-segment circular arc descriptor for the focus-progress ring.
///
/// Fully determines the path for any 2D vector backend: start point, end
/// point, equal x/y radii, clockwise sweep, and the large-arc flag choosing
/// the longer of the two candidate arcs when the sweep exceeds 180 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressArcGeometry {
    pub radius: f64,
    pub start: Point,
    pub end: Point,
    pub large_arc: bool,
    pub sweep_deg: f64,
}

/// Build the progress arc for a completion fraction in `[0, 1]`.
///
/// The ring sits inside the face: arc radius is the face radius minus an
/// inset of `max(8, 8% of radius)`, floored at 2. The arc starts at 12
/// o'clock (-90 degrees) and sweeps clockwise by `fraction * 360`.
///
/// Fraction 0 yields a degenerate arc with coincident start and end points;
/// callers draw it as invisible rather than treating it as an error.
/// Returns `None` only when the face itself is degenerate.
pub fn progress_arc(
    center: Point,
    face_radius: f64,
    fraction: f64,
) -> Option<ProgressArcGeometry> {
    if !center.is_finite() || !face_radius.is_finite() || face_radius <= 0.0 {
        return None;
    }

    let inset = (face_radius * 0.08).max(8.0);
    let radius = (face_radius - inset).max(2.0);

    let fraction = fraction.clamp(0.0, 1.0);
    let sweep_deg = (fraction * 360.0).min(MAX_SWEEP_DEG);

    Some(ProgressArcGeometry {
        radius,
        start: polar_point(center, radius, -90.0),
        end: polar_point(center, radius, -90.0 + sweep_deg),
        large_arc: sweep_deg > 180.0,
        sweep_deg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const C: Point = Point { x: 105.0, y: 105.0 };

    #[test]
    fn zero_fraction_is_degenerate_but_emitted() {
        let arc = progress_arc(C, 100.0, 0.0).unwrap();
        assert_eq!(arc.start, arc.end);
        assert!(!arc.large_arc);
        assert_eq!(arc.sweep_deg, 0.0);
    }

    #[test]
    fn large_arc_flips_past_half() {
        assert!(!progress_arc(C, 100.0, 0.5).unwrap().large_arc);
        assert!(progress_arc(C, 100.0, 0.500001).unwrap().large_arc);
        assert!(progress_arc(C, 100.0, 0.9).unwrap().large_arc);
    }

    #[test]
    fn full_fraction_clamps_below_full_turn() {
        let arc = progress_arc(C, 100.0, 1.0).unwrap();
        assert!(arc.sweep_deg < 360.0);
        assert!(arc.large_arc);
        // Start and end nearly coincide but must not be equal.
        assert!(arc.start != arc.end);
    }

    #[test]
    fn inset_is_at_least_eight() {
        // 8% of 50 is 4, so the 8px floor wins.
        let arc = progress_arc(C, 50.0, 0.25).unwrap();
        assert_eq!(arc.radius, 42.0);
        // 8% of 200 is 16, above the floor.
        let arc = progress_arc(C, 200.0, 0.25).unwrap();
        assert_eq!(arc.radius, 184.0);
    }

    #[test]
    fn start_is_at_twelve_oclock() {
        let arc = progress_arc(C, 100.0, 0.3).unwrap();
        assert!((arc.start.x - C.x).abs() < 1e-9);
        assert!((arc.start.y - (C.y - arc.radius)).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_fractions_clamp() {
        let below = progress_arc(C, 100.0, -0.5).unwrap();
        assert_eq!(below.sweep_deg, 0.0);
        let above = progress_arc(C, 100.0, 1.5).unwrap();
        assert!(above.sweep_deg < 360.0);
    }

    #[test]
    fn degenerate_face_is_skipped() {
        assert!(progress_arc(Point::new(f64::NAN, 0.0), 100.0, 0.5).is_none());
        assert!(progress_arc(C, 0.0, 0.5).is_none());
    }

    proptest! {
        #[test]
        fn end_point_lies_on_the_ring(fraction in 0.0f64..1.0) {
            let arc = progress_arc(C, 100.0, fraction).unwrap();
            let d = ((arc.end.x - C.x).powi(2) + (arc.end.y - C.y).powi(2)).sqrt();
            prop_assert!((d - arc.radius).abs() < 1e-6);
        }

        #[test]
        fn large_arc_matches_fraction(fraction in 0.0f64..1.0) {
            let arc = progress_arc(C, 100.0, fraction).unwrap();
            prop_assert_eq!(arc.large_arc, fraction * 360.0 > 180.0);
        }
    }
}
