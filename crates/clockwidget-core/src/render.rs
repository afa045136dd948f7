//! Per-frame render driver.
//!
//! The host delivers a frame signal (requestAnimationFrame in the webview,
//! ~60 Hz) and the current time; [`RenderEngine::frame`] derives everything
//! the face needs for that frame and returns it as one consolidated
//! [`FrameUpdate`]. The engine owns the face layout and the focus session
//! controller; the shell serializes access through a mutex so state only
//! changes between frames, never inside one.

use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::geometry::{hand_geometry, progress_arc, polar_point};
use crate::geometry::{HandAngles, HandGeometry, Point, ProgressArcGeometry};
use crate::session::FocusSessionController;

// Hand lengths as fractions of the face radius, and stroke thicknesses.
const HOUR_LEN: f64 = 0.55;
const MINUTE_LEN: f64 = 0.75;
const SECOND_LEN: f64 = 0.85;
const HOUR_THICKNESS: f64 = 4.0;
const MINUTE_THICKNESS: f64 = 3.0;
const SECOND_THICKNESS: f64 = 1.5;

/// Face layout derived from the current widget size. Recomputed whenever
/// the size changes, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockFaceState {
    /// Current square dimension in pixels.
    pub size: f64,
    pub center: Point,
    /// Outer radius: half the size minus a 2px inset.
    pub radius: f64,
}

impl ClockFaceState {
    pub fn from_size(size: f64) -> Self {
        Self {
            size,
            center: Point::new(size / 2.0, size / 2.0),
            radius: size / 2.0 - 2.0,
        }
    }
}

/// The center cap circle drawn over the hand pivots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterCap {
    pub center: Point,
    pub radius: f64,
}

/// Everything the drawing layer needs for one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameUpdate {
    /// 12-hour clock text, e.g. `"09 : 41"`.
    pub time_text: String,
    pub angles: HandAngles,
    pub hour_hand: Option<HandGeometry>,
    pub minute_hand: Option<HandGeometry>,
    pub second_hand: Option<HandGeometry>,
    pub center_cap: CenterCap,
    /// Anchor for the date/time label, placed opposite the hour hand.
    pub label_anchor: Point,
    /// Progress ring for the active focus session, if any.
    pub progress: Option<ProgressArcGeometry>,
    /// Ring visibility; toggles while the session is blinking.
    pub progress_visible: bool,
    /// Session transition that happened during this frame, if any.
    pub event: Option<Event>,
}

/// Per-frame orchestrator: face layout plus the focus session controller.
#[derive(Debug, Clone)]
pub struct RenderEngine {
    face: ClockFaceState,
    session: FocusSessionController,
}

impl RenderEngine {
    pub fn new(size_px: f64) -> Self {
        Self {
            face: ClockFaceState::from_size(size_px),
            session: FocusSessionController::new(),
        }
    }

    pub fn face(&self) -> ClockFaceState {
        self.face
    }

    pub fn session(&self) -> &FocusSessionController {
        &self.session
    }

    /// Explicit size-then-layout: callers set the size and the face state
    /// is recomputed here, with no change notification graph in between.
    pub fn set_size_px(&mut self, size_px: f64) {
        self.face = ClockFaceState::from_size(size_px);
    }

    /// Start (or overwrite) a focus session.
    pub fn start_focus(&mut self, minutes: u32, now: DateTime<chrono::Utc>) -> Event {
        self.session.start(minutes, now)
    }

    /// Forwarded from the shell's 300ms blink timer.
    pub fn blink_tick(&mut self, now: DateTime<chrono::Utc>) -> Option<Event> {
        self.session.blink_tick(now)
    }

    /// Compute one frame. Bounded work: three hands, one cap, one label
    /// anchor, and (while a session is active) one arc plus a session tick.
    pub fn frame(&mut self, now: DateTime<Local>) -> FrameUpdate {
        let face = self.face;
        let time = now.time();
        let angles = HandAngles::at(time);

        let hour_hand = hand_geometry(
            face.center,
            face.radius * HOUR_LEN,
            HOUR_THICKNESS,
            angles.hour_deg,
        );
        let minute_hand = hand_geometry(
            face.center,
            face.radius * MINUTE_LEN,
            MINUTE_THICKNESS,
            angles.minute_deg,
        );
        let second_hand = hand_geometry(
            face.center,
            face.radius * SECOND_LEN,
            SECOND_THICKNESS,
            angles.second_deg,
        );

        let center_cap = CenterCap {
            center: face.center,
            radius: (face.radius * 0.04).max(4.0),
        };

        // Flip the hour angle to place the label on the far side of the face.
        let label_deg = (angles.hour_deg + 180.0) % 360.0;
        let label_anchor = polar_point(face.center, face.radius * 0.6, label_deg);

        let now_utc = now.with_timezone(&chrono::Utc);
        let event = self.session.tick(now_utc);
        let progress = if self.session.is_active() {
            progress_arc(face.center, face.radius, self.session.fraction(now_utc))
        } else {
            None
        };

        FrameUpdate {
            time_text: format!("{:02} : {:02}", hour12(time.hour()), time.minute()),
            angles,
            hour_hand,
            minute_hand,
            second_hand,
            center_cap,
            label_anchor,
            progress,
            progress_visible: self.session.visible(),
            event,
        }
    }
}

fn hour12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 1, h, m, s).unwrap()
    }

    #[test]
    fn face_layout_from_size() {
        let face = ClockFaceState::from_size(210.0);
        assert_eq!(face.center, Point::new(105.0, 105.0));
        assert_eq!(face.radius, 103.0);
    }

    #[test]
    fn frame_emits_all_three_hands() {
        let mut engine = RenderEngine::new(210.0);
        let update = engine.frame(local(10, 30, 15));
        assert!(update.hour_hand.is_some());
        assert!(update.minute_hand.is_some());
        assert!(update.second_hand.is_some());
        assert!(update.progress.is_none());
    }

    #[test]
    fn zero_size_face_skips_hands_without_panicking() {
        let mut engine = RenderEngine::new(0.0);
        let update = engine.frame(local(10, 30, 15));
        assert!(update.hour_hand.is_none());
        assert!(update.minute_hand.is_none());
        assert!(update.second_hand.is_none());
    }

    #[test]
    fn time_text_is_twelve_hour() {
        let mut engine = RenderEngine::new(210.0);
        assert_eq!(engine.frame(local(15, 5, 0)).time_text, "03 : 05");
        assert_eq!(engine.frame(local(0, 9, 0)).time_text, "12 : 09");
    }

    #[test]
    fn label_anchor_sits_opposite_the_hour_hand() {
        let mut engine = RenderEngine::new(210.0);
        let update = engine.frame(local(12, 0, 0));
        let face = engine.face();
        // Hour angle 0 -> label at 180 degrees on the polar circle.
        let expected = polar_point(face.center, face.radius * 0.6, 180.0);
        assert!((update.label_anchor.x - expected.x).abs() < 1e-6);
        assert!((update.label_anchor.y - expected.y).abs() < 1e-6);
    }

    #[test]
    fn center_cap_has_minimum_radius() {
        let mut engine = RenderEngine::new(90.0);
        let update = engine.frame(local(1, 0, 0));
        // 4% of radius 43 is 1.72, so the 4px floor wins.
        assert_eq!(update.center_cap.radius, 4.0);
    }

    #[test]
    fn active_session_adds_progress_arc() {
        let mut engine = RenderEngine::new(210.0);
        let now = local(9, 0, 0);
        engine.start_focus(25, now.with_timezone(&chrono::Utc));
        let update = engine.frame(now);
        let arc = update.progress.expect("arc while session active");
        assert_eq!(arc.sweep_deg, 0.0);
        assert!(update.progress_visible);
    }

    #[test]
    fn resize_recomputes_layout() {
        let mut engine = RenderEngine::new(210.0);
        engine.set_size_px(90.0);
        assert_eq!(engine.face().size, 90.0);
        assert_eq!(engine.face().center, Point::new(45.0, 45.0));
    }
}
