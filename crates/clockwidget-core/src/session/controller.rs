//! Focus session state machine.
//!
//! The controller is wall-clock-based and holds no timers: every method
//! takes `now` explicitly, so the shell feeds real time and tests feed
//! synthetic time.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Blinking -> Idle
//! ```
//!
//! `Running -> Blinking` fires when the completion fraction reaches 0.9;
//! while Blinking the shell drives [`FocusSessionController::blink_tick`]
//! from a dedicated 300ms timer, independent of the render tick. When the
//! full duration has elapsed the session clears itself back to Idle,
//! forcing the ring visible, and reports `Event::SessionCompleted`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Interval at which the ring visibility toggles while Blinking.
pub const BLINK_INTERVAL_MS: u64 = 300;

/// Session durations are clamped to this range (minutes).
const MIN_MINUTES: u32 = 1;
const MAX_MINUTES: u32 = 250;

/// Fraction at which the ring starts blinking.
const BLINK_THRESHOLD: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Running,
    Blinking,
}

/// Countdown state machine for one focus session.
///
/// Starting a new session while one is Running or Blinking overwrites it
/// immediately; there is no explicit cancel path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusSessionController {
    state: SessionState,
    /// Wall-clock start of the current session; `None` while Idle.
    started_at: Option<DateTime<Utc>>,
    /// Session length in milliseconds; zero means no active session.
    duration_ms: u64,
    /// Ring visibility, toggled by the blink timer.
    visible: bool,
}

impl Default for FocusSessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusSessionController {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            started_at: None,
            duration_ms: 0,
            visible: true,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != SessionState::Idle && self.duration_ms > 0
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// 0.0 .. 1.0 completion of the current session; 0.0 while Idle.
    pub fn fraction(&self, now: DateTime<Utc>) -> f64 {
        if !self.is_active() {
            return 0.0;
        }
        (self.elapsed_ms(now) as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    pub fn remaining_ms(&self, now: DateTime<Utc>) -> u64 {
        if !self.is_active() {
            return 0;
        }
        self.duration_ms.saturating_sub(self.elapsed_ms(now))
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self, now: DateTime<Utc>) -> Event {
        Event::SessionSnapshot {
            state: self.state,
            fraction: self.fraction(now),
            remaining_ms: self.remaining_ms(now),
            at: now,
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start a focus session of `minutes` length at `now`.
    ///
    /// Minutes outside `[1, 250]` are clamped, not rejected. A session
    /// already in progress is overwritten with no confirmation.
    pub fn start(&mut self, minutes: u32, now: DateTime<Utc>) -> Event {
        let minutes = minutes.clamp(MIN_MINUTES, MAX_MINUTES);
        self.state = SessionState::Running;
        self.started_at = Some(now);
        self.duration_ms = u64::from(minutes) * 60 * 1000;
        self.visible = true;
        Event::SessionStarted {
            minutes,
            duration_ms: self.duration_ms,
            at: now,
        }
    }

    /// Advance the state machine from the render tick.
    ///
    /// Returns `Some(Event::BlinkStarted)` when the fraction crosses 0.9
    /// and `Some(Event::SessionCompleted)` when the session finishes.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<Event> {
        match self.state {
            SessionState::Idle => None,
            SessionState::Running => {
                if self.elapsed_ms(now) >= self.duration_ms {
                    return Some(self.complete(now));
                }
                if self.fraction(now) >= BLINK_THRESHOLD {
                    self.state = SessionState::Blinking;
                    return Some(Event::BlinkStarted { at: now });
                }
                None
            }
            SessionState::Blinking => {
                if self.elapsed_ms(now) >= self.duration_ms {
                    return Some(self.complete(now));
                }
                None
            }
        }
    }

    /// Advance from the dedicated blink timer. Toggles ring visibility
    /// every call; completes the session once the duration has elapsed.
    pub fn blink_tick(&mut self, now: DateTime<Utc>) -> Option<Event> {
        if self.state != SessionState::Blinking {
            return None;
        }
        if self.elapsed_ms(now) >= self.duration_ms {
            return Some(self.complete(now));
        }
        self.visible = !self.visible;
        Some(Event::BlinkToggled {
            visible: self.visible,
            at: now,
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn elapsed_ms(&self, now: DateTime<Utc>) -> u64 {
        match self.started_at {
            Some(start) => (now - start).num_milliseconds().max(0) as u64,
            None => 0,
        }
    }

    /// Blinking/Running -> Idle. The ring is forced visible so the fade
    /// cue in the shell starts from a drawn ring, and the session clears.
    fn complete(&mut self, now: DateTime<Utc>) -> Event {
        self.state = SessionState::Idle;
        self.started_at = None;
        self.duration_ms = 0;
        self.visible = true;
        Event::SessionCompleted { at: now }
    }
}
