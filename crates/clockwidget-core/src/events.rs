use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::SessionState;

/// Every session state change produces an Event.
/// The GUI polls for events via the frame command; the shell reacts to the
/// blink/completion transitions (starting and stopping the 300ms blink timer).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A focus session started (or overwrote the one in progress).
    SessionStarted {
        minutes: u32,
        duration_ms: u64,
        at: DateTime<Utc>,
    },
    /// Completion fraction crossed 0.9; the countdown ring should blink
    /// until the session ends. The shell starts the blink timer on this.
    BlinkStarted { at: DateTime<Utc> },
    /// Blink timer fired and flipped ring visibility.
    BlinkToggled { visible: bool, at: DateTime<Utc> },
    /// Session elapsed its full duration and was cleared. The shell stops
    /// the blink timer and plays the one-shot fade-out cue.
    SessionCompleted { at: DateTime<Utc> },
    /// Full controller state, for GUI (re)sync.
    SessionSnapshot {
        state: SessionState,
        fraction: f64,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
}
