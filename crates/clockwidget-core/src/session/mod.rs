mod controller;

pub use controller::{FocusSessionController, SessionState, BLINK_INTERVAL_MS};
