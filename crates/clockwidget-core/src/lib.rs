//! # ClockWidget Core Library
//!
//! This library provides the core logic for the ClockWidget desktop overlay:
//! an analog clock face with an optional focus-session countdown ring. The
//! Tauri desktop application is a thin GUI layer over this crate.
//!
//! ## Architecture
//!
//! - **Render Engine**: A per-frame driver that derives hand positions from
//!   wall-clock time and progress-ring geometry from session elapsed time.
//!   The caller delivers the frame signal (typically at display refresh rate)
//!   and the current time; the engine holds no timers of its own.
//! - **Focus Session**: A wall-clock-based state machine
//!   (`Idle -> Running -> Blinking -> Idle`) advanced by explicit `tick()`
//!   calls, so it can be tested with synthetic time.
//! - **Geometry**: Pure functions from time and face dimensions to hand
//!   line segments and progress-arc descriptors.
//! - **Storage**: Flat JSON settings at a per-user config location.
//!
//! ## Key Components
//!
//! - [`RenderEngine`]: per-frame orchestrator producing one [`FrameUpdate`]
//! - [`FocusSessionController`]: countdown state machine
//! - [`Settings`]: persisted user preferences
//! - [`Event`]: session state-change notifications

pub mod error;
pub mod events;
pub mod geometry;
pub mod render;
pub mod screen;
pub mod session;
pub mod storage;
pub mod theme;

pub use error::{ConfigError, CoreError};
pub use events::Event;
pub use geometry::{HandAngles, HandGeometry, Point, ProgressArcGeometry};
pub use render::{ClockFaceState, FrameUpdate, RenderEngine};
pub use screen::{clamp_to_screen, Rect, ScreenBounds};
pub use session::{FocusSessionController, SessionState};
pub use storage::{clock_size_px, Settings};
pub use theme::Theme;
