//! Tauri commands bridging the webview to the core render engine.
//!
//! The engine lives in-process behind a mutex; the webview pulls one
//! [`FrameUpdate`] per animation frame via `cmd_frame`. Session transitions
//! ride along on the frame record, and the shell reacts to the two that
//! need side effects: `BlinkStarted` spawns the 300ms blink timer and
//! `SessionCompleted` cancels it and emits the fade cue.

use chrono::{Local, Utc};
use clockwidget_core::session::BLINK_INTERVAL_MS;
use clockwidget_core::{clock_size_px, Event, FrameUpdate, RenderEngine, Settings, Theme};
use std::sync::Mutex;
use std::time::Duration;
use tauri::{AppHandle, Emitter, Manager, State};

use crate::window;

/// Shared render engine state, protected by a Mutex. Frame computation and
/// session commands both go through the lock, so session starts swap state
/// between frames instead of mutating one mid-computation.
pub struct EngineState {
    pub engine: Mutex<RenderEngine>,
    /// Handle of the running blink interval task, if any.
    blink_task: Mutex<Option<tauri::async_runtime::JoinHandle<()>>>,
}

impl EngineState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            engine: Mutex::new(RenderEngine::new(settings.clock_size_px())),
            blink_task: Mutex::new(None),
        }
    }
}

/// Explicit settings service instance, constructed once at startup.
pub struct SettingsState(pub Mutex<Settings>);

/// Save failures are logged and swallowed; settings are never worth
/// interrupting the widget for.
fn persist(settings: &Settings) {
    if let Err(e) = settings.persist() {
        tracing::warn!("failed to save settings: {e}");
    }
}

// ── Frame loop ──────────────────────────────────────────────────────

#[tauri::command]
pub fn cmd_frame(app: AppHandle, state: State<'_, EngineState>) -> Result<FrameUpdate, String> {
    let update = {
        let mut engine = state.engine.lock().map_err(|e| e.to_string())?;
        engine.frame(Local::now())
    };

    match &update.event {
        Some(Event::BlinkStarted { .. }) => start_blink_timer(&app),
        Some(Event::SessionCompleted { .. }) => on_session_completed(&app, &state),
        _ => {}
    }

    Ok(update)
}

fn start_blink_timer(app: &AppHandle) {
    let state = app.state::<EngineState>();
    let Ok(mut slot) = state.blink_task.lock() else {
        return;
    };
    if slot.is_some() {
        return;
    }

    let app = app.clone();
    *slot = Some(tauri::async_runtime::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(BLINK_INTERVAL_MS));
        interval.tick().await; // First tick fires immediately; skip it.
        loop {
            interval.tick().await;
            let state = app.state::<EngineState>();
            let event = state
                .engine
                .lock()
                .ok()
                .and_then(|mut engine| engine.blink_tick(Utc::now()));
            match event {
                Some(Event::BlinkToggled { visible, .. }) => {
                    let _ = app.emit("blink-toggled", visible);
                }
                Some(Event::SessionCompleted { .. }) => {
                    on_session_completed(&app, &state);
                    break;
                }
                // A new session superseded the blinking one; this timer
                // is stale and a fresh one will be spawned at 0.9.
                _ => {
                    if let Ok(mut slot) = state.blink_task.lock() {
                        slot.take();
                    }
                    break;
                }
            }
        }
    }));
}

/// Blinking -> Idle: stop the blink timer exactly once and hand the
/// one-shot fade cue to the webview.
fn on_session_completed(app: &AppHandle, state: &EngineState) {
    if let Ok(mut slot) = state.blink_task.lock() {
        if let Some(task) = slot.take() {
            task.abort();
        }
    }
    let _ = app.emit("session-completed", ());
    tracing::info!("focus session completed");
}

// ── Focus session ───────────────────────────────────────────────────

#[tauri::command]
pub fn cmd_focus_start(
    app: AppHandle,
    state: State<'_, EngineState>,
    settings: State<'_, SettingsState>,
    minutes: u32,
) -> Result<Event, String> {
    let event = {
        let mut engine = state.engine.lock().map_err(|e| e.to_string())?;
        engine.start_focus(minutes, Utc::now())
    };

    if let Event::SessionStarted { minutes, .. } = &event {
        tracing::info!(minutes, "focus session started");
        if let Ok(mut s) = settings.0.lock() {
            s.last_focus_minutes = *minutes;
            persist(&s);
        }
        let _ = app.emit("session-started", *minutes);
    }
    Ok(event)
}

#[tauri::command]
pub fn cmd_focus_status(
    state: State<'_, EngineState>,
) -> Result<Event, String> {
    let engine = state.engine.lock().map_err(|e| e.to_string())?;
    Ok(engine.session().snapshot(Utc::now()))
}

// ── Settings ────────────────────────────────────────────────────────

#[tauri::command]
pub fn cmd_settings_get(settings: State<'_, SettingsState>) -> Result<Settings, String> {
    settings.0.lock().map(|s| s.clone()).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn cmd_set_theme(app: AppHandle, name: String) -> Result<String, String> {
    apply_theme(&app, &name).map(|t| t.stylesheet().to_string())
}

/// Settings-boundary clamp is [0.3, 1.0]; the widget itself never goes
/// below 0.2 when applying.
#[tauri::command]
pub fn cmd_set_opacity(
    settings: State<'_, SettingsState>,
    value: f64,
) -> Result<f64, String> {
    let clamped = value.clamp(0.3, 1.0);
    let mut s = settings.0.lock().map_err(|e| e.to_string())?;
    s.clock_opacity = clamped;
    persist(&s);
    Ok(clamped)
}

#[tauri::command]
pub fn cmd_set_clock_size(app: AppHandle, name: String) -> Result<f64, String> {
    apply_clock_size(&app, &name)
}

#[tauri::command]
pub fn cmd_set_click_through(app: AppHandle, enabled: bool) -> Result<(), String> {
    apply_click_through(&app, enabled)
}

#[tauri::command]
pub fn cmd_set_overlay_mode(app: AppHandle, overlay: bool) -> Result<(), String> {
    apply_overlay_mode(&app, overlay)
}

#[tauri::command]
pub fn cmd_clamp_window(window: tauri::WebviewWindow) -> Result<(), String> {
    window::clamp_to_monitor(&window)
}

#[tauri::command]
pub fn cmd_start_drag(window: tauri::WebviewWindow) -> Result<(), String> {
    window.start_dragging().map_err(|e| e.to_string())
}

// ── Shared appliers (commands and tray menu both land here) ─────────

pub fn apply_theme(app: &AppHandle, name: &str) -> Result<Theme, String> {
    let theme = Theme::resolve(name);
    let settings = app.state::<SettingsState>();
    {
        let mut s = settings.0.lock().map_err(|e| e.to_string())?;
        s.theme = theme.name().to_string();
        persist(&s);
    }
    let _ = app.emit("theme-changed", theme.stylesheet());
    Ok(theme)
}

pub fn apply_clock_size(app: &AppHandle, name: &str) -> Result<f64, String> {
    let px = clock_size_px(name);

    let engine = app.state::<EngineState>();
    engine
        .engine
        .lock()
        .map_err(|e| e.to_string())?
        .set_size_px(px);

    let settings = app.state::<SettingsState>();
    {
        let mut s = settings.0.lock().map_err(|e| e.to_string())?;
        s.clock_size = name.to_string();
        persist(&s);
    }

    if let Some(win) = app.get_webview_window("main") {
        win.set_size(tauri::LogicalSize::new(px, px))
            .map_err(|e| e.to_string())?;
        window::clamp_to_monitor(&win)?;
    }
    Ok(px)
}

pub fn apply_click_through(app: &AppHandle, enabled: bool) -> Result<(), String> {
    let settings = app.state::<SettingsState>();
    {
        let mut s = settings.0.lock().map_err(|e| e.to_string())?;
        s.click_through_enabled = enabled;
        persist(&s);
    }
    if let Some(win) = app.get_webview_window("main") {
        window::set_click_through(&win, enabled).map_err(|e| e.to_string())?;
    }
    let _ = app.emit("click-through-changed", enabled);
    Ok(())
}

pub fn apply_overlay_mode(app: &AppHandle, overlay: bool) -> Result<(), String> {
    let settings = app.state::<SettingsState>();
    {
        let mut s = settings.0.lock().map_err(|e| e.to_string())?;
        s.is_overlay_mode = overlay;
        persist(&s);
    }
    if let Some(win) = app.get_webview_window("main") {
        window::apply_layer(&win, overlay).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Apply everything the settings file asks for, once, at startup.
pub fn apply_startup_settings(app: &AppHandle) -> Result<(), String> {
    let (size, click_through, overlay) = {
        let settings = app.state::<SettingsState>();
        let s = settings.0.lock().map_err(|e| e.to_string())?;
        (s.clock_size.clone(), s.click_through_enabled, s.is_overlay_mode)
    };
    apply_clock_size(app, &size)?;
    apply_click_through(app, click_through)?;
    apply_overlay_mode(app, overlay)?;
    Ok(())
}
