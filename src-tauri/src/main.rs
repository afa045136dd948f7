// Prevents additional console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! ClockWidget Desktop Application
//!
//! A Tauri-based desktop overlay: an analog clock face with an optional
//! focus-session countdown ring. The GUI is a thin canvas skin over the
//! Rust core (clockwidget-core); all timing and geometry come from there.

use std::sync::Mutex;

use clockwidget_core::Settings;
use tauri::Manager;

mod bridge;
mod tray;
mod window;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = Settings::load_or_default();

    tauri::Builder::default()
        .manage(bridge::EngineState::new(&settings))
        .manage(bridge::SettingsState(Mutex::new(settings)))
        .setup(|app| {
            tray::setup(app)?;
            bridge::apply_startup_settings(app.handle())?;
            Ok(())
        })
        .on_window_event(|win, event| {
            // Keep the widget fully visible wherever it is dragged or
            // however it is resized.
            if matches!(
                event,
                tauri::WindowEvent::Moved(_) | tauri::WindowEvent::Resized(_)
            ) {
                if let Some(main) = win.app_handle().get_webview_window("main") {
                    if let Err(e) = window::clamp_to_monitor(&main) {
                        tracing::debug!("clamp after move/resize failed: {e}");
                    }
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            bridge::cmd_frame,
            bridge::cmd_focus_start,
            bridge::cmd_focus_status,
            bridge::cmd_settings_get,
            bridge::cmd_set_theme,
            bridge::cmd_set_opacity,
            bridge::cmd_set_clock_size,
            bridge::cmd_set_click_through,
            bridge::cmd_set_overlay_mode,
            bridge::cmd_clamp_window,
            bridge::cmd_start_drag,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
