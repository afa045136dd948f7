//! System tray integration for the ClockWidget desktop application.
//!
//! The tray is the widget's main control surface (the face itself has no
//! chrome): clock size, theme, focus session start, settings, click-through
//! toggle, and quit.

use tauri::{
    menu::{CheckMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu},
    tray::TrayIconBuilder,
    App, Emitter, Manager,
};

use crate::bridge::{self, SettingsState};

/// Sets up the tray icon, its menu, and the menu event handlers.
///
/// # Errors
/// Returns an error if tray icon or menu creation fails.
pub fn setup(app: &App) -> Result<(), Box<dyn std::error::Error>> {
    let (size_name, theme_name, click_through) = {
        let settings = app.state::<SettingsState>();
        let s = settings.0.lock().map_err(|e| e.to_string())?;
        (s.clock_size.clone(), s.theme.clone(), s.click_through_enabled)
    };

    let size_small = CheckMenuItem::with_id(
        app, "size-small", "Small", true, size_name == "Small", None::<&str>,
    )?;
    let size_medium = CheckMenuItem::with_id(
        app, "size-medium", "Medium", true, size_name == "Medium", None::<&str>,
    )?;
    let size_large = CheckMenuItem::with_id(
        app, "size-large", "Large", true, size_name == "Large", None::<&str>,
    )?;
    let size_menu =
        Submenu::with_items(app, "Clock Size", true, &[&size_small, &size_medium, &size_large])?;

    let theme_light = CheckMenuItem::with_id(
        app, "theme-light", "Light", true, theme_name.eq_ignore_ascii_case("light"), None::<&str>,
    )?;
    let theme_dark = CheckMenuItem::with_id(
        app, "theme-dark", "Dark", true, theme_name.eq_ignore_ascii_case("dark"), None::<&str>,
    )?;
    let theme_menu = Submenu::with_items(app, "Theme", true, &[&theme_light, &theme_dark])?;

    let focus = MenuItem::with_id(app, "focus", "Start Focus Session", true, None::<&str>)?;
    let settings_item = MenuItem::with_id(app, "settings", "Settings", true, None::<&str>)?;
    let click_item = CheckMenuItem::with_id(
        app, "clickthrough", "Click-Through Mode", true, click_through, None::<&str>,
    )?;
    let quit = MenuItem::with_id(app, "quit", "Exit", true, None::<&str>)?;

    let menu = Menu::with_items(
        app,
        &[
            &size_menu,
            &theme_menu,
            &PredefinedMenuItem::separator(app)?,
            &focus,
            &settings_item,
            &PredefinedMenuItem::separator(app)?,
            &click_item,
            &PredefinedMenuItem::separator(app)?,
            &quit,
        ],
    )?;

    let _tray = TrayIconBuilder::new()
        .tooltip("Clock Widget")
        .menu(&menu)
        .show_menu_on_left_click(true)
        .on_menu_event(move |app, event| {
            let id = event.id().as_ref();
            match id {
                "size-small" | "size-medium" | "size-large" => {
                    let name = match id {
                        "size-small" => "Small",
                        "size-medium" => "Medium",
                        _ => "Large",
                    };
                    if let Err(e) = bridge::apply_clock_size(app, name) {
                        tracing::warn!("failed to apply clock size: {e}");
                    }
                    let _ = size_small.set_checked(id == "size-small");
                    let _ = size_medium.set_checked(id == "size-medium");
                    let _ = size_large.set_checked(id == "size-large");
                }
                "theme-light" | "theme-dark" => {
                    let name = if id == "theme-dark" { "Dark" } else { "Light" };
                    if let Err(e) = bridge::apply_theme(app, name) {
                        tracing::warn!("failed to apply theme: {e}");
                    }
                    let _ = theme_light.set_checked(id == "theme-light");
                    let _ = theme_dark.set_checked(id == "theme-dark");
                }
                "focus" => {
                    let minutes = app
                        .state::<SettingsState>()
                        .0
                        .lock()
                        .map(|s| s.last_focus_minutes)
                        .unwrap_or(25);
                    let _ = app.emit("open-focus-dialog", minutes);
                }
                "settings" => {
                    let _ = app.emit("open-settings", ());
                }
                "clickthrough" => {
                    let enabled = click_item.is_checked().unwrap_or(false);
                    if let Err(e) = bridge::apply_click_through(app, enabled) {
                        tracing::warn!("failed to toggle click-through: {e}");
                    }
                }
                "quit" => {
                    app.exit(0);
                }
                _ => {}
            }
        })
        .build(app)?;

    Ok(())
}
