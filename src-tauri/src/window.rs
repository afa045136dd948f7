//! Window-layer capabilities: click-through, overlay/desktop z-order, and
//! keeping the widget on screen. The core only ever sees these as plain
//! calls; everything OS-specific stays here.

use clockwidget_core::{clamp_to_screen, Rect, ScreenBounds};
use tauri::WebviewWindow;

/// Let input events pass through the widget to whatever is beneath it.
pub fn set_click_through(win: &WebviewWindow, enabled: bool) -> tauri::Result<()> {
    win.set_ignore_cursor_events(enabled)
}

/// Overlay mode keeps the widget above all windows; desktop mode drops
/// always-on-top and pushes it to the bottom of the z-order.
pub fn apply_layer(win: &WebviewWindow, overlay: bool) -> tauri::Result<()> {
    if overlay {
        win.set_always_on_top(true)?;
    } else {
        win.set_always_on_top(false)?;
        push_to_bottom(win);
    }
    Ok(())
}

#[cfg(windows)]
fn push_to_bottom(win: &WebviewWindow) {
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::{
        SetWindowPos, HWND_BOTTOM, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SWP_SHOWWINDOW,
    };

    let Ok(hwnd) = win.hwnd() else {
        return;
    };
    unsafe {
        if let Err(e) = SetWindowPos(
            HWND(hwnd.0 as _),
            HWND_BOTTOM,
            0,
            0,
            0,
            0,
            SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE | SWP_SHOWWINDOW,
        ) {
            tracing::debug!("desktop mode SetWindowPos failed: {e}");
        }
    }
}

#[cfg(not(windows))]
fn push_to_bottom(_win: &WebviewWindow) {
    // Desktop layering below other windows has no portable equivalent;
    // dropping always-on-top is the whole effect here.
}

/// Clamp the window back inside its monitor. Invoked on every move and
/// resize; only issues a set_position when the position actually changes,
/// so re-entrant move events converge immediately.
pub fn clamp_to_monitor(win: &WebviewWindow) -> Result<(), String> {
    let monitor = win
        .current_monitor()
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "no monitor for window".to_string())?;
    let bounds = ScreenBounds {
        width: f64::from(monitor.size().width),
        height: f64::from(monitor.size().height),
    };

    let pos = win.outer_position().map_err(|e| e.to_string())?;
    let size = win.outer_size().map_err(|e| e.to_string())?;
    let rect = Rect {
        left: f64::from(pos.x),
        top: f64::from(pos.y),
        width: f64::from(size.width),
        height: f64::from(size.height),
    };

    let (left, top) = clamp_to_screen(rect, bounds);
    if (left, top) != (rect.left, rect.top) {
        win.set_position(tauri::PhysicalPosition::new(left as i32, top as i32))
            .map_err(|e| e.to_string())?;
    }
    Ok(())
}
