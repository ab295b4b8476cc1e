//! What each event does to the panel window.
//!
//! Every function here runs on the UI thread. `STATE` is only borrowed for
//! short reads and writes, never across a Win32 call that can re-enter the
//! window procedure.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};
use windows::Win32::UI::Input::KeyboardAndMouse::SetFocus;
use windows::Win32::UI::WindowsAndMessaging::{
    DestroyWindow, GetForegroundWindow, SetForegroundWindow, ShowWindow, SW_HIDE, SW_SHOW,
};

use super::state::{panel_handles, STATE};
use crate::display_rules;
use crate::error::Error;
use crate::events::AppEvent;
use crate::model::{list_mirrored_items, Key, KeyOutcome, PanelAction};
use crate::platform::windows::handlers::post_event;
use crate::platform::windows::input::{register_toggle_hotkey, unregister_toggle_hotkey};
use crate::platform::windows::shell;
use crate::platform::windows::storage::{current_config, reload_config, update_config};
use crate::platform::windows::ui::dialogs::report_error;
use crate::platform::windows::ui::panel::{self, list_view, placement};
use crate::transfer::copy_onto;

/// Hotkey, tray double-click.
pub fn toggle_panel() {
    let action = STATE.with(|s| s.borrow_mut().panel.toggle());
    match action {
        PanelAction::Show => reveal(),
        PanelAction::Hide => conceal(),
    }
}

/// Tray "Show" item. Only brings the panel forward when already visible.
pub fn show_panel() {
    let visible = STATE.with(|s| s.borrow().panel.is_visible());
    if visible {
        let handles = panel_handles();
        unsafe {
            let _ = SetForegroundWindow(handles.hwnd);
        }
    } else {
        toggle_panel();
    }
}

/// Escape, the close button and Alt+F4.
pub fn hide_panel() {
    STATE.with(|s| s.borrow_mut().panel.hide());
    conceal();
}

/// Centers the panel on its monitor, refreshes it, scrolls to the top and
/// activates it.
fn reveal() {
    let handles = panel_handles();
    let dpi = placement::position_panel(handles.hwnd, current_config().target_monitor);
    STATE.with(|s| s.borrow_mut().dpi = dpi);

    panel::apply_layout();
    refresh_items();
    list_view::ensure_visible(handles.list, 0);

    unsafe {
        let _ = ShowWindow(handles.hwnd, SW_SHOW);
        let _ = SetForegroundWindow(handles.hwnd);
        let _ = SetFocus(Some(handles.list));
    }
    info!("Panel shown");
}

fn conceal() {
    unsafe {
        let _ = ShowWindow(panel_handles().hwnd, SW_HIDE);
    }
    info!("Panel hidden");
}

/// Re-lists the desktop folder into the panel.
///
/// A folder that cannot be read is reported and leaves the panel empty.
pub fn refresh_items() {
    let (dir, rules) = STATE.with(|s| {
        let state = s.borrow();
        (state.desktop_dir.clone(), state.rules.clone())
    });

    let items = match list_mirrored_items(dir.as_deref(), &rules) {
        Ok(items) => items,
        Err(e) => {
            report_error("Could not read the desktop folder", &e);
            Vec::new()
        }
    };

    let icons: Vec<i32> = items
        .iter()
        .map(|item| shell::system_icon_index(&item.path))
        .collect();
    list_view::populate(panel_handles().list, &items, &icons);

    STATE.with(|s| s.borrow_mut().panel.replace_items(items));
}

/// Feeds a key from the list view into the panel state.
///
/// Returns false when the key was not used, so the control can handle it.
pub fn handle_key(key: Key) -> bool {
    let handles = panel_handles();
    let active = unsafe { GetForegroundWindow() } == handles.hwnd;
    let close_on_escape = current_config().close_on_escape;
    // The user may have moved the selection with the mouse or arrow keys
    let selection = list_view::selected_index(handles.list);

    let outcome = STATE.with(|s| {
        let mut state = s.borrow_mut();
        state.panel.select(selection);
        state
            .panel
            .handle_key(key, Instant::now(), close_on_escape, active)
    });

    match outcome {
        KeyOutcome::Ignored => false,
        KeyOutcome::Unchanged => true,
        KeyOutcome::Select(index) => {
            list_view::select(handles.list, index);
            true
        }
        // Hiding and launching run from the dispatcher, not inside WM_KEYDOWN
        KeyOutcome::Hide => {
            post_event(AppEvent::HidePanel);
            true
        }
        KeyOutcome::Launch(_) => {
            post_event(AppEvent::LaunchSelected);
            true
        }
    }
}

/// Enter or double-click.
pub fn launch_selected() {
    let selection = list_view::selected_index(panel_handles().list);
    let path = STATE.with(|s| {
        let mut state = s.borrow_mut();
        state.panel.select(selection);
        state.panel.selected_item().map(|item| item.path.clone())
    });

    match path {
        Some(path) => launch(&path),
        None => debug!("Nothing selected to launch"),
    }
}

fn launch(path: &Path) {
    if let Err(e) = shell::launch(path) {
        report_error(&format!("Could not open {}", path.display()), e);
    }
}

/// Copies the clipboard's file list onto the desktop.
pub fn paste_from_clipboard() {
    let files = shell::read_clipboard_files(panel_handles().hwnd);
    if files.is_empty() {
        info!("Clipboard holds no files to paste");
        return;
    }
    copy_to_desktop(&files);
}

/// Copies pasted or dropped paths onto the desktop, reporting every
/// failure at once.
pub fn copy_to_desktop(paths: &[PathBuf]) {
    let Some(dir) = STATE.with(|s| s.borrow().desktop_dir.clone()) else {
        report_error("Nothing was copied", Error::DesktopNotFound);
        return;
    };
    let report = copy_onto(&dir, paths);
    if !report.is_success() {
        report_error(
            "Some items could not be copied to the desktop",
            report.failure_summary(),
        );
    }
}

/// Flips and saves `ShowPasteArea`, then re-lays out the panel.
pub fn toggle_paste_area() {
    match update_config(|c| c.show_paste_area = !c.show_paste_area) {
        Ok(config) => info!("Paste area {}", if config.show_paste_area { "shown" } else { "hidden" }),
        Err(e) => report_error("Could not save settings", e),
    }
    panel::apply_layout();
}

/// Re-reads the settings file and applies everything derived from it.
pub fn apply_config() {
    if let Err(e) = reload_config() {
        report_error("Could not load settings; using defaults", e);
    }
    apply_rules();
    install_hotkey();
    panel::apply_layout();
    refresh_items();
}

/// Rebuilds the display rules from the cached config.
pub fn apply_rules() {
    let (rules, problem) = display_rules(&current_config());
    if let Some(e) = problem {
        report_error("Hidden-item filter disabled", e);
    }
    STATE.with(|s| s.borrow_mut().rules = rules);
}

/// (Re-)registers the toggle hotkey from the cached config.
pub fn install_hotkey() {
    let hwnd = panel_handles().hwnd;
    match current_config().hotkey_binding() {
        Ok(binding) => {
            if let Err(e) = register_toggle_hotkey(hwnd, &binding) {
                report_error(&format!("Could not register the hotkey {binding}"), e);
            }
        }
        Err(e) => {
            unregister_toggle_hotkey(hwnd);
            report_error("Hotkey not registered", e);
        }
    }
}

/// Tray "Exit": destroying the window ends the message loop.
pub fn quit() {
    info!("Exit requested");
    unsafe {
        let _ = DestroyWindow(panel_handles().hwnd);
    }
}
