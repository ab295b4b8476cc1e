//! Event dispatcher for Windows.
//!
//! Producers call `post_event`, which publishes to the global bus and posts
//! `WM_DISPATCH_EVENTS` to the panel window. The window procedure then calls
//! `dispatch_events` from the message loop, so actions never run nested
//! inside another window message.

use tracing::debug;
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{PostMessageW, WM_APP};

use crate::events::{self, AppEvent};
use crate::platform::windows::app::actions;
use crate::platform::windows::app::panel_handles;

/// Posted to the panel window when events are waiting on the bus.
pub const WM_DISPATCH_EVENTS: u32 = WM_APP + 1;

/// Publishes `event` and wakes the panel window to handle it.
pub fn post_event(event: AppEvent) {
    events::publish(event);
    let hwnd = panel_handles().hwnd;
    unsafe {
        let _ = PostMessageW(Some(hwnd), WM_DISPATCH_EVENTS, WPARAM(0), LPARAM(0));
    }
}

/// Dispatch pending events from the event bus.
///
/// Must be called from the UI thread.
pub fn dispatch_events() {
    let pending = events::drain_events();
    let mut refresh = false;

    for event in pending {
        debug!("Dispatching: {}", event.description());
        refresh |= event.changes_desktop();

        match event {
            AppEvent::TogglePanel => actions::toggle_panel(),
            AppEvent::ShowPanel => actions::show_panel(),
            AppEvent::HidePanel => actions::hide_panel(),
            AppEvent::LaunchSelected => actions::launch_selected(),
            AppEvent::PasteFromClipboard => actions::paste_from_clipboard(),
            AppEvent::CopyToDesktop(paths) => actions::copy_to_desktop(&paths),
            AppEvent::TogglePasteArea => actions::toggle_paste_area(),
            AppEvent::ConfigChanged => actions::apply_config(),
            AppEvent::Quit => {
                actions::quit();
                return;
            }
        }
    }

    if refresh {
        actions::refresh_items();
    }
}
