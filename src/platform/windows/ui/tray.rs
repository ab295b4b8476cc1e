//! Notification-area icon and its menu.
//!
//! Clicks on the icon arrive at the panel window as `WM_TRAYICON`; menu
//! picks arrive as `WM_COMMAND` carrying one of the `MENU_*` ids.

use std::cell::Cell;

use tracing::{debug, warn};
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HWND, POINT};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Shell::{
    Shell_NotifyIconW, NIF_ICON, NIF_MESSAGE, NIF_TIP, NIM_ADD, NIM_DELETE, NOTIFYICONDATAW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CreatePopupMenu, DestroyMenu, GetCursorPos, LoadIconW, LoadImageW,
    RegisterWindowMessageW, SetForegroundWindow, TrackPopupMenu, HICON, IDI_APPLICATION,
    IMAGE_ICON, LR_SHARED, MENU_ITEM_FLAGS, MF_CHECKED, MF_SEPARATOR, MF_STRING, TPM_BOTTOMALIGN,
    TPM_RIGHTALIGN, TPM_RIGHTBUTTON, WM_USER,
};

use crate::model::constants::APP_TITLE;
use crate::platform::windows::to_wide;

pub const WM_TRAYICON: u32 = WM_USER + 1;

pub const MENU_SHOW: u32 = 1001;
pub const MENU_PASTE_AREA: u32 = 1002;
pub const MENU_RELOAD: u32 = 1003;
pub const MENU_EXIT: u32 = 1004;

const ICON_UID: u32 = 1;

thread_local! {
    static OWNER: Cell<Option<HWND>> = const { Cell::new(None) };
    static TASKBAR_CREATED: Cell<u32> = const { Cell::new(0) };
}

fn icon_data(owner: HWND) -> NOTIFYICONDATAW {
    NOTIFYICONDATAW {
        cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
        hWnd: owner,
        uID: ICON_UID,
        ..Default::default()
    }
}

/// Adds the icon, owned by `hwnd`. Also called again after Explorer restarts.
pub fn install_tray_icon(hwnd: HWND) {
    OWNER.with(|o| o.set(Some(hwnd)));

    let mut data = icon_data(hwnd);
    data.uFlags = NIF_ICON | NIF_MESSAGE | NIF_TIP;
    data.uCallbackMessage = WM_TRAYICON;

    let tip = to_wide(APP_TITLE);
    let room = data.szTip.len() - 1;
    for (slot, unit) in data.szTip.iter_mut().zip(tip.iter().take(room)) {
        *slot = *unit;
    }

    unsafe {
        let taskbar_created = RegisterWindowMessageW(w!("TaskbarCreated"));
        TASKBAR_CREATED.with(|m| m.set(taskbar_created));

        data.hIcon = app_icon();
        if Shell_NotifyIconW(NIM_ADD, &data).as_bool() {
            debug!("Tray icon added");
        } else {
            warn!("Could not add the tray icon");
        }
    }
}

/// True for Explorer's broadcast that a fresh taskbar exists.
pub fn is_taskbar_created(msg: u32) -> bool {
    let registered = TASKBAR_CREATED.with(Cell::get);
    registered != 0 && msg == registered
}

// Icon resource 1 from resources.rc, else the stock icon
unsafe fn app_icon() -> HICON {
    let module = GetModuleHandleW(None).unwrap_or_default();
    match LoadImageW(
        Some(module.into()),
        PCWSTR(1 as *const u16),
        IMAGE_ICON,
        16,
        16,
        LR_SHARED,
    ) {
        Ok(handle) => HICON(handle.0),
        Err(e) => {
            debug!("Icon resource missing ({}), using IDI_APPLICATION", e);
            LoadIconW(None, IDI_APPLICATION).unwrap_or_default()
        }
    }
}

pub fn remove_tray_icon() {
    if let Some(owner) = OWNER.with(Cell::take) {
        let data = icon_data(owner);
        unsafe {
            let _ = Shell_NotifyIconW(NIM_DELETE, &data);
        }
    }
}

/// Pops the tray menu up at the cursor. Built fresh every time so the
/// hotkey label and paste-area check follow the current settings.
pub fn show_tray_menu(hwnd: HWND, hotkey_label: &str, paste_area_shown: bool) {
    unsafe {
        let Ok(menu) = CreatePopupMenu() else {
            warn!("CreatePopupMenu failed");
            return;
        };

        let show = to_wide(format!("Show {APP_TITLE} ({hotkey_label})"));
        let mut paste_area: MENU_ITEM_FLAGS = MF_STRING;
        if paste_area_shown {
            paste_area |= MF_CHECKED;
        }

        let _ = AppendMenuW(menu, MF_STRING, MENU_SHOW as usize, PCWSTR(show.as_ptr()));
        let _ = AppendMenuW(menu, paste_area, MENU_PASTE_AREA as usize, w!("Show paste area"));
        let _ = AppendMenuW(menu, MF_STRING, MENU_RELOAD as usize, w!("Reload settings"));
        let _ = AppendMenuW(menu, MF_SEPARATOR, 0, PCWSTR::null());
        let _ = AppendMenuW(menu, MF_STRING, MENU_EXIT as usize, w!("Exit"));

        let mut cursor = POINT::default();
        let _ = GetCursorPos(&mut cursor);

        // Without foreground the menu stays open after clicking elsewhere
        let _ = SetForegroundWindow(hwnd);
        let _ = TrackPopupMenu(
            menu,
            TPM_BOTTOMALIGN | TPM_RIGHTALIGN | TPM_RIGHTBUTTON,
            cursor.x,
            cursor.y,
            None,
            hwnd,
            None,
        );
        let _ = DestroyMenu(menu);
    }
}
