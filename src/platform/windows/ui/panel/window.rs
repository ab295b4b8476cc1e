//! Panel window creation and message handling.
//!
//! The panel is also the app's message window: the global hotkey, the tray
//! icon and the event dispatcher all target it, so it exists (hidden) for
//! the whole lifetime of the process.

use tracing::{debug, info};
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, POINT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{GetStockObject, DEFAULT_GUI_FONT};
use windows::Win32::UI::Controls::NMHDR;
use windows::Win32::UI::Input::KeyboardAndMouse::{GetKeyState, SetFocus, VK_CONTROL, VK_MENU};
use windows::Win32::UI::Shell::{DefSubclassProc, DragAcceptFiles, SetWindowSubclass, HDROP};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CreatePopupMenu, CreateWindowExW, DefWindowProcW, DestroyMenu, GetClientRect,
    GetCursorPos, LoadCursorW, MoveWindow, PostQuitMessage, RegisterClassW, SendMessageW,
    ShowWindow, TrackPopupMenu, CS_HREDRAW, CS_VREDRAW, HMENU, IDC_ARROW, MF_GRAYED, MF_STRING,
    SW_HIDE, SW_SHOW, TPM_LEFTALIGN, TPM_RETURNCMD, TPM_RIGHTBUTTON, TPM_TOPALIGN, WINDOW_STYLE,
    WM_ACTIVATE, WM_CHAR, WM_CLOSE, WM_COMMAND, WM_CONTEXTMENU, WM_CREATE, WM_DESTROY,
    WM_DPICHANGED, WM_DROPFILES, WM_HOTKEY, WM_KEYDOWN, WM_LBUTTONDBLCLK, WM_NOTIFY,
    WM_RBUTTONUP, WM_SETFONT, WM_SIZE, WNDCLASSW, WS_BORDER, WS_CHILD, WS_CLIPCHILDREN,
    WS_EX_ACCEPTFILES, WS_EX_CLIENTEDGE, WS_EX_STATICEDGE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST,
    WS_POPUP, WS_TABSTOP, WS_VISIBLE, WINDOW_EX_STYLE,
};

use super::list_view::{
    self, LVS_AUTOARRANGE, LVS_ICON, LVS_SHAREIMAGELISTS, LVS_SINGLESEL, NM_DBLCLK,
};
use crate::error::Result;
use crate::events::AppEvent;
use crate::model::constants::{APP_TITLE, PANEL_HEIGHT, PANEL_WIDTH};
use crate::model::{is_paste_chord, key_from_vk, panel_layout, Key, Rect};
use crate::platform::windows::app::{actions, panel_handles, STATE};
use crate::platform::windows::handlers::{dispatch_events, post_event, WM_DISPATCH_EVENTS};
use crate::platform::windows::input::{unregister_toggle_hotkey, HOTKEY_TOGGLE};
use crate::platform::windows::shell;
use crate::platform::windows::storage::current_config;
use crate::platform::windows::ui::tray::{
    self, MENU_EXIT, MENU_PASTE_AREA, MENU_RELOAD, MENU_SHOW, WM_TRAYICON,
};

// Child control IDs
const ID_LIST: usize = 100;
const ID_CLOSE: usize = 101;
const ID_PASTE_AREA: usize = 102;

// Paste-area context menu
const MENU_PASTE: u32 = 2001;

// Button and static styles (winuser.h)
const BS_PUSHBUTTON: u32 = 0x0000;
const SS_CENTER: u32 = 0x0001;
const SS_NOTIFY: u32 = 0x0100;
const SS_CENTERIMAGE: u32 = 0x0200;

const WA_INACTIVE: usize = 0;

/// Creates the hidden panel with its list, close button and paste area,
/// and records the handles in `STATE`.
pub fn create_panel_window(instance: HINSTANCE) -> Result<HWND> {
    unsafe {
        let class_name = w!("DesktopMirrorPanel");

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wndproc),
            hInstance: instance,
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            lpszClassName: class_name,
            ..Default::default()
        };
        RegisterClassW(&wc);

        // Tool window keeps the panel out of the taskbar and Alt+Tab
        let ex_style = WS_EX_TOOLWINDOW | WS_EX_TOPMOST | WS_EX_ACCEPTFILES;
        let title = crate::platform::windows::to_wide(APP_TITLE);

        let hwnd = CreateWindowExW(
            ex_style,
            class_name,
            PCWSTR(title.as_ptr()),
            WS_POPUP | WS_BORDER | WS_CLIPCHILDREN,
            0,
            0,
            PANEL_WIDTH,
            PANEL_HEIGHT,
            None,
            None,
            Some(instance),
            None,
        )?;

        let list = create_child(
            instance,
            hwnd,
            WS_EX_CLIENTEDGE,
            w!("SysListView32"),
            w!(""),
            WS_TABSTOP
                | WINDOW_STYLE(LVS_ICON | LVS_SINGLESEL | LVS_SHAREIMAGELISTS | LVS_AUTOARRANGE),
            ID_LIST,
        )?;
        let close = create_child(
            instance,
            hwnd,
            WINDOW_EX_STYLE::default(),
            w!("BUTTON"),
            w!("×"),
            WINDOW_STYLE(BS_PUSHBUTTON),
            ID_CLOSE,
        )?;
        let paste = create_child(
            instance,
            hwnd,
            WS_EX_STATICEDGE,
            w!("STATIC"),
            w!("Right-click to paste files onto the desktop, or drop them here"),
            WINDOW_STYLE(SS_CENTER | SS_CENTERIMAGE | SS_NOTIFY),
            ID_PASTE_AREA,
        )?;

        // Explorer-style keyboard handling is replaced by the type-ahead
        let _ = SetWindowSubclass(list, Some(list_subclass_proc), 1, 0);

        let image_list_path = STATE
            .with(|s| s.borrow().desktop_dir.clone())
            .unwrap_or_else(std::env::temp_dir);
        list_view::configure(list, shell::system_image_list(&image_list_path));
        DragAcceptFiles(hwnd, true);

        STATE.with(|s| {
            let mut state = s.borrow_mut();
            state.hwnd = hwnd;
            state.list_hwnd = list;
            state.close_hwnd = close;
            state.paste_hwnd = paste;
        });

        apply_layout();
        info!("Panel window created");
        Ok(hwnd)
    }
}

unsafe fn create_child(
    instance: HINSTANCE,
    parent: HWND,
    ex_style: WINDOW_EX_STYLE,
    class: PCWSTR,
    text: PCWSTR,
    style: WINDOW_STYLE,
    id: usize,
) -> Result<HWND> {
    let child = CreateWindowExW(
        ex_style,
        class,
        text,
        WS_CHILD | WS_VISIBLE | style,
        0,
        0,
        0,
        0,
        Some(parent),
        Some(HMENU(id as *mut _)),
        Some(instance),
        None,
    )?;

    let font = GetStockObject(DEFAULT_GUI_FONT);
    SendMessageW(
        child,
        WM_SETFONT,
        Some(WPARAM(font.0 as usize)),
        Some(LPARAM(1)),
    );
    Ok(child)
}

/// Moves the child controls to fit the client area, DPI and the
/// paste-area setting.
pub fn apply_layout() {
    let handles = panel_handles();
    if handles.list.is_invalid() {
        // WM_SIZE during creation, before the children exist
        return;
    }

    let mut client = RECT::default();
    unsafe {
        let _ = GetClientRect(handles.hwnd, &mut client);
    }
    let layout = panel_layout(
        client.right - client.left,
        client.bottom - client.top,
        handles.dpi,
        current_config().show_paste_area,
    );

    move_to(handles.close, layout.close_button);
    move_to(handles.list, layout.list);
    unsafe {
        match layout.paste_area {
            Some(rect) => {
                move_to(handles.paste, rect);
                let _ = ShowWindow(handles.paste, SW_SHOW);
            }
            None => {
                let _ = ShowWindow(handles.paste, SW_HIDE);
            }
        }
    }
}

fn move_to(hwnd: HWND, rect: Rect) {
    unsafe {
        let _ = MoveWindow(hwnd, rect.x, rect.y, rect.width, rect.height, true);
    }
}

/// Right-click menu of the paste area. Paste is greyed out unless the
/// clipboard holds files.
fn show_paste_menu(hwnd: HWND) {
    unsafe {
        let Ok(menu) = CreatePopupMenu() else {
            return;
        };
        let flags = if shell::clipboard_has_files() {
            MF_STRING
        } else {
            MF_STRING | MF_GRAYED
        };
        let _ = AppendMenuW(menu, flags, MENU_PASTE as usize, w!("Paste"));

        let mut pt = POINT::default();
        let _ = GetCursorPos(&mut pt);
        let command = TrackPopupMenu(
            menu,
            TPM_RETURNCMD | TPM_TOPALIGN | TPM_LEFTALIGN | TPM_RIGHTBUTTON,
            pt.x,
            pt.y,
            None,
            hwnd,
            None,
        );
        let _ = DestroyMenu(menu);

        if command.0 as u32 == MENU_PASTE {
            post_event(AppEvent::PasteFromClipboard);
        }
    }
}

fn show_tray_menu(hwnd: HWND) {
    let config = current_config();
    let label = config
        .hotkey_binding()
        .map(|binding| binding.to_string())
        .unwrap_or_else(|_| "no hotkey".to_string());
    tray::show_tray_menu(hwnd, &label, config.show_paste_area);
}

fn key_is_down(vk: u16) -> bool {
    unsafe { GetKeyState(vk as i32) < 0 }
}

/// Subclass procedure for the list view: panel keys go to the type-ahead
/// and the control's own incremental search is suppressed.
unsafe extern "system" fn list_subclass_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
    _uid_subclass: usize,
    _dw_ref_data: usize,
) -> LRESULT {
    match msg {
        WM_KEYDOWN => {
            let vk = wparam.0 as u32;
            let ctrl = key_is_down(VK_CONTROL.0);
            let alt = key_is_down(VK_MENU.0);
            if is_paste_chord(vk, ctrl, alt) {
                post_event(AppEvent::PasteFromClipboard);
                return LRESULT(0);
            }
            if ctrl || alt {
                return DefSubclassProc(hwnd, msg, wparam, lparam);
            }

            match key_from_vk(vk) {
                Key::Other => DefSubclassProc(hwnd, msg, wparam, lparam),
                key if actions::handle_key(key) => LRESULT(0),
                _ => DefSubclassProc(hwnd, msg, wparam, lparam),
            }
        }
        WM_CHAR => LRESULT(0),
        _ => DefSubclassProc(hwnd, msg, wparam, lparam),
    }
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_CREATE => LRESULT(0),

            WM_HOTKEY => {
                if wparam.0 as i32 == HOTKEY_TOGGLE {
                    post_event(AppEvent::TogglePanel);
                }
                LRESULT(0)
            }

            WM_TRAYICON => {
                match lparam.0 as u32 {
                    WM_RBUTTONUP => show_tray_menu(hwnd),
                    WM_LBUTTONDBLCLK => post_event(AppEvent::TogglePanel),
                    _ => {}
                }
                LRESULT(0)
            }

            WM_DISPATCH_EVENTS => {
                dispatch_events();
                LRESULT(0)
            }

            WM_COMMAND => {
                let id = (wparam.0 & 0xFFFF) as u32;
                match id {
                    MENU_SHOW => post_event(AppEvent::ShowPanel),
                    MENU_PASTE_AREA => post_event(AppEvent::TogglePasteArea),
                    MENU_RELOAD => post_event(AppEvent::ConfigChanged),
                    MENU_EXIT => post_event(AppEvent::Quit),
                    _ if id as usize == ID_CLOSE => post_event(AppEvent::HidePanel),
                    _ => {}
                }
                LRESULT(0)
            }

            WM_NOTIFY => {
                let header = &*(lparam.0 as *const NMHDR);
                if header.idFrom == ID_LIST && header.code == NM_DBLCLK {
                    post_event(AppEvent::LaunchSelected);
                }
                LRESULT(0)
            }

            WM_CONTEXTMENU => {
                if HWND(wparam.0 as *mut _) == panel_handles().paste {
                    show_paste_menu(hwnd);
                    LRESULT(0)
                } else {
                    DefWindowProcW(hwnd, msg, wparam, lparam)
                }
            }

            WM_DROPFILES => {
                let paths = shell::take_dropped_files(HDROP(wparam.0 as *mut _));
                debug!("{} path(s) dropped on the panel", paths.len());
                if !paths.is_empty() {
                    post_event(AppEvent::CopyToDesktop(paths));
                }
                LRESULT(0)
            }

            WM_ACTIVATE => {
                if wparam.0 & 0xFFFF != WA_INACTIVE {
                    let _ = SetFocus(Some(panel_handles().list));
                }
                LRESULT(0)
            }

            WM_SIZE => {
                apply_layout();
                LRESULT(0)
            }

            WM_DPICHANGED => {
                // Size was already chosen for the target monitor's DPI
                let dpi = (wparam.0 & 0xFFFF) as u32;
                STATE.with(|s| s.borrow_mut().dpi = dpi);
                apply_layout();
                LRESULT(0)
            }

            // Alt+F4 hides; only the tray's Exit destroys the window
            WM_CLOSE => {
                post_event(AppEvent::HidePanel);
                LRESULT(0)
            }

            WM_DESTROY => {
                unregister_toggle_hotkey(hwnd);
                tray::remove_tray_icon();
                PostQuitMessage(0);
                LRESULT(0)
            }

            _ if tray::is_taskbar_created(msg) => {
                tray::install_tray_icon(hwnd);
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
