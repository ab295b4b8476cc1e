//! State owned by the UI thread: window handles, the panel model and the
//! rules used to list the desktop.

use std::cell::RefCell;
use std::path::PathBuf;

use windows::Win32::Foundation::HWND;

use crate::model::constants::BASE_DPI;
use crate::model::{AppConfig, DisplayRules, PanelState};

/// `rules` is rebuilt from the config whenever it changes; everything
/// else lives only as long as the process.
pub struct WindowsRuntimeState {
    pub hwnd: HWND,
    pub list_hwnd: HWND,
    pub paste_hwnd: HWND,
    pub close_hwnd: HWND,
    /// DPI of the monitor the panel was last placed on.
    pub dpi: u32,

    pub panel: PanelState,
    pub rules: DisplayRules,
    /// `None` when no desktop folder could be located.
    pub desktop_dir: Option<PathBuf>,
}

impl Default for WindowsRuntimeState {
    fn default() -> Self {
        Self {
            hwnd: HWND::default(),
            list_hwnd: HWND::default(),
            paste_hwnd: HWND::default(),
            close_hwnd: HWND::default(),
            dpi: BASE_DPI,
            panel: PanelState::default(),
            rules: DisplayRules::new(&AppConfig::default(), None),
            desktop_dir: None,
        }
    }
}

thread_local! {
    pub static STATE: RefCell<WindowsRuntimeState> = RefCell::new(WindowsRuntimeState::default());
}

/// Copy of the window handles, taken so no borrow of `STATE` is held while
/// Win32 calls re-enter the window procedure.
#[derive(Debug, Clone, Copy)]
pub struct PanelHandles {
    pub hwnd: HWND,
    pub list: HWND,
    pub paste: HWND,
    pub close: HWND,
    pub dpi: u32,
}

pub fn panel_handles() -> PanelHandles {
    STATE.with(|s| {
        let s = s.borrow();
        PanelHandles {
            hwnd: s.hwnd,
            list: s.list_hwnd,
            paste: s.paste_hwnd,
            close: s.close_hwnd,
            dpi: s.dpi,
        }
    })
}
