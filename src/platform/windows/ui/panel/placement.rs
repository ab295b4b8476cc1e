//! Monitor enumeration and centering the panel on the chosen monitor.

use tracing::debug;
use windows::core::BOOL;
use windows::Win32::Foundation::{HWND, LPARAM, POINT, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, MonitorFromPoint, HDC, HMONITOR, MONITORINFO,
    MONITOR_DEFAULTTONEAREST,
};
use windows::Win32::UI::HiDpi::{GetDpiForMonitor, MDT_EFFECTIVE_DPI};
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, SetWindowPos, HWND_TOPMOST, SWP_NOACTIVATE,
};


use crate::model::constants::{BASE_DPI, PANEL_HEIGHT, PANEL_WIDTH};
use crate::model::{center_in, choose_monitor, scale_for_dpi, Rect};

/// Full bounds of every monitor, in enumeration order.
pub fn monitor_rects() -> Vec<Rect> {
    let mut monitors: Vec<Rect> = Vec::new();
    unsafe {
        let _ = EnumDisplayMonitors(
            None,
            None,
            Some(collect_monitor),
            LPARAM(&mut monitors as *mut Vec<Rect> as isize),
        );
    }
    monitors
}

unsafe extern "system" fn collect_monitor(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _rect: *mut RECT,
    data: LPARAM,
) -> BOOL {
    let monitors = &mut *(data.0 as *mut Vec<Rect>);
    let mut info = MONITORINFO {
        cbSize: std::mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };
    if GetMonitorInfoW(hmonitor, &mut info).as_bool() {
        let r = info.rcMonitor;
        monitors.push(Rect::new(r.left, r.top, r.right - r.left, r.bottom - r.top));
    }
    BOOL(1)
}

fn cursor_position() -> (i32, i32) {
    let mut pt = POINT::default();
    unsafe {
        let _ = GetCursorPos(&mut pt);
    }
    (pt.x, pt.y)
}

/// Effective DPI of the monitor containing `(x, y)`.
fn dpi_at(x: i32, y: i32) -> u32 {
    let mut dpi_x = BASE_DPI;
    let mut dpi_y = BASE_DPI;
    unsafe {
        let monitor = MonitorFromPoint(POINT { x, y }, MONITOR_DEFAULTTONEAREST);
        if GetDpiForMonitor(monitor, MDT_EFFECTIVE_DPI, &mut dpi_x, &mut dpi_y).is_err() {
            return BASE_DPI;
        }
    }
    dpi_x
}

/// Sizes the panel for its monitor's DPI and centers it there, topmost.
///
/// Returns the DPI used, for laying out the child controls.
pub fn position_panel(hwnd: HWND, target_monitor: Option<usize>) -> u32 {
    let monitors = monitor_rects();
    let Some(monitor) = choose_monitor(&monitors, target_monitor, cursor_position()) else {
        debug!("No monitors reported; leaving panel where it is");
        return BASE_DPI;
    };

    let dpi = dpi_at(monitor.x + monitor.width / 2, monitor.y + monitor.height / 2);
    let width = scale_for_dpi(PANEL_WIDTH, dpi);
    let height = scale_for_dpi(PANEL_HEIGHT, dpi);
    let (x, y) = center_in(&monitor, width, height);

    debug!(
        "Placing panel at ({}, {}) {}x{} on {:?} at {} DPI",
        x, y, width, height, monitor, dpi
    );

    unsafe {
        let _ = SetWindowPos(
            hwnd,
            Some(HWND_TOPMOST),
            x,
            y,
            width,
            height,
            SWP_NOACTIVATE,
        );
    }
    dpi
}
