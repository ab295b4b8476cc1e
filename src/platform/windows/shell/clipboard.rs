//! File lists (CF_HDROP) from the clipboard and from drag-drop.

use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;
use std::path::PathBuf;

use tracing::debug;
use windows::Win32::Foundation::HWND;
use windows::Win32::System::DataExchange::{
    CloseClipboard, GetClipboardData, IsClipboardFormatAvailable, OpenClipboard,
};
use windows::Win32::System::Ole::CF_HDROP;
use windows::Win32::UI::Shell::{DragFinish, DragQueryFileW, HDROP};

/// True when the clipboard holds a file list.
pub fn clipboard_has_files() -> bool {
    unsafe { IsClipboardFormatAvailable(CF_HDROP.0 as u32).is_ok() }
}

/// Reads the clipboard's file list. Empty when the clipboard is busy or
/// holds no files.
pub fn read_clipboard_files(hwnd: HWND) -> Vec<PathBuf> {
    let mut files = Vec::new();

    unsafe {
        if OpenClipboard(Some(hwnd)).is_err() {
            debug!("Clipboard is held by another window");
            return files;
        }

        if let Ok(handle) = GetClipboardData(CF_HDROP.0 as u32) {
            if !handle.is_invalid() {
                files = paths_from_hdrop(HDROP(handle.0));
            }
        }

        let _ = CloseClipboard();
    }

    files
}

/// Reads the paths from a WM_DROPFILES handle and releases it.
///
/// # Safety
/// `hdrop` must be the handle delivered with WM_DROPFILES.
pub unsafe fn take_dropped_files(hdrop: HDROP) -> Vec<PathBuf> {
    let files = paths_from_hdrop(hdrop);
    DragFinish(hdrop);
    files
}

/// Lists every path in an HDROP without releasing it.
///
/// # Safety
/// `hdrop` must be a valid drop handle for the duration of the call.
pub unsafe fn paths_from_hdrop(hdrop: HDROP) -> Vec<PathBuf> {
    let count = DragQueryFileW(hdrop, u32::MAX, None);
    let mut files = Vec::with_capacity(count as usize);

    for i in 0..count {
        let len = DragQueryFileW(hdrop, i, None);
        if len == 0 {
            continue;
        }
        let mut buf = vec![0u16; (len + 1) as usize];
        let actual_len = DragQueryFileW(hdrop, i, Some(&mut buf));
        if actual_len > 0 {
            buf.truncate(actual_len as usize);
            files.push(PathBuf::from(OsString::from_wide(&buf)));
        }
    }

    files
}
