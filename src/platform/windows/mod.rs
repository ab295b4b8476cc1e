//! Windows-specific implementation using the Win32 API.
//!
//! - App state and the actions behind each event
//! - Event dispatching on the UI thread
//! - Input handling (global hotkey)
//! - Shell integration (icons, launching, clipboard and dropped files)
//! - Storage (in-memory cache over the JSON config file)
//! - UI components (panel window, tray icon, dialogs)

pub mod app;
pub mod handlers;
pub mod input;
pub mod shell;
pub mod storage;
pub mod ui;

/// Null-terminated UTF-16 copy of `s` for Win32 string parameters.
pub fn to_wide(s: impl AsRef<std::ffi::OsStr>) -> Vec<u16> {
    use std::os::windows::ffi::OsStrExt;
    s.as_ref()
        .encode_wide()
        .chain(std::iter::once(0))
        .collect()
}
