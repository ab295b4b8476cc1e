//! Error message boxes.
//!
//! Every failure the user should know about (bad settings, hotkey taken,
//! copy or launch errors) ends up here after being logged.

use std::fmt::Display;

use tracing::error;
use windows::core::PCWSTR;
use windows::Win32::UI::WindowsAndMessaging::{
    MessageBoxW, MB_ICONERROR, MB_OK, MB_SETFOREGROUND, MB_TOPMOST,
};

use crate::model::constants::APP_TITLE;
use crate::platform::windows::to_wide;

/// Logs `err` under `context` and shows it in a message box.
pub fn report_error(context: &str, err: impl Display) {
    error!("{}: {}", context, err);
    show_error(&format!("{context}\n\n{err}"));
}

/// Shows a modal error box titled with the app name.
///
/// Not owned by the panel, which may be hidden when the error happens.
pub fn show_error(message: &str) {
    let title_wide = to_wide(APP_TITLE);
    let message_wide = to_wide(message);

    unsafe {
        MessageBoxW(
            None,
            PCWSTR(message_wide.as_ptr()),
            PCWSTR(title_wide.as_ptr()),
            MB_OK | MB_ICONERROR | MB_SETFOREGROUND | MB_TOPMOST,
        );
    }
}
