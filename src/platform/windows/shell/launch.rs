//! Opening desktop items with their default verb.

use std::path::Path;

use tracing::info;
use windows::core::{w, PCWSTR};
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

use crate::error::Result;
use crate::platform::windows::to_wide;

/// Opens `path` the way a double-click on the desktop would.
pub fn launch(path: &Path) -> Result<()> {
    let file = to_wide(path);
    let instance = unsafe {
        ShellExecuteW(
            None,
            w!("open"),
            PCWSTR(file.as_ptr()),
            PCWSTR::null(),
            PCWSTR::null(),
            SW_SHOWNORMAL,
        )
    };

    // Values up to 32 are error codes
    if instance.0 as usize <= 32 {
        return Err(windows::core::Error::from_thread().into());
    }

    info!("Launched {}", path.display());
    Ok(())
}
