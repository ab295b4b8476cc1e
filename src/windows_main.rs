//! GUI start-up on Windows.
//!
//! Creates the hidden panel window, installs the hotkey and tray icon, then
//! runs the message loop until the tray's Exit destroys the window.

use tracing::{debug, info};
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Controls::{
    InitCommonControlsEx, ICC_LISTVIEW_CLASSES, ICC_STANDARD_CLASSES, INITCOMMONCONTROLSEX,
};
use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::WindowsAndMessaging::{DispatchMessageW, GetMessageW, TranslateMessage, MSG};

use desktop_mirror::cli::Options;
use desktop_mirror::events::init_event_bus;
use desktop_mirror::model::resolve_desktop_dir;
use desktop_mirror::platform::windows::app::{actions, STATE};
use desktop_mirror::platform::windows::storage::init_config;
use desktop_mirror::platform::windows::ui::dialogs::report_error;
use desktop_mirror::platform::windows::ui::panel::create_panel_window;
use desktop_mirror::platform::windows::ui::tray;
use desktop_mirror::{ConfigStore, Result};

/// Initializes COM, DPI awareness and common controls, then runs the tray app.
pub fn run(options: Options) -> Result<()> {
    unsafe {
        // Some shell verbs behind ShellExecuteW need an STA
        CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok()?;

        if let Err(e) = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) {
            // Already set by the manifest, or an older Windows
            debug!("SetProcessDpiAwarenessContext: {}", e);
        }

        let icc = INITCOMMONCONTROLSEX {
            dwSize: std::mem::size_of::<INITCOMMONCONTROLSEX>() as u32,
            dwICC: ICC_LISTVIEW_CLASSES | ICC_STANDARD_CLASSES,
        };
        let _ = InitCommonControlsEx(&icc);
    }

    let result = run_app(options);

    unsafe {
        CoUninitialize();
    }
    result
}

fn run_app(options: Options) -> Result<()> {
    init_event_bus();

    let store = ConfigStore::new(
        options
            .config_path
            .unwrap_or_else(ConfigStore::default_path),
    );
    info!("Settings file: {}", store.path().display());
    if let Err(e) = init_config(store) {
        report_error("Could not load settings; using defaults", e);
    }

    let desktop_dir = match resolve_desktop_dir(options.desktop_dir) {
        Ok(dir) => {
            info!("Mirroring {}", dir.display());
            Some(dir)
        }
        Err(e) => {
            report_error("Could not locate the desktop folder; the panel will stay empty", e);
            None
        }
    };
    STATE.with(|s| s.borrow_mut().desktop_dir = desktop_dir);

    let instance = unsafe { GetModuleHandleW(None)? };
    let hwnd = create_panel_window(instance.into())?;

    actions::apply_rules();
    actions::refresh_items();
    actions::install_hotkey();
    tray::install_tray_icon(hwnd);

    info!("Ready");

    unsafe {
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    info!("Exiting");
    Ok(())
}
