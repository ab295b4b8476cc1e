//! Application constants and default values.
//!
//! Pure values shared by the model, the storage layer and the Windows
//! front-end.

// === Identity ===

/// Application name, also the config folder name.
pub const APP_NAME: &str = "DesktopMirror";

/// Tray tooltip and window title.
pub const APP_TITLE: &str = "Desktop Mirror";

/// File name of the settings document.
pub const CONFIG_FILE_NAME: &str = "config.json";

// === Type-ahead search ===

/// Idle time after which the type-ahead query starts over.
pub const SEARCH_TIMEOUT_MS: u64 = 1000;

// === Hotkey defaults ===

/// Default hotkey character (Ctrl+Alt+D).
pub const DEFAULT_HOTKEY: &str = "D";

// === First-run defaults ===

/// Hides dotfiles and `*.hidden` markers.
pub const FIRST_RUN_HIDE_REGEX: &str = r"^\.|^desktop\.hidden$|.*\.hidden$";

/// Extensions hidden from display names on first run.
pub const FIRST_RUN_HIDE_EXTENSIONS_LIST: &str = "url|lnk";

/// Separator used by `HideExtensionsList`.
pub const EXTENSION_LIST_SEPARATOR: char = '|';

// === Panel geometry (logical pixels at 96 DPI) ===

pub const PANEL_WIDTH: i32 = 640;
pub const PANEL_HEIGHT: i32 = 480;
pub const PASTE_AREA_HEIGHT: i32 = 40;
pub const CLOSE_BUTTON_SIZE: i32 = 24;
pub const PANEL_MARGIN: i32 = 8;

/// DPI at which logical and physical pixels are equal.
pub const BASE_DPI: u32 = 96;
