//! Input handling for Windows (global hotkey).

pub mod hotkeys;

pub use hotkeys::{register_toggle_hotkey, unregister_toggle_hotkey, HOTKEY_TOGGLE};
