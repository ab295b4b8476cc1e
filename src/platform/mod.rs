//! Platform-specific implementations.
//!
//! Only Windows has a GUI front-end: tray icon, global hotkey, the panel
//! window and shell integration. Everything else in the crate is portable.

#[cfg(target_os = "windows")]
pub mod windows;
