//! UI components for Windows.

pub mod dialogs;
pub mod panel;
pub mod tray;

pub use dialogs::*;
pub use tray::*;
