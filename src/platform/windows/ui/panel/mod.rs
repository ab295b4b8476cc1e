//! The popup window that mirrors the desktop.
//!
//! - [`window`]: window class, child controls and message handling
//! - [`list_view`]: the icon list itself
//! - [`placement`]: monitor choice and centering

pub mod list_view;
pub mod placement;
pub mod window;

pub use window::{apply_layout, create_panel_window};
