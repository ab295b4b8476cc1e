//! Shell integration: file lists from the clipboard and drag-drop, system
//! icons and launching items.

pub mod clipboard;
pub mod icons;
pub mod launch;

pub use clipboard::{clipboard_has_files, paths_from_hdrop, read_clipboard_files, take_dropped_files};
pub use icons::{system_icon_index, system_image_list};
pub use launch::launch;
