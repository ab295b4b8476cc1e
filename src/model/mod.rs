//! Application domain model.
//!
//! This module contains pure logic (no FFI dependencies): the settings
//! document, the desktop lister, the type-ahead search and the panel
//! state machine.
//!
//! Platform-specific glue lives in `platform::windows`.

pub mod app_state;
pub mod config;
pub mod constants;
pub mod desktop_item;
pub mod hotkey;
pub mod keys;
pub mod placement;
pub mod search;

pub use app_state::{KeyOutcome, PanelAction, PanelState};
pub use config::{AppConfig, HideExtensionsMode};
pub use constants::*;
pub use desktop_item::{
    default_desktop_dir, list_desktop_items, list_mirrored_items, resolve_desktop_dir, DesktopItem,
    DisplayRules,
};
pub use hotkey::HotkeyBinding;
pub use keys::{is_paste_chord, key_from_vk, Key};
pub use placement::{center_in, choose_monitor, panel_layout, scale_for_dpi, PanelLayout, Rect};
pub use search::{find_next_match, TypeAhead};
