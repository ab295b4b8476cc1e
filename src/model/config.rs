//! Settings document.
//!
//! `AppConfig` is the single source of truth for behavior. It is read once
//! at startup and written back as a whole whenever a setting changes.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::constants::*;
use super::hotkey::HotkeyBinding;
use crate::error::Result;

/// How file extensions are treated in display names.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HideExtensionsMode {
    #[default]
    Never,
    Always,
    ListedOnly,
}

/// Serializable settings, stored as PascalCase JSON.
///
/// Missing keys fall back to the type defaults from `Default`, so a
/// hand-edited file only needs the keys it wants to change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct AppConfig {
    pub close_on_escape: bool,
    /// Monitor index; `None` follows the mouse cursor.
    pub target_monitor: Option<usize>,
    pub hide_regex: Option<String>,
    pub hide_extensions: HideExtensionsMode,
    /// `|`-separated extensions used by `HideExtensionsMode::ListedOnly`.
    pub hide_extensions_list: Option<String>,
    pub use_ctrl: bool,
    pub use_alt: bool,
    pub use_shift: bool,
    pub hotkey: String,
    pub show_paste_area: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            close_on_escape: true,
            target_monitor: None,
            hide_regex: None,
            hide_extensions: HideExtensionsMode::Never,
            hide_extensions_list: None,
            use_ctrl: true,
            use_alt: true,
            use_shift: false,
            hotkey: DEFAULT_HOTKEY.to_string(),
            show_paste_area: true,
        }
    }
}

impl AppConfig {
    /// Settings written the first time the app runs without a config file.
    pub fn first_run() -> Self {
        Self {
            hide_regex: Some(FIRST_RUN_HIDE_REGEX.to_string()),
            hide_extensions: HideExtensionsMode::Always,
            hide_extensions_list: Some(FIRST_RUN_HIDE_EXTENSIONS_LIST.to_string()),
            ..Self::default()
        }
    }

    /// Compiles `HideRegex`. A missing or blank pattern means no filter.
    pub fn compile_hide_filter(&self) -> Result<Option<Regex>> {
        match self.hide_regex.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(pattern) => Ok(Some(Regex::new(pattern)?)),
        }
    }

    /// Extensions listed in `HideExtensionsList`, without leading dots.
    pub fn hidden_extensions(&self) -> Vec<String> {
        self.hide_extensions_list
            .as_deref()
            .unwrap_or_default()
            .split(EXTENSION_LIST_SEPARATOR)
            .map(|ext| ext.trim().trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The global toggle hotkey described by this config.
    pub fn hotkey_binding(&self) -> Result<HotkeyBinding> {
        HotkeyBinding::from_config(self)
    }
}
