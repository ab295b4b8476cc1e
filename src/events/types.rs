//! The events producers can publish.

use std::path::PathBuf;

/// Something the user asked for. Producers never act directly; the
/// dispatcher turns each event into one action on the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Global hotkey or tray icon click.
    TogglePanel,
    /// Tray "Show". Never hides.
    ShowPanel,
    /// Escape, the close button or Alt+F4.
    HidePanel,
    /// Enter or double-click.
    LaunchSelected,
    /// Ctrl+V or the paste area's menu.
    PasteFromClipboard,
    /// Files dropped on the panel.
    CopyToDesktop(Vec<PathBuf>),
    TogglePasteArea,
    /// Tray "Reload settings".
    ConfigChanged,
    Quit,
}

impl AppEvent {
    /// True when handling the event may add entries to the desktop, so the
    /// list has to be re-read afterwards.
    pub fn changes_desktop(&self) -> bool {
        matches!(
            self,
            AppEvent::PasteFromClipboard | AppEvent::CopyToDesktop(_)
        )
    }

    /// Short label for logs.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::TogglePanel => "toggle panel",
            AppEvent::ShowPanel => "show panel",
            AppEvent::HidePanel => "hide panel",
            AppEvent::LaunchSelected => "launch selection",
            AppEvent::PasteFromClipboard => "paste from clipboard",
            AppEvent::CopyToDesktop(_) => "copy dropped files",
            AppEvent::TogglePasteArea => "toggle paste area",
            AppEvent::ConfigChanged => "reload settings",
            AppEvent::Quit => "quit",
        }
    }
}
