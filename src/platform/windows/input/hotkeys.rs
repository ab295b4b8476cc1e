//! Global hotkey that toggles the panel.

use tracing::{info, warn};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    RegisterHotKey, UnregisterHotKey, HOT_KEY_MODIFIERS, MOD_NOREPEAT,
};

use crate::error::Result;
use crate::model::HotkeyBinding;

// Hotkey IDs
pub const HOTKEY_TOGGLE: i32 = 1;

/// Registers `binding` as the toggle hotkey, replacing any previous one.
///
/// Fails when another application already owns the combination.
pub fn register_toggle_hotkey(hwnd: HWND, binding: &HotkeyBinding) -> Result<()> {
    unregister_toggle_hotkey(hwnd);

    // MOD_NOREPEAT keeps a held combination from toggling repeatedly
    let modifiers = HOT_KEY_MODIFIERS(binding.modifier_bits()) | MOD_NOREPEAT;
    let result =
        unsafe { RegisterHotKey(Some(hwnd), HOTKEY_TOGGLE, modifiers, binding.virtual_key()) };

    match result {
        Ok(()) => {
            info!("Registered hotkey {}", binding);
            Ok(())
        }
        Err(e) => {
            warn!("RegisterHotKey failed for {}: {}", binding, e);
            Err(e.into())
        }
    }
}

/// Releases the toggle hotkey. Harmless when none is registered.
pub fn unregister_toggle_hotkey(hwnd: HWND) {
    unsafe {
        let _ = UnregisterHotKey(Some(hwnd), HOTKEY_TOGGLE);
    }
}
