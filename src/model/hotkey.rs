//! Global hotkey description, independent of the Win32 types.

use std::fmt;

use super::config::AppConfig;
use crate::error::{Error, Result};

// Modifier bits as expected by RegisterHotKey.
pub const MOD_ALT: u32 = 0x0001;
pub const MOD_CONTROL: u32 = 0x0002;
pub const MOD_SHIFT: u32 = 0x0004;

/// A modifier+key combination derived from the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyBinding {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    /// Upper-cased key character (`A`-`Z` or `0`-`9`).
    pub key: char,
}

impl HotkeyBinding {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut chars = config.hotkey.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphanumeric() => c.to_ascii_uppercase(),
            _ => return Err(Error::Hotkey(config.hotkey.clone())),
        };

        Ok(Self {
            ctrl: config.use_ctrl,
            alt: config.use_alt,
            shift: config.use_shift,
            key,
        })
    }

    /// `fsModifiers` value for RegisterHotKey.
    pub fn modifier_bits(&self) -> u32 {
        let mut bits = 0;
        if self.ctrl {
            bits |= MOD_CONTROL;
        }
        if self.alt {
            bits |= MOD_ALT;
        }
        if self.shift {
            bits |= MOD_SHIFT;
        }
        bits
    }

    /// Virtual key code. For letters and digits it equals the ASCII code.
    pub fn virtual_key(&self) -> u32 {
        self.key as u32
    }
}

impl fmt::Display for HotkeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.alt {
            f.write_str("Alt+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        write!(f, "{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(hotkey: &str) -> AppConfig {
        AppConfig {
            hotkey: hotkey.to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn default_config_is_ctrl_alt_d() {
        let binding = AppConfig::default().hotkey_binding().unwrap();
        assert_eq!(binding.to_string(), "Ctrl+Alt+D");
        assert_eq!(binding.modifier_bits(), MOD_CONTROL | MOD_ALT);
        assert_eq!(binding.virtual_key(), 0x44);
    }

    #[test]
    fn lowercase_key_is_upper_cased() {
        let binding = config_with("m").hotkey_binding().unwrap();
        assert_eq!(binding.key, 'M');
        assert_eq!(binding.virtual_key(), 0x4D);
    }

    #[test]
    fn digits_map_to_their_ascii_code() {
        assert_eq!(config_with("7").hotkey_binding().unwrap().virtual_key(), 0x37);
    }

    #[test]
    fn shift_only_binding() {
        let config = AppConfig {
            use_ctrl: false,
            use_alt: false,
            use_shift: true,
            ..config_with("Q")
        };
        let binding = config.hotkey_binding().unwrap();
        assert_eq!(binding.modifier_bits(), MOD_SHIFT);
        assert_eq!(binding.to_string(), "Shift+Q");
    }

    #[test]
    fn rejects_empty_long_and_symbol_keys() {
        assert!(config_with("").hotkey_binding().is_err());
        assert!(config_with("F1").hotkey_binding().is_err());
        assert!(config_with("-").hotkey_binding().is_err());
        assert!(config_with("é").hotkey_binding().is_err());
    }
}
