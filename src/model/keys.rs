//! Keyboard input as seen by the panel.
//!
//! Win32 virtual-key codes are mapped here so the mapping can be tested
//! without the Windows API.

/// A key press the panel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A character accepted by the type-ahead search.
    Char(char),
    Backspace,
    Enter,
    Escape,
    Other,
}

// Virtual-key codes (winuser.h)
const VK_BACK: u32 = 0x08;
const VK_RETURN: u32 = 0x0D;
const VK_ESCAPE: u32 = 0x1B;
const VK_SPACE: u32 = 0x20;
const VK_0: u32 = 0x30;
const VK_9: u32 = 0x39;
const VK_A: u32 = 0x41;
const VK_Z: u32 = 0x5A;
const VK_NUMPAD0: u32 = 0x60;
const VK_NUMPAD9: u32 = 0x69;
const VK_SUBTRACT: u32 = 0x6D;
const VK_DECIMAL: u32 = 0x6E;
const VK_OEM_MINUS: u32 = 0xBD;
const VK_OEM_PERIOD: u32 = 0xBE;
const VK_V: u32 = 0x56;

/// Maps a virtual-key code to a panel key.
///
/// Letters come out lower-case; digits are accepted from the top row and
/// the numpad.
pub fn key_from_vk(vk: u32) -> Key {
    match vk {
        VK_BACK => Key::Backspace,
        VK_RETURN => Key::Enter,
        VK_ESCAPE => Key::Escape,
        VK_SPACE => Key::Char(' '),
        VK_A..=VK_Z => Key::Char(char::from(b'a' + (vk - VK_A) as u8)),
        VK_0..=VK_9 => Key::Char(char::from(b'0' + (vk - VK_0) as u8)),
        VK_NUMPAD0..=VK_NUMPAD9 => Key::Char(char::from(b'0' + (vk - VK_NUMPAD0) as u8)),
        VK_OEM_MINUS | VK_SUBTRACT => Key::Char('-'),
        VK_OEM_PERIOD | VK_DECIMAL => Key::Char('.'),
        _ => Key::Other,
    }
}

/// Ctrl+V without Alt. Ctrl+Alt is AltGr on many layouts, where V types
/// a character.
pub fn is_paste_chord(vk: u32, ctrl: bool, alt: bool) -> bool {
    vk == VK_V && ctrl && !alt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paste_needs_ctrl_alone() {
        assert!(is_paste_chord(0x56, true, false));
        assert!(!is_paste_chord(0x56, true, true));
        assert!(!is_paste_chord(0x56, false, true));
        assert!(!is_paste_chord(0x56, false, false));
        assert!(!is_paste_chord(0x43, true, false));
    }

    #[test]
    fn letters_are_lower_case() {
        assert_eq!(key_from_vk(0x41), Key::Char('a'));
        assert_eq!(key_from_vk(0x5A), Key::Char('z'));
    }

    #[test]
    fn digits_from_top_row_and_numpad() {
        assert_eq!(key_from_vk(0x30), Key::Char('0'));
        assert_eq!(key_from_vk(0x39), Key::Char('9'));
        assert_eq!(key_from_vk(0x60), Key::Char('0'));
        assert_eq!(key_from_vk(0x65), Key::Char('5'));
    }

    #[test]
    fn punctuation() {
        assert_eq!(key_from_vk(0x20), Key::Char(' '));
        assert_eq!(key_from_vk(0xBD), Key::Char('-'));
        assert_eq!(key_from_vk(0x6D), Key::Char('-'));
        assert_eq!(key_from_vk(0xBE), Key::Char('.'));
        assert_eq!(key_from_vk(0x6E), Key::Char('.'));
    }

    #[test]
    fn control_keys() {
        assert_eq!(key_from_vk(0x08), Key::Backspace);
        assert_eq!(key_from_vk(0x0D), Key::Enter);
        assert_eq!(key_from_vk(0x1B), Key::Escape);
        assert_eq!(key_from_vk(0x70), Key::Other); // F1
        assert_eq!(key_from_vk(0x10), Key::Other); // Shift
    }
}
