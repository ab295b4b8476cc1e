//! Thin wrapper over the SysListView32 control that shows the items.

use windows::core::PWSTR;
use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::UI::Controls::{LIST_VIEW_ITEM_FLAGS, LIST_VIEW_ITEM_STATE_FLAGS, LVITEMW};
use windows::Win32::UI::WindowsAndMessaging::SendMessageW;

use crate::model::DesktopItem;
use crate::platform::windows::to_wide;

// List-view messages and flags (commctrl.h)
const LVM_FIRST: u32 = 0x1000;
const LVM_SETIMAGELIST: u32 = LVM_FIRST + 3;
const LVM_DELETEALLITEMS: u32 = LVM_FIRST + 9;
const LVM_GETNEXTITEM: u32 = LVM_FIRST + 12;
const LVM_ENSUREVISIBLE: u32 = LVM_FIRST + 19;
const LVM_SETITEMSTATE: u32 = LVM_FIRST + 43;
const LVM_SETEXTENDEDLISTVIEWSTYLE: u32 = LVM_FIRST + 54;
const LVM_INSERTITEMW: u32 = LVM_FIRST + 77;

const LVIF_TEXT: u32 = 0x0001;
const LVIF_IMAGE: u32 = 0x0002;
const LVIS_FOCUSED: u32 = 0x0001;
const LVIS_SELECTED: u32 = 0x0002;
const LVNI_SELECTED: usize = 0x0002;
const LVSIL_NORMAL: usize = 0;
const LVS_EX_DOUBLEBUFFER: isize = 0x0001_0000;

// Window styles for the control
pub const LVS_ICON: u32 = 0x0000;
pub const LVS_SINGLESEL: u32 = 0x0004;
pub const LVS_SHAREIMAGELISTS: u32 = 0x0040;
pub const LVS_AUTOARRANGE: u32 = 0x0100;

// Notification codes carried in NMHDR::code
pub const NM_DBLCLK: u32 = (-3i32) as u32;

/// Double buffering plus the shared system image list.
pub fn configure(list: HWND, image_list: Option<isize>) {
    unsafe {
        SendMessageW(
            list,
            LVM_SETEXTENDEDLISTVIEWSTYLE,
            Some(WPARAM(LVS_EX_DOUBLEBUFFER as usize)),
            Some(LPARAM(LVS_EX_DOUBLEBUFFER)),
        );
        if let Some(handle) = image_list {
            SendMessageW(
                list,
                LVM_SETIMAGELIST,
                Some(WPARAM(LVSIL_NORMAL)),
                Some(LPARAM(handle)),
            );
        }
    }
}

/// Replaces the control's contents. `icons[i]` is the image index of
/// `items[i]`.
pub fn populate(list: HWND, items: &[DesktopItem], icons: &[i32]) {
    unsafe {
        SendMessageW(list, LVM_DELETEALLITEMS, None, None);

        for (index, item) in items.iter().enumerate() {
            // The control copies the text during the call
            let mut text = to_wide(&item.name);
            let lvi = LVITEMW {
                mask: LIST_VIEW_ITEM_FLAGS(LVIF_TEXT | LVIF_IMAGE),
                iItem: index as i32,
                pszText: PWSTR(text.as_mut_ptr()),
                iImage: icons.get(index).copied().unwrap_or(0),
                ..Default::default()
            };
            SendMessageW(
                list,
                LVM_INSERTITEMW,
                None,
                Some(LPARAM(&lvi as *const LVITEMW as isize)),
            );
        }
    }
}

/// Index of the selected item, if any.
pub fn selected_index(list: HWND) -> Option<usize> {
    let result = unsafe {
        SendMessageW(
            list,
            LVM_GETNEXTITEM,
            Some(WPARAM(usize::MAX)), // search from the start
            Some(LPARAM(LVNI_SELECTED as isize)),
        )
    };
    usize::try_from(result.0).ok()
}

/// Selects, focuses and scrolls to `index`, clearing any other selection.
pub fn select(list: HWND, index: usize) {
    clear_selection(list);
    set_state(list, index, LVIS_SELECTED | LVIS_FOCUSED, LVIS_SELECTED | LVIS_FOCUSED);
    ensure_visible(list, index);
}

pub fn clear_selection(list: HWND) {
    // WPARAM -1 applies the state to every item
    set_state(list, usize::MAX, 0, LVIS_SELECTED | LVIS_FOCUSED);
}

pub fn ensure_visible(list: HWND, index: usize) {
    unsafe {
        SendMessageW(
            list,
            LVM_ENSUREVISIBLE,
            Some(WPARAM(index)),
            Some(LPARAM(0)), // fully visible
        );
    }
}

fn set_state(list: HWND, index: usize, state: u32, mask: u32) {
    let lvi = LVITEMW {
        state: LIST_VIEW_ITEM_STATE_FLAGS(state),
        stateMask: LIST_VIEW_ITEM_STATE_FLAGS(mask),
        ..Default::default()
    };
    unsafe {
        SendMessageW(
            list,
            LVM_SETITEMSTATE,
            Some(WPARAM(index)),
            Some(LPARAM(&lvi as *const LVITEMW as isize)),
        );
    }
}
