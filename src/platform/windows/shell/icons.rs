//! Icons from the shell's system image list.
//!
//! The list view shares the system image list, so an item's icon is just an
//! index into it; nothing has to be created or destroyed per item.

use std::mem::size_of;
use std::path::Path;

use windows::core::PCWSTR;
use windows::Win32::Storage::FileSystem::FILE_FLAGS_AND_ATTRIBUTES;
use windows::Win32::UI::Shell::{
    SHGetFileInfoW, SHFILEINFOW, SHGFI_LARGEICON, SHGFI_SYSICONINDEX,
};

use crate::platform::windows::to_wide;

/// Raw handle of the large-icon system image list, ready to pass as the
/// LPARAM of LVM_SETIMAGELIST.
pub fn system_image_list(any_path: &Path) -> Option<isize> {
    let (list, _) = query(any_path)?;
    Some(list)
}

/// Index of `path`'s icon in the system image list. Falls back to 0, the
/// generic document icon.
pub fn system_icon_index(path: &Path) -> i32 {
    query(path).map(|(_, index)| index).unwrap_or(0)
}

fn query(path: &Path) -> Option<(isize, i32)> {
    let wide = to_wide(path);
    let mut info = SHFILEINFOW::default();

    let list = unsafe {
        SHGetFileInfoW(
            PCWSTR(wide.as_ptr()),
            FILE_FLAGS_AND_ATTRIBUTES(0),
            Some(&mut info),
            size_of::<SHFILEINFOW>() as u32,
            SHGFI_SYSICONINDEX | SHGFI_LARGEICON,
        )
    };

    if list == 0 {
        None
    } else {
        Some((list as isize, info.iIcon))
    }
}
