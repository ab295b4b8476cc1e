//! Desktop entries and the rules that decide how they are shown.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, warn};

use super::config::{AppConfig, HideExtensionsMode};
use crate::error::{Error, Result};

/// One entry of the mirrored desktop.
///
/// Items are rebuilt on every refresh; the icon is held by the platform
/// layer at the same index as the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopItem {
    /// Display name, possibly without its extension.
    pub name: String,
    pub path: PathBuf,
    pub is_folder: bool,
}

/// Visibility and display-name rules derived from the config.
#[derive(Debug, Clone)]
pub struct DisplayRules {
    hide_filter: Option<Regex>,
    mode: HideExtensionsMode,
    listed_extensions: Vec<String>,
}

impl DisplayRules {
    /// `hide_filter` is passed separately so an invalid pattern can be
    /// reported by the caller and replaced with `None`.
    pub fn new(config: &AppConfig, hide_filter: Option<Regex>) -> Self {
        Self {
            hide_filter,
            mode: config.hide_extensions,
            listed_extensions: config.hidden_extensions(),
        }
    }

    /// False when the hide filter matches the raw file name.
    pub fn is_visible(&self, file_name: &str) -> bool {
        match &self.hide_filter {
            Some(filter) => !filter.is_match(file_name),
            None => true,
        }
    }

    /// Name shown in the panel. Folders and files follow the same rules.
    pub fn display_name(&self, file_name: &str) -> String {
        let path = Path::new(file_name);
        let (Some(stem), Some(ext)) = (path.file_stem(), path.extension()) else {
            return file_name.to_string();
        };

        let strip = match self.mode {
            HideExtensionsMode::Never => false,
            HideExtensionsMode::Always => true,
            HideExtensionsMode::ListedOnly => {
                let ext = ext.to_string_lossy();
                self.listed_extensions
                    .iter()
                    .any(|listed| listed.eq_ignore_ascii_case(&ext))
            }
        };

        if strip {
            stem.to_string_lossy().into_owned()
        } else {
            file_name.to_string()
        }
    }
}

/// The user's desktop folder.
pub fn default_desktop_dir() -> Result<PathBuf> {
    dirs::desktop_dir().ok_or(Error::DesktopNotFound)
}

/// The folder to mirror: `override_dir` when given, else the desktop.
pub fn resolve_desktop_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => Ok(dir),
        None => default_desktop_dir(),
    }
}

/// Lists the mirrored folder. `None` means no desktop was found at
/// start-up; that was already reported, so the list is simply empty.
pub fn list_mirrored_items(dir: Option<&Path>, rules: &DisplayRules) -> Result<Vec<DesktopItem>> {
    match dir {
        Some(dir) => list_desktop_items(dir, rules),
        None => Ok(Vec::new()),
    }
}

/// Case-insensitive name order, ties broken by the exact name.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Lists the top-level entries of `dir`: folders first, then files, each
/// group in name order, with hidden entries removed.
///
/// Entries that cannot be inspected are skipped; only failing to read `dir`
/// itself is an error.
pub fn list_desktop_items(dir: &Path, rules: &DisplayRules) -> Result<Vec<DesktopItem>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io("reading", dir, e))?;

    let mut folders = Vec::new();
    let mut files = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable desktop entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !rules.is_visible(&file_name) {
            debug!("Hidden by filter: {}", file_name);
            continue;
        }

        let path = entry.path();
        // fs::metadata follows links so a shortcut folder counts as a folder
        let is_folder = match fs::metadata(&path) {
            Ok(meta) => meta.is_dir(),
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let group = if is_folder { &mut folders } else { &mut files };
        group.push((file_name, path));
    }

    folders.sort_by(|a, b| compare_names(&a.0, &b.0));
    files.sort_by(|a, b| compare_names(&a.0, &b.0));

    let folders = folders.into_iter().map(|(file_name, path)| DesktopItem {
        name: rules.display_name(&file_name),
        path,
        is_folder: true,
    });
    let files = files.into_iter().map(|(file_name, path)| DesktopItem {
        name: rules.display_name(&file_name),
        path,
        is_folder: false,
    });

    let items: Vec<DesktopItem> = folders.chain(files).collect();
    debug!("Listed {} desktop items from {}", items.len(), dir.display());
    Ok(items)
}
