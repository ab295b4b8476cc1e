//! Copying pasted or dropped files onto the desktop.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Outcome of copying a batch of sources.
#[derive(Debug, Default)]
pub struct CopyReport {
    /// Destination paths written.
    pub copied: Vec<PathBuf>,
    /// Sources that were already in place or no longer exist.
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, Error)>,
}

impl CopyReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// One line per failed source, for the error dialog.
    pub fn failure_summary(&self) -> String {
        self.failed
            .iter()
            .map(|(source, err)| format!("{}: {}", source.display(), err))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

enum Copied {
    To(PathBuf),
    Skipped,
}

/// Copies each source into `dest_dir` under its own file name.
///
/// Files overwrite existing files; directories are merged recursively.
/// Every source is attempted even if an earlier one fails.
pub fn copy_onto(dest_dir: &Path, sources: &[PathBuf]) -> CopyReport {
    let mut report = CopyReport::default();

    for source in sources {
        match copy_one(dest_dir, source) {
            Ok(Copied::To(dest)) => report.copied.push(dest),
            Ok(Copied::Skipped) => report.skipped.push(source.clone()),
            Err(e) => {
                warn!("Failed to copy {}: {}", source.display(), e);
                report.failed.push((source.clone(), e));
            }
        }
    }

    info!(
        "Copied {} item(s) to {} ({} skipped, {} failed)",
        report.copied.len(),
        dest_dir.display(),
        report.skipped.len(),
        report.failed.len()
    );
    report
}

fn copy_one(dest_dir: &Path, source: &Path) -> Result<Copied> {
    let Some(name) = source.file_name() else {
        debug!("Skipping source without a file name: {}", source.display());
        return Ok(Copied::Skipped);
    };
    let dest = dest_dir.join(name);

    let meta = match fs::metadata(source) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Source vanished: {}", source.display());
            return Ok(Copied::Skipped);
        }
        Err(e) => return Err(Error::io("inspecting", source, e)),
    };

    if is_same_path(source, &dest) {
        debug!("Already on the desktop: {}", source.display());
        return Ok(Copied::Skipped);
    }

    if meta.is_dir() {
        if is_inside(dest_dir, source) {
            return Err(Error::CopyIntoSelf(source.to_path_buf()));
        }
        copy_dir_recursive(source, &dest)?;
    } else {
        fs::copy(source, &dest).map_err(|e| Error::io("copying", source, e))?;
    }

    debug!("Copied {} -> {}", source.display(), dest.display());
    Ok(Copied::To(dest))
}

/// Copies `src` into `dest`, creating directories and overwriting files.
///
/// Links inside the tree are not followed into directories: a link to a
/// file is copied as the file, anything else behind a link is skipped.
/// Links and junctions pointing back up the tree would otherwise recurse
/// until the path gets too long.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest).map_err(|e| Error::io("creating", dest, e))?;

    let entries = fs::read_dir(src).map_err(|e| Error::io("reading", src, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io("reading", src, e))?;
        let path = entry.path();
        let target = dest.join(entry.file_name());

        let file_type = entry
            .file_type()
            .map_err(|e| Error::io("inspecting", &path, e))?;

        if file_type.is_symlink() {
            match fs::metadata(&path) {
                Ok(meta) if meta.is_file() => {}
                _ => {
                    warn!("Not following link {}", path.display());
                    continue;
                }
            }
        }

        if file_type.is_dir() {
            copy_dir_recursive(&path, &target)?;
        } else {
            fs::copy(&path, &target).map_err(|e| Error::io("copying", &path, e))?;
        }
    }
    Ok(())
}

fn is_same_path(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// True when `path` is `ancestor` or lies below it.
fn is_inside(path: &Path, ancestor: &Path) -> bool {
    match (fs::canonicalize(path), fs::canonicalize(ancestor)) {
        (Ok(path), Ok(ancestor)) => path.starts_with(ancestor),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn copies_files_and_overwrites() {
        let src = tempfile::tempdir().unwrap();
        let desk = tempfile::tempdir().unwrap();
        write(&src.path().join("a.txt"), "new");
        write(&desk.path().join("a.txt"), "old");

        let report = copy_onto(desk.path(), &[src.path().join("a.txt")]);
        assert!(report.is_success());
        assert_eq!(report.copied, vec![desk.path().join("a.txt")]);
        assert_eq!(fs::read_to_string(desk.path().join("a.txt")).unwrap(), "new");
    }

    #[test]
    fn copies_directories_recursively() {
        let src = tempfile::tempdir().unwrap();
        let desk = tempfile::tempdir().unwrap();
        write(&src.path().join("proj/readme.md"), "hi");
        write(&src.path().join("proj/src/main.rs"), "fn main() {}");
        fs::create_dir_all(src.path().join("proj/empty")).unwrap();

        let report = copy_onto(desk.path(), &[src.path().join("proj")]);
        assert!(report.is_success());
        assert_eq!(
            fs::read_to_string(desk.path().join("proj/src/main.rs")).unwrap(),
            "fn main() {}"
        );
        assert!(desk.path().join("proj/empty").is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn links_inside_a_folder_are_not_followed_into_directories() {
        use std::os::unix::fs::symlink;

        let src = tempfile::tempdir().unwrap();
        let desk = tempfile::tempdir().unwrap();
        let proj = src.path().join("proj");
        write(&proj.join("a.txt"), "alpha");
        symlink(&proj, proj.join("loop")).unwrap();
        symlink(proj.join("a.txt"), proj.join("alias.txt")).unwrap();
        symlink(proj.join("missing"), proj.join("dangling")).unwrap();

        let report = copy_onto(desk.path(), &[proj.clone()]);
        assert!(report.is_success(), "{}", report.failure_summary());

        let copied = desk.path().join("proj");
        assert_eq!(fs::read_to_string(copied.join("a.txt")).unwrap(), "alpha");
        assert!(!copied.join("loop").exists());
        assert!(!copied.join("dangling").exists());

        let alias = copied.join("alias.txt");
        assert!(!fs::symlink_metadata(&alias).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(alias).unwrap(), "alpha");
    }

    #[test]
    fn source_already_on_desktop_is_skipped() {
        let desk = tempfile::tempdir().unwrap();
        write(&desk.path().join("keep.txt"), "data");

        let report = copy_onto(desk.path(), &[desk.path().join("keep.txt")]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(fs::read_to_string(desk.path().join("keep.txt")).unwrap(), "data");
    }

    #[test]
    fn missing_source_is_skipped() {
        let desk = tempfile::tempdir().unwrap();
        let report = copy_onto(desk.path(), &[desk.path().join("nope").join("gone.txt")]);
        assert!(report.is_success());
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn refuses_to_copy_a_folder_into_itself() {
        let root = tempfile::tempdir().unwrap();
        let outer = root.path().join("outer");
        let desk = outer.join("desk");
        fs::create_dir_all(&desk).unwrap();

        let report = copy_onto(&desk, &[outer.clone()]);
        assert_eq!(report.failed.len(), 1);
        assert!(matches!(report.failed[0].1, Error::CopyIntoSelf(_)));
        assert!(report.failure_summary().contains("into itself"));
    }

    #[test]
    fn one_failure_does_not_stop_the_rest() {
        let root = tempfile::tempdir().unwrap();
        let outer = root.path().join("outer");
        let desk = outer.join("desk");
        fs::create_dir_all(&desk).unwrap();
        write(&root.path().join("ok.txt"), "fine");

        let report = copy_onto(&desk, &[outer.clone(), root.path().join("ok.txt")]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.copied, vec![desk.join("ok.txt")]);
    }
}
