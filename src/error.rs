//! Error type shared by the library and the Windows front-end.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid hide regex: {0}")]
    HideRegex(#[from] regex::Error),

    #[error("invalid hotkey {0:?}: expected a single letter or digit")]
    Hotkey(String),

    #[error("desktop folder could not be located")]
    DesktopNotFound,

    #[error("refusing to copy {} into itself", .0.display())]
    CopyIntoSelf(PathBuf),

    #[error("{0}")]
    Usage(String),

    #[cfg(target_os = "windows")]
    #[error("win32: {0}")]
    Win32(#[from] windows::core::Error),
}

impl Error {
    /// Wraps an `io::Error` with the action and path that produced it.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message_names_action_and_path() {
        let err = Error::io(
            "reading",
            "C:/missing/config.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("reading C:/missing/config.json"));
        assert!(msg.ends_with("not found"));
    }

    #[test]
    fn hotkey_error_quotes_value() {
        assert_eq!(
            Error::Hotkey("F12".into()).to_string(),
            "invalid hotkey \"F12\": expected a single letter or digit"
        );
    }
}
