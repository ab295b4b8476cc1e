//! Settings persistence.
//!
//! Persists settings to a JSON file in %APPDATA%/DesktopMirror/config.json

mod config;

pub use config::*;
