//! Desktop Mirror: a tray utility that pops up a mirror of the desktop on a
//! global hotkey.
//!
//! Everything outside `platform` is free of Win32 FFI so tests can run as
//! normal unit and integration tests on any OS.

pub mod cli;
pub mod error;
pub mod events;
pub mod model;
pub mod platform;
pub mod storage;
pub mod transfer;

pub use error::{Error, Result};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::{AppConfig, DesktopItem, DisplayRules, PanelState};
pub use storage::ConfigStore;

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Builds display rules from the config. An invalid hide regex is returned
/// alongside rules that filter nothing, so the caller can report it.
pub fn display_rules(config: &AppConfig) -> (DisplayRules, Option<Error>) {
    match config.compile_hide_filter() {
        Ok(filter) => (DisplayRules::new(config, filter), None),
        Err(e) => (DisplayRules::new(config, None), Some(e)),
    }
}
