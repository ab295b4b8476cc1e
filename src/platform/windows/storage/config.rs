//! In-memory config cache over the JSON settings file.
//!
//! Loaded once at startup and again on "Reload settings". Changes made from
//! the UI are saved immediately, so the cache never holds unsaved state.

use std::cell::RefCell;

use tracing::{info, warn};

use crate::error::Result;
use crate::model::AppConfig;
use crate::storage::ConfigStore;

thread_local! {
    static STORE: RefCell<Option<ConfigStore>> = const { RefCell::new(None) };
    static CONFIG_CACHE: RefCell<Option<AppConfig>> = const { RefCell::new(None) };
}

/// Binds the cache to `store` and loads it.
///
/// On failure the cache holds type defaults and the error is returned so
/// the caller can report it.
pub fn init_config(store: ConfigStore) -> Result<()> {
    STORE.with(|s| *s.borrow_mut() = Some(store));
    reload_config()
}

/// Re-reads the settings file into the cache.
pub fn reload_config() -> Result<()> {
    let loaded = STORE.with(|s| s.borrow().as_ref().map(ConfigStore::load_or_init));
    let (config, result) = match loaded {
        Some(Ok(config)) => (config, Ok(())),
        Some(Err(e)) => {
            warn!("Using default settings: {}", e);
            (AppConfig::default(), Err(e))
        }
        None => (AppConfig::default(), Ok(())),
    };
    CONFIG_CACHE.with(|c| *c.borrow_mut() = Some(config));
    result
}

/// Snapshot of the cached config.
pub fn current_config() -> AppConfig {
    CONFIG_CACHE.with(|c| c.borrow().clone().unwrap_or_default())
}

/// Applies `change` to the cached config and saves the whole document.
///
/// The cache is updated even if the write fails.
pub fn update_config(change: impl FnOnce(&mut AppConfig)) -> Result<AppConfig> {
    let mut config = current_config();
    change(&mut config);
    CONFIG_CACHE.with(|c| *c.borrow_mut() = Some(config.clone()));

    STORE.with(|s| match s.borrow().as_ref() {
        Some(store) => {
            store.save(&config)?;
            info!("Saved settings to {}", store.path().display());
            Ok(())
        }
        None => Ok(()),
    })?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_persists_and_reload_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("config.json"));
        init_config(store.clone()).unwrap();
        assert!(current_config().show_paste_area);

        let updated = update_config(|c| c.show_paste_area = false).unwrap();
        assert!(!updated.show_paste_area);

        reload_config().unwrap();
        assert!(!current_config().show_paste_area);
        assert!(!store.load_or_init().unwrap().show_paste_area);
    }

    #[test]
    fn broken_file_falls_back_to_type_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(init_config(ConfigStore::new(&path)).is_err());
        assert_eq!(current_config(), AppConfig::default());
    }
}
