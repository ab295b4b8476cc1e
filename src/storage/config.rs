//! JSON settings file.
//!
//! Stores settings in `%APPDATA%/DesktopMirror/config.json` unless another
//! path is given. The document is always written whole.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::constants::{APP_NAME, CONFIG_FILE_NAME};
use crate::model::AppConfig;

/// Location of the settings document.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/DesktopMirror/config.json`, or the working directory
    /// when the platform has no config dir.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
            .join(CONFIG_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config, or writes and returns first-run defaults when no
    /// file exists yet.
    pub fn load_or_init(&self) -> Result<AppConfig> {
        if let Some(config) = self.read()? {
            return Ok(config);
        }
        let config = AppConfig::first_run();
        self.save(&config)?;
        info!("Wrote first-run config to {}", self.path.display());
        Ok(config)
    }

    /// Like `load_or_init` but never writes: a missing file yields the
    /// first-run defaults in memory only.
    pub fn load_read_only(&self) -> Result<AppConfig> {
        Ok(self.read()?.unwrap_or_else(AppConfig::first_run))
    }

    fn read(&self) -> Result<Option<AppConfig>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let config = serde_json::from_str(&contents)?;
                debug!("Loaded config from {}", self.path.display());
                Ok(Some(config))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io("reading", &self.path, e)),
        }
    }

    /// Writes the whole document as indented JSON.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io("creating", parent, e))?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json).map_err(|e| Error::io("writing", &self.path, e))
    }
}
