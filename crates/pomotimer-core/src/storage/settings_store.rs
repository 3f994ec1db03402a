//! JSON-backed settings persistence.
//!
//! The store owns exactly one file. Loading never fails the caller: a
//! missing, unreadable or invalid record yields [`Settings::default`].
//! Saving writes a sibling temporary file and renames it over the target,
//! so an interrupted save leaves the previous record in place.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use super::SETTINGS_FILE;
use crate::error::ConfigError;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(SETTINGS_FILE)
    }
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load from disk, returning defaults on any error.
    pub fn load(&self) -> Settings {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no settings file, using defaults");
            return Settings::default();
        }
        match self.try_load() {
            Ok(settings) => {
                debug!(path = %self.path.display(), "settings loaded");
                settings
            }
            Err(e) => {
                warn!(error = %e, "settings unusable, falling back to defaults");
                Settings::default()
            }
        }
    }

    /// Load and validate the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a complete
    /// record, or violates a settings invariant.
    pub fn try_load(&self) -> Result<Settings, ConfigError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: self.path.clone(),
                source,
            })?;
        settings.validated()
    }

    /// Persist the full record, replacing the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be written or renamed
    /// over the target.
    pub fn save(&self, settings: &Settings) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        serde_json::to_writer_pretty(&mut tmp, settings).map_err(|e| write_err(e.into()))?;
        tmp.flush().map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        info!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}
