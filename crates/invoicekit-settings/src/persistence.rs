//! Settings persistence
//!
//! Resolves the per-user settings file and loads it, falling back to
//! defaults when nothing has been saved yet.

use crate::config::EditorSettings;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "invoicekit";
const SETTINGS_FILE: &str = "editor.toml";

/// Default settings file: `<config dir>/invoicekit/editor.toml`
pub fn default_settings_path() -> SettingsResult<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        SettingsError::ConfigDirectory("no configuration directory on this platform".to_string())
    })?;
    Ok(base.join(APP_DIR).join(SETTINGS_FILE))
}

/// Settings bound to the file they were loaded from
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    path: PathBuf,
    settings: EditorSettings,
}

impl SettingsPersistence {
    /// Load from `path`, using defaults when the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> SettingsResult<Self> {
        let path = path.into();
        let settings = if path.exists() {
            EditorSettings::load_from_file(&path)?
        } else {
            tracing::info!(path = %path.display(), "no settings file, using defaults");
            EditorSettings::default()
        };
        Ok(Self { path, settings })
    }

    /// Load from the platform default location.
    pub fn open_default() -> SettingsResult<Self> {
        Self::open(default_settings_path()?)
    }

    /// Write the current settings, creating parent directories as needed.
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| {
                    SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
                })?;
        }
        self.settings.save_to_file(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut EditorSettings {
        &mut self.settings
    }
}
