//! Editor settings
//!
//! Canvas geometry, snapping, debounce and history depth for the template
//! editor. Stored as JSON or TOML, chosen by file extension.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A4 at 96 dpi
pub const DEFAULT_PAGE_WIDTH: f64 = 794.0;
pub const DEFAULT_PAGE_HEIGHT: f64 = 1123.0;

pub const DEFAULT_GRID_SIZE: u32 = 10;
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Template editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Grid spacing in canvas units
    pub grid_size: u32,
    /// Round drop positions to the grid
    pub snap_to_grid: bool,
    /// Quiet period before staged property edits are committed
    pub debounce_ms: u64,
    pub page_width: f64,
    pub page_height: f64,
    /// Maximum number of undo snapshots
    pub history_limit: usize,
    /// Viewports at least this wide open the properties panel on drop
    pub wide_viewport_min_width: u32,
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub default_zoom: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            snap_to_grid: false,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            page_width: DEFAULT_PAGE_WIDTH,
            page_height: DEFAULT_PAGE_HEIGHT,
            history_limit: DEFAULT_HISTORY_LIMIT,
            wide_viewport_min_width: 1024,
            zoom_min: 0.25,
            zoom_max: 3.0,
            default_zoom: 1.0,
        }
    }
}

impl EditorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        tracing::debug!(path = %path.display(), "editor settings loaded");
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = FileFormat::from_path(path)?;

        let content = match format {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "editor settings saved");
        Ok(())
    }

    /// Validate settings
    pub fn validate(&self) -> SettingsResult<()> {
        if self.grid_size == 0 {
            return Err(SettingsError::invalid("grid_size", "must be > 0"));
        }

        if self.debounce_ms == 0 {
            return Err(SettingsError::invalid("debounce_ms", "must be > 0"));
        }

        if !self.page_width.is_finite()
            || !self.page_height.is_finite()
            || self.page_width <= 0.0
            || self.page_height <= 0.0
        {
            return Err(SettingsError::invalid("page_size", "dimensions must be > 0"));
        }

        if self.history_limit == 0 {
            return Err(SettingsError::invalid("history_limit", "must be > 0"));
        }

        if self.wide_viewport_min_width == 0 {
            return Err(SettingsError::invalid("wide_viewport_min_width", "must be > 0"));
        }

        if !self.zoom_min.is_finite()
            || !self.zoom_max.is_finite()
            || self.zoom_min <= 0.0
            || self.zoom_max < self.zoom_min
        {
            return Err(SettingsError::invalid(
                "zoom_range",
                format!("invalid range {}..{}", self.zoom_min, self.zoom_max),
            ));
        }

        if !self.default_zoom.is_finite()
            || self.default_zoom < self.zoom_min
            || self.default_zoom > self.zoom_max
        {
            return Err(SettingsError::invalid(
                "default_zoom",
                format!("{} outside {}..{}", self.default_zoom, self.zoom_min, self.zoom_max),
            ));
        }

        Ok(())
    }

    /// Clamp a zoom factor to the configured range.
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.max(self.zoom_min).min(self.zoom_max)
    }

    /// Whether a viewport of `width` pixels counts as wide.
    pub fn is_wide_viewport(&self, width: u32) -> bool {
        width >= self.wide_viewport_min_width
    }
}
