//! InvoiceKit Settings Crate
//!
//! Handles editor configuration and its persistence.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{
    EditorSettings, DEFAULT_DEBOUNCE_MS, DEFAULT_GRID_SIZE, DEFAULT_HISTORY_LIMIT,
    DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH,
};
pub use error::{SettingsError, SettingsResult};
pub use persistence::{default_settings_path, SettingsPersistence};
